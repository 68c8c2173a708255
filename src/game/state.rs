//! The simulation: snake body, heading, food, score and run state.

use std::collections::VecDeque;

use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use super::{
    ARENA_HEIGHT, ARENA_WIDTH, Direction, INITIAL_DIRECTION, INITIAL_SNAKE_LENGTH,
    INITIAL_SNAKE_POSITION, Position,
};
use crate::food;

/// Whether the simulation is still advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    GameOver,
}

/// Transient flags raised by a single tick. Cleared by the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    pub food_eaten: bool,
    pub game_over: bool,
}

/// Owned copy of everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub body: Vec<Position>,
    pub food: Position,
    pub score: usize,
    pub direction: Direction,
    pub run_state: RunState,
}

/// Main game state resource.
///
/// The body is ordered head first. It never shrinks while running and never
/// mutates once the run is over, except through [`GameState::reset`].
#[derive(Resource)]
pub struct GameState {
    body: VecDeque<Position>,
    direction: Direction,
    food: Position,
    score: usize,
    run_state: RunState,
    last_events: TickEvents,
    rng: StdRng,
}

impl GameState {
    /// Starts a run with food drawn from an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Starts a run whose food sequence is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let mut state = GameState {
            body: VecDeque::with_capacity((ARENA_WIDTH * ARENA_HEIGHT) as usize + 1),
            direction: INITIAL_DIRECTION,
            food: INITIAL_SNAKE_POSITION,
            score: 0,
            run_state: RunState::Running,
            last_events: TickEvents::default(),
            rng,
        };
        state.reset();
        state
    }

    /// Reinitializes to the starting layout: three segments trailing to the
    /// left of the head, heading right, score zero, fresh food.
    pub fn reset(&mut self) {
        let tail_dir = INITIAL_DIRECTION.opposite();
        self.body.clear();
        self.body.push_back(INITIAL_SNAKE_POSITION);
        for _ in 1..INITIAL_SNAKE_LENGTH {
            let next = self.tail().step(tail_dir);
            self.body.push_back(next);
        }

        self.direction = INITIAL_DIRECTION;
        self.score = 0;
        self.run_state = RunState::Running;
        self.last_events = TickEvents::default();
        self.food = food::random_position(&mut self.rng);

        info!("new run started, food at {:?}", self.food);
    }

    /// Requests a new heading. A direct reversal is ignored.
    ///
    /// Accepted in any run state; after game over it only changes the
    /// reported heading, never the body. Returns whether the heading was applied.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if requested == self.direction.opposite() {
            return false;
        }
        if requested != self.direction {
            debug!("heading {} -> {}", self.direction, requested);
        }
        self.direction = requested;
        true
    }

    /// Advances the simulation by one step and returns the flags it raised.
    ///
    /// The post-tick state is read through [`GameState::snapshot`] or the
    /// accessors. Does nothing once the run is over apart from clearing the
    /// event flags.
    pub fn tick(&mut self) -> TickEvents {
        let mut events = TickEvents::default();
        if self.run_state == RunState::GameOver {
            self.last_events = events;
            return events;
        }

        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);
        let vacated = self.body.pop_back();

        if new_head.collides_with(&self.food) {
            // Growth keeps the cell the tail just left.
            if let Some(tail) = vacated {
                self.body.push_back(tail);
            }
            self.score += 1;
            self.food = food::random_position(&mut self.rng);
            events.food_eaten = true;
            debug!(
                "food eaten at {:?}, score {}, next food at {:?}",
                new_head, self.score, self.food
            );
        }

        let bitten = self.body.iter().skip(1).any(|s| s.collides_with(&new_head));
        let out_of_bounds = !new_head.within(ARENA_WIDTH, ARENA_HEIGHT);
        if bitten || out_of_bounds {
            self.run_state = RunState::GameOver;
            events.game_over = true;
            info!(
                "game over ({}) at {:?}, final score {}",
                if bitten { "self collision" } else { "wall" },
                new_head,
                self.score
            );
        }

        self.last_events = events;
        events
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Snake cells, head first.
    pub fn body(&self) -> impl ExactSizeIterator<Item = &Position> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Flags raised by the most recent tick.
    pub fn last_events(&self) -> TickEvents {
        self.last_events
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, food: Position) {
        self.food = food;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.body.iter().copied().collect(),
            food: self.food,
            score: self.score,
            direction: self.direction,
            run_state: self.run_state,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
