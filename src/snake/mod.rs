//! Snake plugin - drives the simulation from a fixed timer and maps keys to headings.

use bevy::prelude::*;

use crate::game::{Direction, GameState, MOVE_INTERVAL};

/// Plugin for input handling and the tick loop.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameState>()
            .init_resource::<TickTimer>()
            .add_message::<FoodEaten>()
            .add_message::<GameOver>()
            .add_message::<GameStarted>()
            .add_systems(Startup, announce_first_run)
            .add_systems(Update, (snake_movement_input, advance_game).chain());
    }
}

/// Message written on the tick the head lands on food.
#[derive(Message, Clone, Debug)]
pub struct FoodEaten;

/// Message written on the tick the run ends.
#[derive(Message, Clone, Debug)]
pub struct GameOver {
    pub score: usize,
}

/// Message written when a run begins, including restarts.
#[derive(Message, Clone, Debug)]
pub struct GameStarted;

/// Fixed-interval timer that drives [`GameState::tick`]. Paused on game over.
#[derive(Resource, Deref, DerefMut)]
pub struct TickTimer(pub Timer);

impl Default for TickTimer {
    fn default() -> Self {
        TickTimer(Timer::new(MOVE_INTERVAL, TimerMode::Repeating))
    }
}

/// Arrow keys and WASD.
pub fn direction_for_key(key: KeyCode) -> Option<Direction> {
    match key {
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::Right),
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::Up),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::Down),
        _ => None,
    }
}

fn announce_first_run(mut started: MessageWriter<GameStarted>) {
    started.write(GameStarted);
}

/// System to forward key presses to the heading guard in the core.
fn snake_movement_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut game: ResMut<GameState>) {
    for key in keyboard_input.get_just_pressed() {
        if let Some(direction) = direction_for_key(*key) {
            game.set_direction(direction);
        }
    }
}

/// System to run as many ticks as the timer owes and publish their events.
fn advance_game(
    time: Res<Time>,
    mut timer: ResMut<TickTimer>,
    mut game: ResMut<GameState>,
    mut food_eaten_writer: MessageWriter<FoodEaten>,
    mut game_over_writer: MessageWriter<GameOver>,
) {
    timer.tick(time.delta());

    for _ in 0..timer.times_finished_this_tick() {
        let events = game.tick();

        if events.food_eaten {
            food_eaten_writer.write(FoodEaten);
        }

        if events.game_over {
            game_over_writer.write(GameOver {
                score: game.score(),
            });
            timer.pause();
            break;
        }
    }
}
