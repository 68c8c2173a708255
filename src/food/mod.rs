//! Food placement.
//!
//! Food lands on a uniformly random cell of the arena. Cells occupied by the
//! snake are not excluded, so food may appear underneath the body.

use rand::Rng;

use crate::game::{ARENA_HEIGHT, ARENA_WIDTH, Position};

/// Picks a new food cell with independent uniform draws per axis.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R) -> Position {
    Position {
        x: rng.random_range(0..ARENA_WIDTH as i32),
        y: rng.random_range(0..ARENA_HEIGHT as i32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn food_stays_inside_the_arena() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            let food = random_position(&mut rng);
            assert!(food.within(ARENA_WIDTH, ARENA_HEIGHT), "{food:?} escaped");
        }
    }

    #[test]
    fn food_reaches_every_edge() {
        let mut rng = StdRng::seed_from_u64(11);
        let cells: Vec<Position> = (0..5_000).map(|_| random_position(&mut rng)).collect();

        let max_x = ARENA_WIDTH as i32 - 1;
        let max_y = ARENA_HEIGHT as i32 - 1;
        assert!(cells.iter().any(|p| p.x == 0));
        assert!(cells.iter().any(|p| p.x == max_x));
        assert!(cells.iter().any(|p| p.y == 0));
        assert!(cells.iter().any(|p| p.y == max_y));
    }
}
