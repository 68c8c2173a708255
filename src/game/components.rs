//! Grid primitives shared by the simulation and the presentation layer.

use std::fmt;
use std::str::FromStr;

use super::GameError;

/// A cell on the play field. Row 0 is the top edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Check if this position collides with another position.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// The neighbouring cell one step in `direction`.
    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the cell lies inside `[0, width) x [0, height)`.
    pub fn within(&self, width: u32, height: u32) -> bool {
        (0..width as i32).contains(&self.x) && (0..height as i32).contains(&self.y)
    }
}

/// Heading of the snake.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Cell offset of a single move. Up moves towards row 0.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

impl TryFrom<char> for Direction {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'U' => Ok(Direction::Up),
            'D' => Ok(Direction::Down),
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(c.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Direction::try_from(c);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opposite_is_an_involution() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_ne!(d, d.opposite());
            assert_eq!(d, d.opposite().opposite());
        }
    }

    #[test]
    fn up_moves_towards_row_zero() {
        let p = Position::new(5, 5);
        assert_eq!(p.step(Direction::Up), Position::new(5, 4));
        assert_eq!(p.step(Direction::Down), Position::new(5, 6));
        assert_eq!(p.step(Direction::Left), Position::new(4, 5));
        assert_eq!(p.step(Direction::Right), Position::new(6, 5));
    }

    #[test]
    fn within_is_half_open() {
        assert!(Position::new(0, 0).within(20, 20));
        assert!(Position::new(19, 19).within(20, 20));
        assert!(!Position::new(20, 0).within(20, 20));
        assert!(!Position::new(0, 20).within(20, 20));
        assert!(!Position::new(-1, 3).within(20, 20));
    }

    #[test]
    fn parses_names_and_letters() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!(" Right ".parse::<Direction>().unwrap(), Direction::Right);
        assert_eq!("l".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!(Direction::try_from('D').unwrap(), Direction::Down);
    }

    #[test]
    fn rejects_unknown_directions() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err, GameError::InvalidDirection("sideways".to_string()));
        assert!(Direction::try_from('x').is_err());
        assert!("".parse::<Direction>().is_err());
    }
}
