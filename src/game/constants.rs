//! Game constants for arena size, colors, timing, rendering layers and audio cues.

use bevy::prelude::*;
use std::time::Duration;

use super::{Direction, Position};

// Arena dimensions
pub const ARENA_WIDTH: u32 = 20;
pub const ARENA_HEIGHT: u32 = 20;

// Visual settings
pub const CELL_SIZE: f32 = 30.0;
pub const CORNER_RADIUS: f32 = 4.0;

// Timing
pub const MOVE_INTERVAL: Duration = Duration::from_millis(70);

// Initial snake
pub const INITIAL_SNAKE_POSITION: Position = Position { x: 3, y: 3 };
pub const INITIAL_SNAKE_LENGTH: usize = 3;
pub const INITIAL_DIRECTION: Direction = Direction::Right;

// Colors
pub const SNAKE_HEAD_COLOR: Color = Color::srgba(0.0, 0.39, 0.0, 1.0);
pub const SNAKE_SEGMENT_COLOR: Color = Color::srgba(0.0, 0.5, 0.0, 1.0);
pub const FOOD_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);
pub const ARENA_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 1.0);
pub const ARENA_BORDER_COLOR: Color = Color::srgba(0.3, 0.3, 0.3, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.04, 0.04, 0.04, 1.0);
pub const TEXT_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;

// Audio cues, relative to the asset directory
pub const EAT_SOUND: &str = "sounds/point.wav";
pub const GAME_OVER_SOUND: &str = "sounds/gameover.wav";
pub const MUSIC_TRACK: &str = "sounds/snakemusic.wav";
