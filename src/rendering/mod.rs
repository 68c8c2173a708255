//! Rendering plugin - paints the arena, snake and food from the current state.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use rand::prelude::*;

use crate::game::{
    ARENA_BORDER_COLOR, ARENA_COLOR, ARENA_HEIGHT, ARENA_WIDTH, CELL_SIZE, CORNER_RADIUS,
    FOOD_COLOR, GameState, Position, SNAKE_HEAD_COLOR, SNAKE_SEGMENT_COLOR, Z_BACKGROUND, Z_FOOD,
    Z_SNAKE_HEAD, Z_SNAKE_SEGMENT,
};
use crate::snake::GameOver;

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraShake>().add_systems(
            Update,
            (
                draw_arena,
                draw_food,
                draw_snake,
                trigger_camera_shake_on_game_over,
                camera_shake_system,
            )
                .chain(),
        );
    }
}

/// Resource for camera shake effect.
#[derive(Resource)]
pub struct CameraShake {
    pub timer: Timer,
    pub intensity: f32,
}

impl Default for CameraShake {
    fn default() -> Self {
        let mut timer = Timer::from_seconds(0.0, TimerMode::Once);
        timer.tick(std::time::Duration::ZERO);
        CameraShake {
            timer,
            intensity: 0.0,
        }
    }
}

/// World-space centre of a grid cell. Row 0 is drawn at the top.
pub fn cell_to_world(pos: Position, z: f32) -> Vec3 {
    Vec3::new(
        (pos.x as f32 - ARENA_WIDTH as f32 / 2.0 + 0.5) * CELL_SIZE,
        (ARENA_HEIGHT as f32 / 2.0 - pos.y as f32 - 0.5) * CELL_SIZE,
        z,
    )
}

fn draw_arena(mut painter: ShapePainter) {
    let size = Vec2::new(
        ARENA_WIDTH as f32 * CELL_SIZE,
        ARENA_HEIGHT as f32 * CELL_SIZE,
    );

    painter.reset();
    painter.set_translation(Vec3::new(0.0, 0.0, Z_BACKGROUND));
    painter.color = ARENA_COLOR;
    painter.rect(size);

    painter.hollow = true;
    painter.thickness = 4.0;
    painter.color = ARENA_BORDER_COLOR;
    painter.rect(size + Vec2::splat(4.0));
}

fn draw_food(mut painter: ShapePainter, game_state: Res<GameState>) {
    painter.reset();
    painter.set_translation(cell_to_world(game_state.food(), Z_FOOD));
    painter.color = FOOD_COLOR;
    painter.circle(CELL_SIZE / 2.0);
}

fn draw_snake(mut painter: ShapePainter, game_state: Res<GameState>) {
    let size = CELL_SIZE;
    // Normalize corner radius relative to the shape size (0.0 to 1.0 range)
    let corner_radius_normalized = CORNER_RADIUS / (size / 2.0);

    painter.reset();
    painter.corner_radii = Vec4::splat(corner_radius_normalized);

    for (i, segment) in game_state.body().enumerate() {
        // The head sits past the wall on the tick that ended the run.
        if !segment.within(ARENA_WIDTH, ARENA_HEIGHT) {
            continue;
        }

        let (color, z) = if i == 0 {
            (SNAKE_HEAD_COLOR, Z_SNAKE_HEAD)
        } else {
            (SNAKE_SEGMENT_COLOR, Z_SNAKE_SEGMENT)
        };
        painter.color = color;
        painter.set_translation(cell_to_world(*segment, z));
        painter.rect(Vec2::splat(size));
    }
}

/// System to trigger camera shake on game over.
fn trigger_camera_shake_on_game_over(
    mut game_over_reader: MessageReader<GameOver>,
    mut camera_shake: ResMut<CameraShake>,
) {
    if game_over_reader.read().last().is_some() {
        camera_shake.timer = Timer::from_seconds(0.5, TimerMode::Once);
        camera_shake.intensity = 8.0;
    }
}

/// System to apply camera shake effect.
fn camera_shake_system(
    time: Res<Time>,
    mut camera_shake: ResMut<CameraShake>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    if camera_shake.timer.is_finished() {
        return;
    }
    camera_shake.timer.tick(time.delta());

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        if camera_shake.timer.is_finished() {
            camera_transform.translation.x = 0.0;
            camera_transform.translation.y = 0.0;
        } else {
            let decay = 1.0 - camera_shake.timer.fraction();

            let mut rng = rand::rng();
            let shake_x = (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;
            let shake_y = (rng.random::<f32>() - 0.5) * camera_shake.intensity * decay;

            camera_transform.translation.x = shake_x;
            camera_transform.translation.y = shake_y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_cells_map_to_arena_corners() {
        let half = ARENA_WIDTH as f32 * CELL_SIZE / 2.0 - CELL_SIZE / 2.0;

        let top_left = cell_to_world(Position::new(0, 0), 0.0);
        assert_eq!(top_left.truncate(), Vec2::new(-half, half));

        let bottom_right = cell_to_world(Position::new(19, 19), 0.0);
        assert_eq!(bottom_right.truncate(), Vec2::new(half, -half));
    }

    #[test]
    fn idle_shake_stays_finished() {
        assert!(CameraShake::default().timer.is_finished());
    }
}
