use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use snake_classic::game::{ARENA_HEIGHT, ARENA_WIDTH, BACKGROUND_COLOR, CELL_SIZE};
use snake_classic::{
    rendering::RenderingPlugin, snake::SnakePlugin, sound::SoundPlugin, ui::UiPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        resolution: WindowResolution::new(
                            (ARENA_WIDTH as f32 * CELL_SIZE + 20.0) as u32,
                            (ARENA_HEIGHT as f32 * CELL_SIZE + 20.0) as u32,
                        ),
                        title: "Snake Game".to_string(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "wgpu=error,naga=warn,snake_classic=debug".to_string(),
                    ..default()
                }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins((SnakePlugin, RenderingPlugin, UiPlugin, SoundPlugin))
        .run();
}
