//! Headless app helpers shared by the plugin tests.

use bevy::ecs::message::{Message, MessageCursor, Messages};
use bevy::prelude::*;

use crate::game::GameState;
use crate::snake::SnakePlugin;

/// Tick loop and input wiring without a window, renderer or audio device.
pub fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<ButtonInput<KeyCode>>()
        .insert_resource(GameState::with_seed(9))
        .add_plugins(SnakePlugin);
    app
}

pub fn press(app: &mut App, key: KeyCode) {
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.clear();
    input.press(key);
}

/// Cursor positioned after every message of type `M` written so far.
pub fn cursor_after_existing<M: Message>(app: &App) -> MessageCursor<M> {
    app.world().resource::<Messages<M>>().get_cursor_current()
}

/// Messages of type `M` written since `cursor` was last advanced.
pub fn read_new<M: Message + Clone>(app: &App, cursor: &mut MessageCursor<M>) -> Vec<M> {
    cursor
        .read(app.world().resource::<Messages<M>>())
        .cloned()
        .collect()
}
