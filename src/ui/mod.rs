//! UI plugin - handles the camera, score display, game over screen and restarts.

use bevy::prelude::*;

use crate::game::{GameState, TEXT_COLOR};
use crate::snake::{GameOver, GameStarted, TickTimer};

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (restart_game, update_score_text, spawn_game_over_screen_system).chain(),
        );
    }
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;

/// Initial setup system - camera and score text.
fn setup_system(mut commands: Commands) {
    commands.spawn(Camera2d);

    commands.spawn((
        Text::from("Score: 0"),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, score: usize) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GameOverUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::from("GAME OVER!!!"),
                TextFont {
                    font_size: 60.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from(format!("Score: {}", score)),
                TextFont {
                    font_size: 30.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::from("Press SPACE to restart"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgba(0.8, 0.8, 0.8, 1.0)),
            ));
        });
}

/// System to spawn the game over screen when a run ends.
fn spawn_game_over_screen_system(
    mut commands: Commands,
    mut game_over_reader: MessageReader<GameOver>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if let Some(game_over) = game_over_reader.read().last()
        && game_over_ui.is_empty()
    {
        spawn_game_over_screen(&mut commands, game_over.score);
    }
}

/// System to restart the game from the game over screen.
fn restart_game(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut tick_timer: ResMut<TickTimer>,
    mut started_writer: MessageWriter<GameStarted>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    if game_state.is_running() || !keyboard_input.just_pressed(KeyCode::Space) {
        return;
    }

    for entity in game_over_ui.iter() {
        commands.entity(entity).despawn();
    }

    game_state.reset();
    tick_timer.reset();
    tick_timer.unpause();
    started_writer.write(GameStarted);
}

/// System to update the score display.
fn update_score_text(game_state: Res<GameState>, mut query: Query<&mut Text, With<ScoreText>>) {
    if !game_state.is_changed() {
        return;
    }
    if let Ok(mut text) = query.single_mut() {
        *text = Text::from(format!("Score: {}", game_state.score()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cursor_after_existing, press, read_new, test_app};

    fn restart_app() -> App {
        let mut app = test_app();
        app.add_systems(Update, restart_game);
        app.update();
        app
    }

    #[test]
    fn space_restarts_a_finished_run() {
        let mut app = restart_app();
        {
            let mut game = app.world_mut().resource_mut::<GameState>();
            while game.is_running() {
                game.tick();
            }
        }
        app.world_mut().resource_mut::<TickTimer>().pause();
        app.world_mut().spawn(GameOverUI);
        let mut started = cursor_after_existing::<GameStarted>(&app);

        press(&mut app, KeyCode::Space);
        app.update();

        let game = app.world().resource::<GameState>();
        assert!(game.is_running());
        assert_eq!(game.score(), 0);
        assert_eq!(game.len(), 3);
        assert!(!app.world().resource::<TickTimer>().is_paused());
        assert_eq!(read_new(&app, &mut started).len(), 1);

        let mut overlays = app.world_mut().query_filtered::<Entity, With<GameOverUI>>();
        assert_eq!(overlays.iter(app.world()).count(), 0);
    }

    #[test]
    fn space_is_ignored_while_running() {
        let mut app = restart_app();
        app.world_mut().resource_mut::<TickTimer>().pause();
        app.world_mut().resource_mut::<GameState>().tick();
        let head = app.world().resource::<GameState>().head();
        let mut started = cursor_after_existing::<GameStarted>(&app);

        press(&mut app, KeyCode::Space);
        app.update();

        assert_eq!(app.world().resource::<GameState>().head(), head);
        assert!(read_new(&app, &mut started).is_empty());
    }
}
