//! Sound plugin - plays a cue per game event and loops the background track.
//!
//! Missing or undecodable files are reported by the asset server and the cue
//! is skipped; nothing here can stall the tick loop.

use bevy::prelude::*;

use crate::game::{EAT_SOUND, GAME_OVER_SOUND, MUSIC_TRACK};
use crate::snake::{FoodEaten, GameOver, GameStarted};

/// Plugin for sound effects and music.
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sound_cues).add_systems(
            Update,
            (start_music, play_eat_sound, play_game_over_sound)
                .run_if(resource_exists::<SoundCues>),
        );
    }
}

/// Preloaded handles for every cue.
#[derive(Resource)]
pub struct SoundCues {
    pub eat: Handle<AudioSource>,
    pub game_over: Handle<AudioSource>,
    pub music: Handle<AudioSource>,
}

/// Marker for the looping background track.
#[derive(Component)]
pub struct BackgroundMusic;

fn load_sound_cues(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundCues {
        eat: asset_server.load(EAT_SOUND),
        game_over: asset_server.load(GAME_OVER_SOUND),
        music: asset_server.load(MUSIC_TRACK),
    });
}

/// System to start the background loop with the first run. It keeps playing across restarts.
fn start_music(
    mut commands: Commands,
    mut started: MessageReader<GameStarted>,
    cues: Res<SoundCues>,
    playing: Query<Entity, With<BackgroundMusic>>,
) {
    if started.read().last().is_none() || !playing.is_empty() {
        return;
    }

    debug!("starting background music");
    commands.spawn((
        AudioPlayer::new(cues.music.clone()),
        PlaybackSettings::LOOP,
        BackgroundMusic,
    ));
}

fn play_eat_sound(
    mut commands: Commands,
    mut food_eaten: MessageReader<FoodEaten>,
    cues: Res<SoundCues>,
) {
    for _ in food_eaten.read() {
        commands.spawn((AudioPlayer::new(cues.eat.clone()), PlaybackSettings::DESPAWN));
    }
}

fn play_game_over_sound(
    mut commands: Commands,
    mut game_over: MessageReader<GameOver>,
    cues: Res<SoundCues>,
) {
    for _ in game_over.read() {
        commands.spawn((
            AudioPlayer::new(cues.game_over.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}
