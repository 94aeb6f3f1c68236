//! Playback of the synthesized effect and music tracks.
//!
//! When the crate is built without the `audio` feature the player keeps the
//! same surface but performs no playback, so the render loop never branches
//! on the feature.

use anyhow::Result;
use sidewinder_core::AudioDirective;

#[cfg(feature = "audio")]
use {
    crate::tone,
    anyhow::anyhow,
    macroquad::audio::{load_sound_from_bytes, play_sound, stop_sound, PlaySoundParams, Sound},
    sidewinder_core::SoundEffect,
};

/// Scale applied to the master volume for the looping music track so the
/// effect blips stay audible above it.
#[cfg(feature = "audio")]
const MUSIC_VOLUME_SCALE: f32 = 0.5;

/// Mixer front-end owning the decoded sound handles.
#[cfg(feature = "audio")]
pub(crate) struct AudioPlayer {
    bite: Sound,
    game_over: Sound,
    music: Sound,
    volume: f32,
}

#[cfg(feature = "audio")]
impl AudioPlayer {
    /// Renders and decodes every built-in sound.
    pub(crate) async fn load(volume: f32) -> Result<Self> {
        let bite = decode(&tone::bite_wav()).await?;
        let game_over = decode(&tone::game_over_wav()).await?;
        let music = decode(&tone::music_wav()).await?;

        Ok(Self {
            bite,
            game_over,
            music,
            volume: volume.clamp(0.0, 1.0),
        })
    }

    /// Applies the directives emitted during a frame, in order.
    pub(crate) fn execute(&self, directives: &[AudioDirective]) {
        for directive in directives {
            match *directive {
                AudioDirective::PlaySound { effect } => play_sound(
                    self.sound_for(effect),
                    PlaySoundParams {
                        looped: false,
                        volume: self.volume,
                    },
                ),
                AudioDirective::StopSound { effect } => stop_sound(self.sound_for(effect)),
                AudioDirective::StartMusic => play_sound(
                    self.music,
                    PlaySoundParams {
                        looped: true,
                        volume: self.volume * MUSIC_VOLUME_SCALE,
                    },
                ),
                AudioDirective::StopMusic => stop_sound(self.music),
            }
        }
    }

    fn sound_for(&self, effect: SoundEffect) -> Sound {
        match effect {
            SoundEffect::Bite => self.bite,
            SoundEffect::GameOverJingle => self.game_over,
        }
    }
}

#[cfg(feature = "audio")]
async fn decode(wav: &[u8]) -> Result<Sound> {
    load_sound_from_bytes(wav)
        .await
        .map_err(|error| anyhow!("failed to decode generated sound: {error:?}"))
}

/// Silent stand-in compiled when the `audio` feature is disabled.
#[cfg(not(feature = "audio"))]
pub(crate) struct AudioPlayer;

#[cfg(not(feature = "audio"))]
impl AudioPlayer {
    pub(crate) async fn load(_volume: f32) -> Result<Self> {
        Ok(Self)
    }

    pub(crate) fn execute(&self, _directives: &[AudioDirective]) {}
}
