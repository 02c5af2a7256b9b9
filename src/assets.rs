use anyhow::{Result, anyhow};
use macroquad::audio::{Sound, load_sound, load_sound_from_bytes};
use macroquad::prelude::{Font, Texture2D, load_texture, load_ttf_font};
use std::path::Path;

use crate::config::GameConfig;

const LOGO_FILE: &str = "logo.png";
const FONT_FILE: &str = "font.ttf";
const FEED_SOUND_FILE: &str = "food.wav";

/// Everything loaded once at startup and released when dropped.
pub struct Assets {
    /// `None` draws the built-in logo instead.
    pub logo: Option<Texture2D>,
    /// `None` uses macroquad's default font.
    pub font: Option<Font>,
    pub feed_sound: Sound,
}

impl Assets {
    pub async fn load(config: &GameConfig) -> Result<Self> {
        let dir = Path::new(&config.resources_dir);

        let logo = match load_texture(&path_str(dir, LOGO_FILE)).await {
            Ok(texture) => Some(texture),
            Err(err) => {
                log::warn!("No logo image ({err:?}), drawing the built-in one");
                None
            }
        };

        let font = match load_ttf_font(&path_str(dir, FONT_FILE)).await {
            Ok(font) => Some(font),
            Err(err) => {
                log::warn!("No title font ({err:?}), using the default font");
                None
            }
        };

        let feed_sound = match load_sound(&path_str(dir, FEED_SOUND_FILE)).await {
            Ok(sound) => sound,
            Err(err) => {
                log::warn!("No feed sound file ({err:?}), generating a tone");
                let bytes = generate_wav_sine(880.0, 0.08, 0.6);
                load_sound_from_bytes(&bytes)
                    .await
                    .map_err(|err| anyhow!("failed to decode generated feed tone: {err:?}"))?
            }
        };

        Ok(Self {
            logo,
            font,
            feed_sound,
        })
    }
}

fn path_str(dir: &Path, file: &str) -> String {
    dir.join(file).to_string_lossy().into_owned()
}

/// PCM16 mono WAV holding a sine tone.
pub fn generate_wav_sine(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let sample_rate: u32 = 44100;
    let num_samples: u32 = (duration_seconds * sample_rate as f32) as u32;
    let mut data: Vec<u8> = Vec::with_capacity((num_samples as usize) * 2 + 44);

    let block_align: u16 = 2;
    let byte_rate: u32 = sample_rate * block_align as u32;
    let data_size: u32 = num_samples * 2;

    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_size).to_le_bytes());
    data.extend_from_slice(b"WAVE");
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&sample_rate.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    // short linear fade at both ends to avoid clicks
    let fade = (sample_rate / 200).min(num_samples / 2).max(1);
    for n in 0..num_samples {
        let t = n as f32 / sample_rate as f32;
        let edge = n.min(num_samples - 1 - n).min(fade) as f32 / fade as f32;
        let value = amplitude * edge * (std::f32::consts::TAU * frequency_hz * t).sin();
        data.extend_from_slice(&((value * i16::MAX as f32) as i16).to_le_bytes());
    }
    data
}
