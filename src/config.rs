use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "snake_config.json";

/// Upper bound on playfield cells; also bounds the snake's preallocated body.
const MAX_CELLS: u64 = 1 << 20;
/// Keeps pixel coordinates, including one cell past an edge, well inside `i32`.
const MAX_SIDE: i32 = 1 << 16;

/// Tunables for the playfield, pacing and assets.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides. Sizes are in pixels, intervals in logical frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Edge length of one snake segment and of the food square.
    pub cell_size: i32,
    /// Logical frames per snake step.
    pub move_interval: u32,
    pub target_fps: u32,
    pub logo_frames: u32,
    pub blink_period: u32,
    pub sound_volume: f32,
    pub resources_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 450,
            cell_size: 20,
            move_interval: 5,
            target_fps: 60,
            logo_frames: 180,
            blink_period: 30,
            sound_volume: 1.0,
            resources_dir: "resources".to_owned(),
        }
    }
}

impl GameConfig {
    /// Reads `snake_config.json` from the working directory. A missing file
    /// means defaults; a broken one is reported and also falls back.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring {}: {err:#}", path.display());
                Self::default()
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config in {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validated()
    }

    fn validated(mut self) -> Result<Self> {
        if self.cell_size <= 0 {
            bail!("cell_size must be positive, got {}", self.cell_size);
        }
        if self.screen_width < self.cell_size || self.screen_height < self.cell_size {
            bail!(
                "playfield {}x{} is smaller than one {}px cell",
                self.screen_width,
                self.screen_height,
                self.cell_size
            );
        }
        if self.screen_width > MAX_SIDE || self.screen_height > MAX_SIDE {
            bail!(
                "playfield {}x{} exceeds {MAX_SIDE}px per side",
                self.screen_width,
                self.screen_height
            );
        }
        let cells = self.cell_count();
        if cells > MAX_CELLS {
            bail!("playfield holds {cells} cells, more than {MAX_CELLS}");
        }
        if self.move_interval == 0 {
            bail!("move_interval must be at least 1 frame");
        }
        if self.target_fps == 0 {
            bail!("target_fps must be at least 1");
        }
        self.blink_period = self.blink_period.max(1);
        self.sound_volume = self.sound_volume.clamp(0.0, 1.0);
        Ok(self)
    }

    /// Number of segments that could ever fit on the playfield.
    pub fn max_length(&self) -> usize {
        self.cell_count() as usize
    }

    // Widened so no validated (or unvalidated) size can overflow.
    fn cell_count(&self) -> u64 {
        let area = i64::from(self.screen_width) * i64::from(self.screen_height);
        let cell = i64::from(self.cell_size) * i64::from(self.cell_size);
        if area <= 0 || cell <= 0 {
            return 0;
        }
        (area / cell) as u64
    }

    /// Highest food column and row index (inclusive).
    pub fn food_cells(&self) -> (i32, i32) {
        (
            (self.screen_width - self.cell_size) / self.cell_size,
            (self.screen_height - self.cell_size) / self.cell_size,
        )
    }

    pub fn frame_seconds(&self) -> f32 {
        1.0 / self.target_fps as f32
    }
}
