use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::command::HistoryPolicy;
use crate::error::ConfigError;
use crate::tools::ToolKind;

/// Environment variable the native binary reads the config path from
pub const CONFIG_ENV_VAR: &str = "PIXEL_PAINT_CONFIG";

/// Editor defaults. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Width of a new picture, in cells
    pub width: usize,
    /// Height of a new picture, in cells
    pub height: usize,
    /// Fill color of a new picture
    pub background: Color,
    /// Initial drawing color
    pub color: Color,
    /// Initially selected tool
    pub tool: ToolKind,
    /// Screen pixels per cell
    pub cell_scale: f32,
    pub checkpoint_interval_ms: u64,
    pub max_checkpoints: Option<usize>,
    /// Imported images are cropped to this many cells on each side
    pub import_max_size: u32,
    /// Where "Save" writes the PNG
    pub export_path: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let history = HistoryPolicy::default();
        Self {
            width: 60,
            height: 30,
            background: Color::rgb(0xf0, 0xf0, 0xf0),
            color: Color::BLACK,
            tool: ToolKind::Draw,
            cell_scale: 10.0,
            checkpoint_interval_ms: history.checkpoint_interval_ms,
            max_checkpoints: history.max_checkpoints,
            import_max_size: 100,
            export_path: PathBuf::from("pixelart.png"),
        }
    }
}

impl EditorConfig {
    /// Load from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from the path in [`CONFIG_ENV_VAR`], or the defaults if unset
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "picture size {}x{} must be positive",
                self.width, self.height
            )));
        }
        if !(self.cell_scale.is_finite() && self.cell_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "cell_scale {} must be positive",
                self.cell_scale
            )));
        }
        if self.max_checkpoints == Some(0) {
            return Err(ConfigError::Invalid(
                "max_checkpoints must be positive; use null for no limit".to_owned(),
            ));
        }
        if self.import_max_size == 0 {
            return Err(ConfigError::Invalid("import_max_size must be positive".to_owned()));
        }
        Ok(())
    }

    pub fn history_policy(&self) -> HistoryPolicy {
        HistoryPolicy::new(self.checkpoint_interval_ms, self.max_checkpoints)
    }
}
