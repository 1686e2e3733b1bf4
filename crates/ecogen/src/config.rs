use crate::error::{EcoError, Result};
use crate::globe::GlobeParams;
use crate::texture::{ColorStop, Rgb};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

pub const CONFIG_PATH: &str = "ecogen_config.toml";

static CONFIG: OnceLock<Mutex<EcoGenConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading it on first use.
/// A missing or broken file falls back to the built-in defaults.
pub fn get_config() -> EcoGenConfig {
    let config_mutex = CONFIG.get_or_init(|| Mutex::new(load_or_default(CONFIG_PATH)));
    config_mutex
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn reload_config() -> Result<()> {
    reload_config_from_file(CONFIG_PATH)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcoGenConfig {
    pub texture: TextureConfig,
    pub sequence: SequenceConfig,
    pub globes: GlobeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureConfig {
    /// Edge length of the square canvas in pixels
    pub resolution: u32,
    pub landmass_color: Rgb,
    pub vegetation_color: Rgb,
    pub gradient: Vec<ColorStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub loading_delay_secs: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobeConfig {
    pub home_camera_distance: f32,
    pub interactive_camera_distance: f32,
    pub min_camera_distance: f32,
    pub max_camera_distance: f32,
    pub damping: f32,
    pub home: GlobeParams,
    pub interactive: GlobeParams,
}

impl Default for EcoGenConfig {
    fn default() -> Self {
        Self {
            texture: TextureConfig {
                resolution: 512,
                landmass_color: Rgb::new(0x2d, 0x50, 0x16),
                vegetation_color: Rgb::new(0x4a, 0x7c, 0x59),
                gradient: vec![
                    ColorStop {
                        offset: 0.0,
                        color: Rgb::new(0x4a, 0x90, 0xe2),
                    },
                    ColorStop {
                        offset: 0.7,
                        color: Rgb::new(0x2d, 0x5a, 0xa0),
                    },
                    ColorStop {
                        offset: 1.0,
                        color: Rgb::new(0x1e, 0x3a, 0x5f),
                    },
                ],
            },
            sequence: SequenceConfig {
                loading_delay_secs: 3.0,
            },
            globes: GlobeConfig {
                home_camera_distance: 5.0,
                interactive_camera_distance: 4.0,
                min_camera_distance: 3.0,
                max_camera_distance: 8.0,
                damping: 0.05,
                home: GlobeParams {
                    is_interactive: false,
                    scale: 1.5,
                    distort: 0.05,
                    speed: 0.3,
                },
                interactive: GlobeParams {
                    is_interactive: true,
                    scale: 2.0,
                    distort: 0.15,
                    speed: 1.0,
                },
            },
        }
    }
}

impl EcoGenConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EcoGenConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let stops = &self.texture.gradient;
        if stops.is_empty() {
            return Err(EcoError::InvalidConfig("gradient needs at least one stop".into()));
        }
        if stops.iter().any(|s| !(0.0..=1.0).contains(&s.offset)) {
            return Err(EcoError::InvalidConfig("gradient offsets must lie in [0, 1]".into()));
        }
        if stops.windows(2).any(|pair| pair[1].offset <= pair[0].offset) {
            return Err(EcoError::InvalidConfig(
                "gradient offsets must strictly increase".into(),
            ));
        }
        let loading = self.sequence.loading_delay_secs;
        if !loading.is_finite() || loading < 0.0 {
            return Err(EcoError::InvalidConfig(
                "loading delay must be a finite, non-negative number of seconds".into(),
            ));
        }
        let globes = &self.globes;
        let distances = [
            globes.home_camera_distance,
            globes.interactive_camera_distance,
            globes.min_camera_distance,
            globes.max_camera_distance,
        ];
        if distances.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(EcoError::InvalidConfig(
                "camera distances must be finite and positive".into(),
            ));
        }
        if globes.min_camera_distance > globes.max_camera_distance {
            return Err(EcoError::InvalidConfig(
                "camera distance range is inverted".into(),
            ));
        }
        if !(globes.damping > 0.0 && globes.damping <= 1.0) {
            return Err(EcoError::InvalidConfig("damping must lie in (0, 1]".into()));
        }
        for params in [&globes.home, &globes.interactive] {
            if ![params.scale, params.distort, params.speed]
                .iter()
                .all(|v| v.is_finite())
                || params.scale <= 0.0
            {
                return Err(EcoError::InvalidConfig(
                    "globe parameters must be finite with a positive scale".into(),
                ));
            }
        }
        Ok(())
    }
}

/// A missing file is seeded with the defaults so there is something to edit.
fn load_or_default(path: &str) -> EcoGenConfig {
    match EcoGenConfig::load_from_file(path) {
        Ok(config) => config,
        Err(EcoError::ConfigIo(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            let config = EcoGenConfig::default();
            match config.save_to_file(path) {
                Ok(()) => info!("Wrote default config to {path}"),
                Err(e) => warn!("Could not write default config to {path}: {e}"),
            }
            config
        }
        Err(e) => {
            warn!("Using default config, could not load {path}: {e}");
            EcoGenConfig::default()
        }
    }
}

fn reload_config_from_file(path: &str) -> Result<()> {
    let new_config = EcoGenConfig::load_from_file(path)?;

    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    *config_mutex.lock().unwrap_or_else(PoisonError::into_inner) = new_config;
    Ok(())
}
