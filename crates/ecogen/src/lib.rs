pub mod config;
pub mod constants;
pub mod error;
pub mod globe;
pub mod quiz;
pub mod sequencer;
pub mod texture;
pub mod tools;

pub use config::{get_config, reload_config};
pub use error::{EcoError, Result};
