pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod presets;
pub mod types;

pub use color::Rgb;
pub use config::EffectConfig;
pub use constants::*;
pub use error::{PfxError, PfxResult};
pub use presets::{Preset, PresetOverlay};
pub use types::*;
