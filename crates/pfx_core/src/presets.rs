//! Built-in effect presets. Each preset only overrides the fields it lists;
//! everything else keeps whatever the user had configured.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::config::EffectConfig;
use crate::error::{PfxError, PfxResult};
use crate::types::{BlendMode, EmitterType, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Fire,
    Snow,
    Explosion,
    Sparkles,
}

/// Partial configuration. `None` means "leave the current value alone".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetOverlay {
    pub rate: Option<f64>,
    pub size: Option<f64>,
    pub speed: Option<f64>,
    pub direction: Option<f64>,
    pub gravity: Option<f64>,
    pub color_start: Option<Rgb>,
    pub color_end: Option<Rgb>,
    pub shape: Option<Shape>,
    pub blend: Option<BlendMode>,
    pub emitter_type: Option<EmitterType>,
    pub radius: Option<f64>,
    pub rotation: Option<f64>,
    pub scale_over_life: Option<bool>,
    pub trail: Option<bool>,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Self::Fire, Self::Snow, Self::Explosion, Self::Sparkles];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Snow => "snow",
            Self::Explosion => "explosion",
            Self::Sparkles => "sparkles",
        }
    }

    pub fn from_name(name: &str) -> PfxResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| PfxError::UnknownPreset(name.to_string()))
    }

    pub fn overlay(&self) -> PresetOverlay {
        match self {
            // Rising flames from a wide base
            Self::Fire => PresetOverlay {
                rate: Some(80.0),
                size: Some(10.0),
                speed: Some(80.0),
                direction: Some(270.0),
                gravity: Some(-0.5),
                color_start: Some(Rgb::new(255, 255, 0)),
                color_end: Some(Rgb::new(255, 0, 0)),
                shape: Some(Shape::Circle),
                blend: Some(BlendMode::Additive),
                emitter_type: Some(EmitterType::Area),
                radius: Some(30.0),
                rotation: None,
                scale_over_life: Some(true),
                trail: Some(false),
            },
            // Slow flakes falling from a wide horizontal line
            Self::Snow => PresetOverlay {
                rate: Some(40.0),
                size: Some(5.0),
                speed: Some(30.0),
                direction: Some(90.0),
                gravity: Some(0.2),
                color_start: Some(Rgb::new(255, 255, 255)),
                color_end: Some(Rgb::new(170, 170, 255)),
                shape: Some(Shape::Circle),
                blend: Some(BlendMode::Normal),
                emitter_type: Some(EmitterType::Line),
                radius: Some(250.0),
                rotation: Some(0.0),
                scale_over_life: Some(false),
                trail: Some(false),
            },
            Self::Explosion => PresetOverlay {
                rate: Some(200.0),
                size: Some(6.0),
                speed: Some(200.0),
                direction: Some(0.0),
                gravity: Some(0.8),
                color_start: Some(Rgb::new(255, 170, 0)),
                color_end: Some(Rgb::new(255, 0, 0)),
                shape: Some(Shape::Star),
                blend: Some(BlendMode::Additive),
                emitter_type: Some(EmitterType::Point),
                radius: Some(0.0),
                rotation: None,
                scale_over_life: Some(true),
                trail: Some(true),
            },
            Self::Sparkles => PresetOverlay {
                rate: Some(60.0),
                size: Some(8.0),
                speed: Some(50.0),
                direction: Some(0.0),
                gravity: Some(0.0),
                color_start: Some(Rgb::new(255, 255, 255)),
                color_end: Some(Rgb::new(0, 255, 255)),
                shape: Some(Shape::Star),
                blend: Some(BlendMode::Additive),
                emitter_type: Some(EmitterType::Circle),
                radius: Some(80.0),
                rotation: None,
                scale_over_life: Some(true),
                trail: Some(false),
            },
        }
    }
}

macro_rules! overlay_fields {
    ($config:expr, $overlay:expr; $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = $overlay.$field {
                $config.$field = value;
            }
        )*
    };
}

impl EffectConfig {
    /// Copy every field the overlay sets; unset fields are untouched.
    pub fn apply_overlay(&mut self, overlay: &PresetOverlay) {
        overlay_fields!(self, overlay;
            rate, size, speed, direction, gravity, color_start, color_end, shape,
            blend, emitter_type, radius, rotation, scale_over_life, trail,
        );
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        self.apply_overlay(&preset.overlay());
    }
}
