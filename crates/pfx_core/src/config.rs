use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{PfxError, PfxResult};
use crate::types::{BlendMode, EmitterType, Shape};

/// Emitter configuration. Edited by the user, read by every tick,
/// never mutated by the simulation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Particles spawned per simulated second
    pub rate: f64,
    /// Base particle radius / half-extent in pixels
    pub size: f64,
    /// Base launch speed in pixels per second
    pub speed: f64,
    /// Base launch heading in degrees
    pub direction: f64,
    /// Emitter extent for circle, area and line emitters
    pub radius: f64,
    pub emit_x: f64,
    pub emit_y: f64,
    pub color_start: Rgb,
    pub color_end: Rgb,
    pub shape: Shape,
    pub blend: BlendMode,
    pub emitter_type: EmitterType,
    /// Downward acceleration scale; negative values pull upward
    pub gravity: f64,
    /// Velocity multiplier applied once per tick (1.0 = no damping)
    pub drag: f64,
    /// Line emitter orientation in degrees
    pub rotation: f64,
    pub scale_over_life: bool,
    pub fade_in: bool,
    pub trail: bool,
    /// Base particle life in seconds
    pub life_time: f64,
    /// Symmetric random jitter applied to `life_time`
    pub life_variation: f64,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            rate: 50.0,
            size: 8.0,
            speed: 100.0,
            direction: 0.0,
            radius: 50.0,
            emit_x: 256.0,
            emit_y: 256.0,
            color_start: Rgb::WHITE,
            color_end: Rgb::RED,
            shape: Shape::Circle,
            blend: BlendMode::Additive,
            emitter_type: EmitterType::Point,
            gravity: 0.0,
            drag: 1.0,
            rotation: 0.0,
            scale_over_life: true,
            fade_in: false,
            trail: false,
            life_time: 1.0,
            life_variation: 0.5,
        }
    }
}

/// Allowed range of a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Domain {
    Any,
    NonNegative,
    Positive,
}

impl Domain {
    fn check(self, field: &str, value: f64) -> PfxResult<f64> {
        if !value.is_finite() {
            return Err(PfxError::numeric(field, format!("{value} is not a finite number")));
        }
        match self {
            Self::NonNegative if value < 0.0 => {
                Err(PfxError::numeric(field, format!("{value} must be >= 0")))
            }
            Self::Positive if value <= 0.0 => {
                Err(PfxError::numeric(field, format!("{value} must be > 0")))
            }
            _ => Ok(value),
        }
    }
}

fn parse_number(field: &str, raw: &str, domain: Domain) -> PfxResult<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| PfxError::numeric(field, format!("{raw:?} is not a number")))?;
    domain.check(field, value)
}

fn parse_flag(field: &str, raw: &str) -> PfxResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(PfxError::numeric(field, format!("{raw:?} is not a boolean"))),
    }
}

impl EffectConfig {
    /// Set one field from its textual value, as a control widget would.
    ///
    /// Accepts both the camelCase names used by the editor controls and the
    /// snake_case names used in config files. Numeric writes fail closed:
    /// a rejected value leaves the field untouched.
    pub fn set_field(&mut self, name: &str, value: &str) -> PfxResult<()> {
        let value = value.trim();
        match name {
            "rate" => self.rate = parse_number(name, value, Domain::NonNegative)?,
            "size" => self.size = parse_number(name, value, Domain::Positive)?,
            "speed" => self.speed = parse_number(name, value, Domain::NonNegative)?,
            "direction" => self.direction = parse_number(name, value, Domain::Any)?,
            "radius" => self.radius = parse_number(name, value, Domain::NonNegative)?,
            "emitX" | "emit_x" => self.emit_x = parse_number(name, value, Domain::Any)?,
            "emitY" | "emit_y" => self.emit_y = parse_number(name, value, Domain::Any)?,
            "colorStart" | "color_start" => self.color_start = Rgb::from_hex(value)?,
            "colorEnd" | "color_end" => self.color_end = Rgb::from_hex(value)?,
            "shape" => self.shape = Shape::from_name(value),
            "blend" => self.blend = BlendMode::from_name(value),
            "emitterType" | "emitter_type" => self.emitter_type = EmitterType::from_name(value),
            "gravity" => self.gravity = parse_number(name, value, Domain::Any)?,
            "drag" => self.drag = parse_number(name, value, Domain::Any)?,
            "rotation" => self.rotation = parse_number(name, value, Domain::Any)?,
            "scaleOverLife" | "scale_over_life" => self.scale_over_life = parse_flag(name, value)?,
            "fadeIn" | "fade_in" => self.fade_in = parse_flag(name, value)?,
            "trail" => self.trail = parse_flag(name, value)?,
            "lifeTime" | "life_time" => self.life_time = parse_number(name, value, Domain::Positive)?,
            "lifeVariation" | "life_variation" => {
                self.life_variation = parse_number(name, value, Domain::NonNegative)?
            }
            _ => return Err(PfxError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn numeric_fields(&self) -> [(&'static str, f64, Domain); 12] {
        [
            ("rate", self.rate, Domain::NonNegative),
            ("size", self.size, Domain::Positive),
            ("speed", self.speed, Domain::NonNegative),
            ("direction", self.direction, Domain::Any),
            ("radius", self.radius, Domain::NonNegative),
            ("emit_x", self.emit_x, Domain::Any),
            ("emit_y", self.emit_y, Domain::Any),
            ("gravity", self.gravity, Domain::Any),
            ("drag", self.drag, Domain::Any),
            ("rotation", self.rotation, Domain::Any),
            ("life_time", self.life_time, Domain::Positive),
            ("life_variation", self.life_variation, Domain::NonNegative),
        ]
    }

    /// Check every field against its own domain
    pub fn validate(&self) -> PfxResult<()> {
        for (field, value, domain) in self.numeric_fields() {
            domain.check(field, value)?;
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> PfxResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| PfxError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> PfxResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> PfxResult<String> {
        toml::to_string_pretty(self).map_err(|e| PfxError::ConfigParse(e.to_string()))
    }

    /// Launch heading in radians
    pub fn direction_radians(&self) -> f64 {
        self.direction.to_radians()
    }

    /// Line emitter orientation in radians
    pub fn rotation_radians(&self) -> f64 {
        self.rotation.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        EffectConfig::default().validate().unwrap();
    }

    #[test]
    fn test_set_field_accepts_both_spellings() {
        let mut config = EffectConfig::default();
        config.set_field("emitX", "100").unwrap();
        config.set_field("emit_y", " 42.5 ").unwrap();
        config.set_field("colorStart", "#00FF00").unwrap();
        config.set_field("emitterType", "line").unwrap();
        config.set_field("fadeIn", "true").unwrap();
        config.set_field("life_variation", "0").unwrap();
        assert_eq!(config.emit_x, 100.0);
        assert_eq!(config.emit_y, 42.5);
        assert_eq!(config.color_start, Rgb::GREEN);
        assert_eq!(config.emitter_type, EmitterType::Line);
        assert!(config.fade_in);
        assert_eq!(config.life_variation, 0.0);
    }

    #[test]
    fn test_non_numeric_write_fails_closed() {
        let mut config = EffectConfig::default();
        for (field, value) in [("rate", "lots"), ("speed", "NaN"), ("gravity", "inf"), ("size", "")] {
            let err = config.set_field(field, value).unwrap_err();
            assert!(
                matches!(err, PfxError::InvalidNumericInput { field: ref f, .. } if f == field),
                "{field}: {err}"
            );
        }
        assert_eq!(config, EffectConfig::default());
    }

    #[test]
    fn test_domain_violations_are_rejected() {
        let mut config = EffectConfig::default();
        assert!(config.set_field("rate", "-1").is_err());
        assert!(config.set_field("size", "0").is_err());
        assert!(config.set_field("lifeTime", "0").is_err());
        assert!(config.set_field("radius", "-5").is_err());
        // unbounded fields take any finite value
        config.set_field("gravity", "-0.5").unwrap();
        config.set_field("direction", "-90").unwrap();
        assert_eq!(config.gravity, -0.5);
    }

    #[test]
    fn test_bad_color_and_unknown_field() {
        let mut config = EffectConfig::default();
        assert!(matches!(
            config.set_field("colorEnd", "#ff00"),
            Err(PfxError::InvalidColorFormat(_))
        ));
        assert!(matches!(
            config.set_field("opacity", "1"),
            Err(PfxError::UnknownField(_))
        ));
        assert!(matches!(
            config.set_field("trail", "maybe"),
            Err(PfxError::InvalidNumericInput { .. })
        ));
    }

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let mut config = EffectConfig {
            shape: Shape::Star,
            blend: BlendMode::Additive,
            emitter_type: EmitterType::Area,
            ..EffectConfig::default()
        };
        config.set_field("shape", "hexagon").unwrap();
        config.set_field("blend", "screen").unwrap();
        config.set_field("emitterType", "spiral").unwrap();
        assert_eq!(config.shape, Shape::Circle);
        assert_eq!(config.blend, BlendMode::Normal);
        assert_eq!(config.emitter_type, EmitterType::Point);
    }

    #[test]
    fn test_toml_partial_file_keeps_defaults() {
        let config = EffectConfig::from_toml_str(
            r##"
            rate = 120
            color_end = "#0000ff"
            shape = "triangle"
            trail = true
            "##,
        )
        .unwrap();
        assert_eq!(config.rate, 120.0);
        assert_eq!(config.color_end, Rgb::new(0, 0, 255));
        assert_eq!(config.shape, Shape::Triangle);
        assert!(config.trail);
        assert_eq!(config.size, EffectConfig::default().size);
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        assert!(matches!(
            EffectConfig::from_toml_str(r##"color_start = "white""##),
            Err(PfxError::ConfigParse(_))
        ));
        assert!(matches!(
            EffectConfig::from_toml_str("size = -2.0"),
            Err(PfxError::InvalidNumericInput { .. })
        ));
    }

    #[test]
    fn test_toml_output_reloads() {
        let config = EffectConfig {
            gravity: 0.8,
            shape: Shape::Star,
            ..EffectConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("shape = \"star\""));
        assert_eq!(EffectConfig::from_toml_str(&text).unwrap(), config);
    }
}
