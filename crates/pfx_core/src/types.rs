use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::constants::{TRAIL_ALPHA_SCALE, TRAIL_LIFE, TRAIL_SIZE_SCALE};

/// Particle silhouette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Triangle,
    Star,
}

impl Shape {
    pub const ALL: [Shape; 4] = [Self::Circle, Self::Square, Self::Triangle, Self::Star];

    /// Unrecognised names draw as circles.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "square" => Self::Square,
            "triangle" => Self::Triangle,
            "star" => Self::Star,
            _ => Self::Circle,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Star => "star",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Circle => Self::Square,
            Self::Square => Self::Triangle,
            Self::Triangle => Self::Star,
            Self::Star => Self::Circle,
        }
    }
}

/// Compositing mode for every draw in a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Channels add up and saturate (canvas "lighter")
    #[default]
    Additive,
    /// Ordinary source-over
    Normal,
}

impl BlendMode {
    /// Anything other than "additive" composites normally.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("additive") {
            Self::Additive
        } else {
            Self::Normal
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Normal => "normal",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Additive => Self::Normal,
            Self::Normal => Self::Additive,
        }
    }
}

/// Spawn-position distribution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmitterType {
    /// Exactly at the emitter origin
    #[default]
    Point,
    /// On a circle of `radius` around the origin
    Circle,
    /// Uniform inside a `2 * radius` square centered on the origin
    Area,
    /// Along a `2 * radius` segment oriented by `rotation`
    Line,
}

impl EmitterType {
    /// Unrecognised names emit from a point.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "circle" => Self::Circle,
            "area" => Self::Area,
            "line" => Self::Line,
            _ => Self::Point,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Circle => "circle",
            Self::Area => "area",
            Self::Line => "line",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Point => Self::Circle,
            Self::Circle => Self::Area,
            Self::Area => Self::Line,
            Self::Line => Self::Point,
        }
    }
}

/// A live particle. Created by the emitter, mutated once per tick,
/// dropped from the live set as soon as `life <= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Remaining life in seconds
    pub life: f64,
    /// Life span assigned at spawn
    pub max_life: f64,
    /// Base size from the configuration at spawn time
    pub size: f64,
    /// Size after scale-over-life, used for drawing
    pub current_size: f64,
    pub color_start: Rgb,
    pub color_end: Rgb,
    /// Gradient color at the current age fraction
    pub color: Rgb,
    pub alpha: f64,
    pub shape: Shape,
    /// Orientation in radians
    pub rotation: f64,
    /// Radians per second
    pub angular_velocity: f64,
}

impl Particle {
    /// Fraction of life used up: 0 at spawn, 1 at expiry.
    /// A particle spawned with no life span counts as fully aged.
    pub fn age_fraction(&self) -> f64 {
        if self.max_life > 0.0 {
            1.0 - self.life / self.max_life
        } else {
            1.0
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Fading decal left behind by a particle when trails are enabled.
/// Holds no reference to the particle that deposited it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailDecal {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
    pub alpha: f64,
    pub size: f64,
    pub life: f64,
}

impl TrailDecal {
    /// Decal at the particle's current position and color
    pub fn behind(p: &Particle) -> Self {
        Self {
            x: p.x,
            y: p.y,
            color: p.color,
            alpha: p.alpha * TRAIL_ALPHA_SCALE,
            size: p.current_size * TRAIL_SIZE_SCALE,
            life: TRAIL_LIFE,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(life: f64, max_life: f64) -> Particle {
        Particle {
            x: 3.0,
            y: 4.0,
            vx: 0.0,
            vy: 0.0,
            life,
            max_life,
            size: 10.0,
            current_size: 6.0,
            color_start: Rgb::WHITE,
            color_end: Rgb::RED,
            color: Rgb::new(255, 100, 100),
            alpha: 0.5,
            shape: Shape::Star,
            rotation: 0.0,
            angular_velocity: 0.0,
        }
    }

    #[test]
    fn test_unknown_names_fall_back() {
        assert_eq!(Shape::from_name("hexagon"), Shape::Circle);
        assert_eq!(Shape::from_name("STAR"), Shape::Star);
        assert_eq!(BlendMode::from_name("multiply"), BlendMode::Normal);
        assert_eq!(BlendMode::from_name("Additive"), BlendMode::Additive);
        assert_eq!(EmitterType::from_name("cone"), EmitterType::Point);
        assert_eq!(EmitterType::from_name("line"), EmitterType::Line);
    }

    #[test]
    fn test_cycling_visits_every_variant() {
        let mut shape = Shape::Circle;
        for expected in Shape::ALL.iter().cycle().skip(1).take(4) {
            shape = shape.next();
            assert_eq!(shape, *expected);
        }
        assert_eq!(EmitterType::Line.next(), EmitterType::Point);
    }

    #[test]
    fn test_age_fraction() {
        assert_eq!(particle(1.0, 1.0).age_fraction(), 0.0);
        assert_eq!(particle(0.25, 1.0).age_fraction(), 0.75);
        assert_eq!(particle(-1.0, 0.0).age_fraction(), 1.0);
    }

    #[test]
    fn test_decal_copies_particle_state() {
        let decal = TrailDecal::behind(&particle(0.5, 1.0));
        assert_eq!((decal.x, decal.y), (3.0, 4.0));
        assert_eq!(decal.color, Rgb::new(255, 100, 100));
        assert!((decal.alpha - 0.15).abs() < 1e-12);
        assert_eq!(decal.size, 3.0);
        assert_eq!(decal.life, TRAIL_LIFE);
    }
}
