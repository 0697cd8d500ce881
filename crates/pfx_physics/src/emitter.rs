use std::f64::consts::TAU;

use pfx_core::{
    ANGULAR_VELOCITY_SPREAD, EffectConfig, EmitterType, MIN_SPEED_FACTOR, Particle,
};
use rand::Rng;

/// Particles to emit for a tick of length `dt`.
///
/// The fractional remainder is dropped rather than carried to the next
/// tick, so low `rate * dt` products emit in visible bursts.
pub fn spawn_count(rate: f64, dt: f64) -> usize {
    let n = (rate * dt).floor();
    if n.is_finite() && n > 0.0 { n as usize } else { 0 }
}

/// Emit this tick's new particles, in spawn order.
pub fn spawn(config: &EffectConfig, dt: f64, rng: &mut impl Rng) -> Vec<Particle> {
    let count = spawn_count(config.rate, dt);
    (0..count).map(|_| spawn_particle(config, rng)).collect()
}

/// Create one particle positioned and launched according to `config`.
pub fn spawn_particle(config: &EffectConfig, rng: &mut impl Rng) -> Particle {
    // The full-circle offset means `direction` only rotates an already
    // isotropic spread.
    let angle = config.direction_radians() + rng.gen_range(0.0..TAU);
    let speed = config.speed * rng.gen_range(MIN_SPEED_FACTOR..1.0);
    let [x, y] = spawn_position(config, rng);

    // May be <= 0 for large variation; such particles retire on their first tick.
    let life = config.life_time + rng.gen_range(-1.0..1.0) * config.life_variation;

    let rotation = rng.gen_range(0.0..TAU);
    let angular_velocity = rng.gen_range(-0.5..0.5) * ANGULAR_VELOCITY_SPREAD;

    Particle {
        x,
        y,
        vx: angle.cos() * speed,
        vy: angle.sin() * speed,
        life,
        max_life: life,
        size: config.size,
        current_size: config.size,
        color_start: config.color_start,
        color_end: config.color_end,
        color: config.color_start,
        alpha: 1.0,
        shape: config.shape,
        rotation,
        angular_velocity,
    }
}

/// Sample a spawn position from the configured emitter geometry
pub fn spawn_position(config: &EffectConfig, rng: &mut impl Rng) -> [f64; 2] {
    let (cx, cy, r) = (config.emit_x, config.emit_y, config.radius);
    match config.emitter_type {
        EmitterType::Point => [cx, cy],
        EmitterType::Circle => {
            let a = rng.gen_range(0.0..TAU);
            [cx + a.cos() * r, cy + a.sin() * r]
        }
        EmitterType::Area => [
            cx + rng.gen_range(-0.5..0.5) * r * 2.0,
            cy + rng.gen_range(-0.5..0.5) * r * 2.0,
        ],
        EmitterType::Line => {
            let along = rng.gen_range(0.0..1.0) * 2.0 - 1.0;
            let heading = config.rotation_radians();
            [cx + heading.cos() * r * along, cy + heading.sin() * r * along]
        }
    }
}
