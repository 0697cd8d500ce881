use pfx_core::{EffectConfig, GRAVITY_SCALE, Particle};

/// Advance one particle by `dt`: position, gravity, drag, spin and life.
///
/// Drag multiplies velocity once per call regardless of `dt`, so damping
/// is tied to the tick rate. Runs stepped at a fixed `dt` reproduce exactly.
pub fn integrate(p: &mut Particle, config: &EffectConfig, dt: f64) {
    p.x += p.vx * dt;
    p.y += p.vy * dt;

    p.vy += config.gravity * dt * GRAVITY_SCALE;

    p.vx *= config.drag;
    p.vy *= config.drag;

    p.rotation += p.angular_velocity * dt;
    p.life -= dt;
}
