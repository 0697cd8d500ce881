use pfx_core::{EffectConfig, Particle, TRAIL_ALPHA_DECAY, TRAIL_SPAWN_CHANCE, TrailDecal};
use pfx_physics::{integrate, refresh_appearance, spawn};
use rand::Rng;

/// Advance the particle and decal sets by one tick of length `dt`.
///
/// Order within a tick:
/// 1. spawn `floor(rate * dt)` particles, appended after the survivors
/// 2. integrate and restyle every particle, possibly dropping a trail decal
/// 3. drop particles whose life ran out (they are never drawn at `life <= 0`)
/// 4. age and fade decals, dropping the expired ones
///
/// Decals age and fade every tick whether or not trails are enabled. Turning
/// trails off does not freeze them, so turning trails back on never revives
/// decals left over from before.
pub fn step<R: Rng>(
    mut particles: Vec<Particle>,
    mut decals: Vec<TrailDecal>,
    config: &EffectConfig,
    dt: f64,
    rng: &mut R,
) -> (Vec<Particle>, Vec<TrailDecal>) {
    particles.extend(spawn(config, dt, rng));

    for p in &mut particles {
        integrate(p, config, dt);
        refresh_appearance(p, config);

        if config.trail && rng.gen_range(0.0..1.0) < TRAIL_SPAWN_CHANCE {
            decals.push(TrailDecal::behind(p));
        }
    }
    particles.retain(Particle::is_alive);

    for d in &mut decals {
        d.life -= dt;
        d.alpha *= TRAIL_ALPHA_DECAY;
    }
    decals.retain(TrailDecal::is_alive);

    (particles, decals)
}
