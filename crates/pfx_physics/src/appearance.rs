use pfx_core::{EffectConfig, FADE_IN_FRACTION, Particle, SHRINK_OVER_LIFE};

/// Opacity at age fraction `t`.
///
/// With fade-in the first 20% of life ramps 0 -> 1, after which the plain
/// 1 - t fade takes over (there is a step at t = 0.2). Clamped to `[0, 1]`.
pub fn alpha_at(t: f64, fade_in: bool) -> f64 {
    let alpha = if fade_in && t < FADE_IN_FRACTION {
        t / FADE_IN_FRACTION
    } else {
        1.0 - t
    };
    alpha.clamp(0.0, 1.0)
}

/// Drawn size at age fraction `t`; shrinks to half of `size` when scaling.
pub fn size_at(size: f64, t: f64, scale_over_life: bool) -> f64 {
    if scale_over_life {
        size * (1.0 - t * SHRINK_OVER_LIFE)
    } else {
        size
    }
}

/// Recompute alpha, size and color from the particle's age fraction.
///
/// All three read the same `t`, so a particle never mixes appearance from
/// two different points in its life.
pub fn refresh_appearance(p: &mut Particle, config: &EffectConfig) {
    let t = p.age_fraction();
    p.alpha = alpha_at(t, config.fade_in);
    p.current_size = size_at(p.size, t, config.scale_over_life);
    p.color = p.color_start.lerp(p.color_end, t);
}
