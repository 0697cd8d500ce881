use bevy::log::info;
use pfx_core::{EffectConfig, Preset};

use crate::state::SimulationState;

/// Overlay `preset` onto `config` and empty the live sets, so the new
/// look starts from scratch instead of blending with the old particles.
pub fn apply_preset(config: &mut EffectConfig, state: &mut SimulationState, preset: Preset) {
    config.apply_preset(preset);
    state.clear();
    info!(
        "Applied preset '{}' (rate {}, {} from {})",
        preset.name(),
        config.rate,
        config.shape.name(),
        config.emitter_type.name()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfx_core::{EmitterType, Shape};

    #[test]
    fn test_fire_preset_resets_particles() {
        let mut config = EffectConfig::default();
        let mut state = SimulationState::new(3);
        for _ in 0..10 {
            state.tick(&config, 0.1);
        }
        assert!(state.particle_count() > 0);

        apply_preset(&mut config, &mut state, Preset::Fire);
        assert_eq!(config.rate, 80.0);
        assert_eq!(config.shape, Shape::Circle);
        assert_eq!(config.emitter_type, EmitterType::Area);
        assert!(!config.trail);
        assert_eq!(state.particle_count(), 0);
        assert_eq!(state.decal_count(), 0);
    }
}
