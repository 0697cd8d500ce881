use bevy::prelude::*;
use pfx_core::{EffectConfig, MAX_FRAME_DT, Preset};

use crate::presets;
use crate::state::SimulationState;

/// The editor's configuration and preview simulation, shared by every system
#[derive(Resource, Default)]
pub struct LiveSimulation {
    pub config: EffectConfig,
    pub state: SimulationState,
}

impl LiveSimulation {
    pub fn new(config: EffectConfig, seed: u64) -> Self {
        Self {
            config,
            state: SimulationState::new(seed),
        }
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        presets::apply_preset(&mut self.config, &mut self.state, preset);
    }

    pub fn clear(&mut self) {
        self.state.clear();
        info!("Cleared live particles");
    }
}

/// Bevy plugin for the live simulation loop
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LiveSimulation>()
            .add_systems(Update, simulation_tick);
    }
}

/// One live tick per frame. The frame delta is capped so a stalled frame
/// does not launch particles across the whole canvas.
pub fn simulation_tick(mut live: ResMut<LiveSimulation>, time: Res<Time>) {
    let dt = time.delta_secs_f64().min(MAX_FRAME_DT);
    let LiveSimulation { config, state } = &mut *live;
    state.tick(config, dt);
}
