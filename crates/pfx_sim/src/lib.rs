pub mod pipeline;
pub mod presets;
pub mod state;
pub mod step;

pub use pipeline::{LiveSimulation, SimulationPlugin, simulation_tick};
pub use presets::apply_preset;
pub use state::SimulationState;
pub use step::step;
