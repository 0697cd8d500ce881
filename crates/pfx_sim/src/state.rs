use std::mem;

use bevy::log::debug;
use pfx_core::{DEFAULT_SEED, EffectConfig, Particle, TrailDecal};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::step::step;

/// Particle and decal sets plus the random stream that feeds them.
///
/// The live editor and every export job each own one of these, so an
/// export never disturbs the preview it was started from.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub particles: Vec<Particle>,
    pub decals: Vec<TrailDecal>,
    pub rng: ChaCha8Rng,
    /// Live-loop pause flag; [`SimulationState::advance`] ignores it
    pub paused: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl SimulationState {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            decals: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            paused: false,
        }
    }

    /// Remove every particle and decal. The pause flag is kept.
    pub fn clear(&mut self) {
        debug!(
            "Clearing {} particles and {} decals",
            self.particles.len(),
            self.decals.len()
        );
        self.particles.clear();
        self.decals.clear();
    }

    /// Step unconditionally, as the exporter does
    pub fn advance(&mut self, config: &EffectConfig, dt: f64) {
        let particles = mem::take(&mut self.particles);
        let decals = mem::take(&mut self.decals);
        (self.particles, self.decals) = step(particles, decals, config, dt, &mut self.rng);
    }

    /// Live-loop tick: a no-op while paused
    pub fn tick(&mut self, config: &EffectConfig, dt: f64) {
        if self.paused {
            return;
        }
        self.advance(config, dt);
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn decal_count(&self) -> usize {
        self.decals.len()
    }
}
