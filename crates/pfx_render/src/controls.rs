use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use pfx_core::{EffectConfig, Preset};
use pfx_sim::LiveSimulation;

use super::export::ExportTask;
use super::preview::{PreviewSprite, PreviewTarget, world_to_canvas};

const RATE_STEP: f64 = 10.0;
const DIRECTION_STEP: f64 = 15.0;

/// Editor commands bound to keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorAction {
    TogglePause,
    Clear,
    Preset(Preset),
    ToggleGizmo,
    CycleShape,
    ToggleBlend,
    CycleEmitter,
    ToggleTrail,
    ToggleFadeIn,
    ToggleScaleOverLife,
    AdjustRate(f64),
    AdjustDirection(f64),
}

pub const KEY_BINDINGS: [(KeyCode, EditorAction); 17] = [
    (KeyCode::Space, EditorAction::TogglePause),
    (KeyCode::KeyC, EditorAction::Clear),
    (KeyCode::Digit1, EditorAction::Preset(Preset::Fire)),
    (KeyCode::Digit2, EditorAction::Preset(Preset::Snow)),
    (KeyCode::Digit3, EditorAction::Preset(Preset::Explosion)),
    (KeyCode::Digit4, EditorAction::Preset(Preset::Sparkles)),
    (KeyCode::KeyG, EditorAction::ToggleGizmo),
    (KeyCode::KeyS, EditorAction::CycleShape),
    (KeyCode::KeyB, EditorAction::ToggleBlend),
    (KeyCode::KeyE, EditorAction::CycleEmitter),
    (KeyCode::KeyT, EditorAction::ToggleTrail),
    (KeyCode::KeyF, EditorAction::ToggleFadeIn),
    (KeyCode::KeyL, EditorAction::ToggleScaleOverLife),
    (KeyCode::ArrowUp, EditorAction::AdjustRate(RATE_STEP)),
    (KeyCode::ArrowDown, EditorAction::AdjustRate(-RATE_STEP)),
    (KeyCode::ArrowRight, EditorAction::AdjustDirection(DIRECTION_STEP)),
    (KeyCode::ArrowLeft, EditorAction::AdjustDirection(-DIRECTION_STEP)),
];

impl EditorAction {
    /// Apply to the live simulation. Returns the new gizmo visibility.
    pub fn apply(self, live: &mut LiveSimulation, show_gizmo: bool) -> bool {
        let config: &mut EffectConfig = &mut live.config;
        match self {
            Self::TogglePause => {
                let paused = live.state.toggle_pause();
                info!("Simulation {}", if paused { "paused" } else { "resumed" });
            }
            Self::Clear => live.clear(),
            Self::Preset(preset) => live.apply_preset(preset),
            Self::ToggleGizmo => return !show_gizmo,
            Self::CycleShape => config.shape = config.shape.next(),
            Self::ToggleBlend => config.blend = config.blend.toggled(),
            Self::CycleEmitter => config.emitter_type = config.emitter_type.next(),
            Self::ToggleTrail => config.trail = !config.trail,
            Self::ToggleFadeIn => config.fade_in = !config.fade_in,
            Self::ToggleScaleOverLife => config.scale_over_life = !config.scale_over_life,
            Self::AdjustRate(delta) => config.rate = (config.rate + delta).max(0.0),
            Self::AdjustDirection(delta) => {
                config.direction = (config.direction + delta).rem_euclid(360.0)
            }
        }
        show_gizmo
    }
}

/// Key bindings for editing the live effect. Ignored while an export runs.
pub fn keyboard_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    export: Res<ExportTask>,
    mut live: ResMut<LiveSimulation>,
    preview: Option<ResMut<PreviewTarget>>,
) {
    if export.is_running() {
        return;
    }
    let Some(mut preview) = preview else {
        return;
    };
    for (key, action) in KEY_BINDINGS {
        if keyboard.just_pressed(key) {
            preview.show_gizmo = action.apply(&mut live, preview.show_gizmo);
        }
    }
}

/// Move the emitter origin while the left mouse button is held over the preview
pub fn drag_emitter(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    sprites: Query<&GlobalTransform, With<PreviewSprite>>,
    mut live: ResMut<LiveSimulation>,
) {
    if !mouse.pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(sprite) = sprites.get_single() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };
    if let Some((x, y)) = world_to_canvas(world, sprite.translation().truncate()) {
        live.config.emit_x = x.round();
        live.config.emit_y = y.round();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfx_core::{BlendMode, EmitterType, Shape};

    #[test]
    fn test_every_key_is_bound_once() {
        let mut keys: Vec<KeyCode> = KEY_BINDINGS.iter().map(|(k, _)| *k).collect();
        let count = keys.len();
        keys.sort_by_key(|k| format!("{k:?}"));
        keys.dedup();
        assert_eq!(keys.len(), count);
    }

    #[test]
    fn test_toggles_and_cycles() {
        let mut live = LiveSimulation::default();
        EditorAction::CycleShape.apply(&mut live, true);
        EditorAction::ToggleBlend.apply(&mut live, true);
        EditorAction::CycleEmitter.apply(&mut live, true);
        EditorAction::ToggleTrail.apply(&mut live, true);
        assert_eq!(live.config.shape, Shape::Square);
        assert_eq!(live.config.blend, BlendMode::Normal);
        assert_eq!(live.config.emitter_type, EmitterType::Circle);
        assert!(live.config.trail);
        assert!(!EditorAction::ToggleGizmo.apply(&mut live, true));
        assert!(EditorAction::TogglePause.apply(&mut live, true));
        assert!(live.state.paused);
    }

    #[test]
    fn test_adjustments_stay_in_range() {
        let mut live = LiveSimulation::default();
        live.config.rate = 5.0;
        EditorAction::AdjustRate(-RATE_STEP).apply(&mut live, false);
        assert_eq!(live.config.rate, 0.0);
        live.config.direction = 350.0;
        EditorAction::AdjustDirection(DIRECTION_STEP).apply(&mut live, false);
        assert_eq!(live.config.direction, 5.0);
        EditorAction::AdjustDirection(-DIRECTION_STEP).apply(&mut live, false);
        EditorAction::AdjustDirection(-DIRECTION_STEP).apply(&mut live, false);
        assert_eq!(live.config.direction, 335.0);
        live.config.validate().unwrap();
    }

    #[test]
    fn test_preset_key_clears_particles() {
        let mut live = LiveSimulation::default();
        let config = live.config.clone();
        live.state.advance(&config, 0.5);
        assert!(live.state.particle_count() > 0);
        EditorAction::Preset(Preset::Snow).apply(&mut live, true);
        assert_eq!(live.state.particle_count(), 0);
        assert_eq!(live.config.emitter_type, EmitterType::Line);
    }
}
