use bevy::prelude::*;
use pfx_sim::simulation_tick;

use super::controls;
use super::export::{self, ExportTask};
use super::preview;
use super::ui;

/// Preview, HUD, editor controls and the in-app flipbook exporter
pub struct PfxRenderPlugin;

impl Plugin for PfxRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ui::HudThrottle>()
            .init_resource::<ExportTask>()
            .add_systems(Startup, (preview::setup_preview, ui::spawn_hud))
            .add_systems(
                Update,
                (
                    controls::keyboard_controls.before(simulation_tick),
                    controls::drag_emitter.before(simulation_tick),
                    export::export_input,
                    export::drive_export.after(export::export_input),
                    preview::update_preview.after(simulation_tick),
                    ui::update_hud,
                ),
            );
    }
}
