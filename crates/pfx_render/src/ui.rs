use bevy::prelude::*;
use pfx_sim::LiveSimulation;

use super::export::ExportTask;
use super::preview::PreviewTarget;

/// Marker for the HUD text
#[derive(Component)]
pub struct HudText;

/// HUD frame counter for throttling
#[derive(Resource, Default)]
pub struct HudThrottle {
    pub frame: u32,
}

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("Particle Editor"),
        TextFont {
            font_size: 15.0,
            ..default()
        },
        TextColor(Color::srgba(0.0, 1.0, 0.4, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            max_width: Val::Px(330.0),
            ..default()
        },
        HudText,
    ));
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Refresh the HUD every 5th frame
pub fn update_hud(
    live: Res<LiveSimulation>,
    export: Res<ExportTask>,
    preview: Option<Res<PreviewTarget>>,
    mut throttle: ResMut<HudThrottle>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    throttle.frame = throttle.frame.wrapping_add(1);
    if throttle.frame % 5 != 0 {
        return;
    }
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };

    let c = &live.config;
    let paused = if live.state.paused { " [PAUSED]" } else { "" };
    let gizmo = preview.map(|p| p.show_gizmo).unwrap_or(false);
    let export_line = match (export.progress(), &export.last_result) {
        (Some((frame, total)), _) => format!("Exporting {frame}/{total}  [Esc] Cancel"),
        (None, Some(result)) => result.clone(),
        (None, None) => format!(
            "Export: {} fps, {}s{}",
            export.settings.fps,
            export.settings.duration,
            if export.settings.loop_mode { ", loop" } else { "" }
        ),
    };

    **text = format!(
        "PARTICLES: {} | Trails: {}{}\n\
         \n\
         Rate: {:.0}/s | Size: {:.1} | Speed: {:.0}\n\
         Direction: {:.0} deg | Gravity: {:.2} | Drag: {:.3}\n\
         Life: {:.2}s +/- {:.2}\n\
         Emitter: {} r={:.0} at ({:.0}, {:.0})\n\
         Shape: {} | Blend: {}\n\
         Colors: {} -> {}\n\
         Scale: {} | Fade in: {} | Trail: {} | Gizmo: {}\n\
         \n\
         {}\n\
         \n\
         [Space] Pause  [C] Clear  [1-4] Presets\n\
         [S] Shape  [B] Blend  [E] Emitter  [G] Gizmo\n\
         [T] Trail  [F] Fade in  [L] Scale\n\
         [Up/Down] Rate  [Left/Right] Direction\n\
         [LMB] Move emitter  [X] Export flipbook",
        live.state.particle_count(),
        live.state.decal_count(),
        paused,
        c.rate,
        c.size,
        c.speed,
        c.direction,
        c.gravity,
        c.drag,
        c.life_time,
        c.life_variation,
        c.emitter_type.name(),
        c.radius,
        c.emit_x,
        c.emit_y,
        c.shape.name(),
        c.blend.name(),
        c.color_start.to_hex(),
        c.color_end.to_hex(),
        on_off(c.scale_over_life),
        on_off(c.fade_in),
        on_off(c.trail),
        on_off(gizmo),
        export_line,
    );
}
