use bevy::log::LogPlugin;
use bevy::prelude::*;
use pfx_core::{DEFAULT_SEED, EffectConfig, PfxResult, Preset};
use pfx_render::PfxRenderPlugin;
use pfx_sim::{LiveSimulation, SimulationPlugin};

const USAGE: &str = "usage: pfx [--preset fire|snow|explosion|sparkles] [CONFIG.toml]";

/// Starting configuration from `[--preset NAME] [CONFIG.toml]`.
/// A preset is applied on top of the file.
fn initial_config(args: impl Iterator<Item = String>) -> PfxResult<EffectConfig> {
    let mut config = EffectConfig::default();
    let mut preset = None;
    let mut args = args;
    while let Some(arg) = args.next() {
        if arg == "--preset" {
            let name = args.next().unwrap_or_default();
            preset = Some(Preset::from_name(&name)?);
        } else {
            config = EffectConfig::from_toml_file(&arg)?;
        }
    }
    if let Some(preset) = preset {
        config.apply_preset(preset);
    }
    Ok(config)
}

fn main() -> AppExit {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return AppExit::Success;
    }
    let config = match initial_config(args.into_iter()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pfx: {e}\n{USAGE}");
            return AppExit::error();
        }
    };

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Particle Effect Editor".into(),
                        resolution: (1280.0, 720.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "info,wgpu=error,naga=warn".into(),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::srgb(0.04, 0.04, 0.06)))
        .insert_resource(LiveSimulation::new(config, DEFAULT_SEED))
        .add_plugins(SimulationPlugin)
        .add_plugins(PfxRenderPlugin)
        .run()
}
