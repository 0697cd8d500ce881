//! Headless flipbook exporter.
//!
//! Renders an effect at a fixed frame rate and writes the tiled sprite
//! sheet plus its manifest, without opening a window.

use std::path::PathBuf;

use pfx_core::{EffectConfig, PfxError, Preset};
use pfx_export::{ExportError, FlipbookSettings, export_flipbook, save_sheet};
use thiserror::Error;
use tracing::info;

const USAGE: &str = "\
usage: flipbook [options]
  --preset NAME        fire, snow, explosion or sparkles (applied after --config)
  --config FILE        effect configuration in TOML
  --set FIELD=VALUE    override one configuration field (repeatable)
  --fps N              frames per second (default 30)
  --duration S         seconds to capture (default 2)
  --loop               simulate twice as long and keep the first half
  --seed N             random seed (default 42)
  --out DIR            output directory (default flipbooks)";

#[derive(Debug, Error)]
enum CliError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("invalid value for {flag}: {value:?}")]
    InvalidValue { flag: String, value: String },

    #[error("expected FIELD=VALUE, got {0:?}")]
    MalformedOverride(String),

    #[error(transparent)]
    Config(#[from] PfxError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Debug, Default, PartialEq)]
struct Args {
    preset: Option<Preset>,
    config: Option<PathBuf>,
    overrides: Vec<(String, String)>,
    settings: FlipbookSettings,
    out: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args, CliError> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        let mut value = || args.next().ok_or_else(|| CliError::MissingValue(flag.clone()));
        match flag.as_str() {
            "--preset" => parsed.preset = Some(Preset::from_name(&value()?)?),
            "--config" => parsed.config = Some(PathBuf::from(value()?)),
            "--set" => {
                let pair = value()?;
                let (field, v) = pair
                    .split_once('=')
                    .ok_or_else(|| CliError::MalformedOverride(pair.clone()))?;
                parsed.overrides.push((field.trim().to_string(), v.to_string()));
            }
            "--fps" => parsed.settings.fps = parse_value(&flag, value()?)?,
            "--duration" => parsed.settings.duration = parse_value(&flag, value()?)?,
            "--seed" => parsed.settings.seed = parse_value(&flag, value()?)?,
            "--out" => parsed.out = Some(PathBuf::from(value()?)),
            "--loop" => parsed.settings.loop_mode = true,
            "--help" | "-h" => parsed.help = true,
            _ => return Err(CliError::UnexpectedArgument(flag)),
        }
    }
    Ok(parsed)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: String) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

/// Load the file, then the preset overlay, then individual overrides
fn build_config(args: &Args) -> Result<EffectConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => EffectConfig::from_toml_file(path)?,
        None => EffectConfig::default(),
    };
    if let Some(preset) = args.preset {
        config.apply_preset(preset);
    }
    for (field, value) in &args.overrides {
        config.set_field(field, value)?;
    }
    Ok(config)
}

fn run(args: Args) -> Result<PathBuf, CliError> {
    let config = build_config(&args)?;
    let out = args.out.unwrap_or_else(|| PathBuf::from("flipbooks"));
    let sheet = export_flipbook(&config, args.settings)?;
    Ok(save_sheet(&sheet, &args.settings, &out)?)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) if args.help => {
            println!("{USAGE}");
            return;
        }
        Ok(args) => args,
        Err(e) => {
            eprintln!("flipbook: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    match run(args) {
        Ok(path) => info!("Done: {}", path.display()),
        Err(e) => {
            eprintln!("flipbook: {e}");
            std::process::exit(1);
        }
    }
}
