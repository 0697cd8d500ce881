//! Flipbook export: renders an effect at a fixed timestep and tiles the
//! frames into a single sprite sheet.

pub mod error;
pub mod job;
pub mod settings;
pub mod sheet;

use pfx_core::EffectConfig;
use tracing::info;

pub use error::{ExportError, ExportResult};
pub use job::{FlipbookJob, JobStatus};
pub use settings::FlipbookSettings;
pub use sheet::{CapturedFrame, FlipbookSheet, SheetManifest, assemble_sheet, save_sheet, sheet_grid};

/// Run a whole export synchronously
pub fn export_flipbook(config: &EffectConfig, settings: FlipbookSettings) -> ExportResult<FlipbookSheet> {
    let mut job = FlipbookJob::new(config, settings)?;
    loop {
        match job.advance()? {
            JobStatus::InProgress { frame, total } => {
                if frame % settings.fps.max(1) as usize == 0 {
                    info!("Simulated {frame}/{total} frames");
                }
            }
            JobStatus::Finished | JobStatus::Cancelled => break,
        }
    }
    let sheet = job.finish()?;
    if !sheet.skipped_frames.is_empty() {
        info!("{} frames left blank", sheet.skipped_frames.len());
    }
    Ok(sheet)
}
