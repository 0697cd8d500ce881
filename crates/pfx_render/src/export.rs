use std::path::PathBuf;

use bevy::prelude::*;
use pfx_export::{FlipbookJob, FlipbookSettings, JobStatus, save_sheet};
use pfx_sim::LiveSimulation;

/// Directory exported sheets are written to, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "flipbooks";

/// In-app flipbook export, advanced one frame per app update
#[derive(Resource)]
pub struct ExportTask {
    job: Option<FlipbookJob>,
    /// Pause flag to restore on the live simulation when the job ends
    resume_paused: bool,
    pub settings: FlipbookSettings,
    pub output_dir: PathBuf,
    /// Outcome of the most recent export, shown in the HUD
    pub last_result: Option<String>,
}

impl Default for ExportTask {
    fn default() -> Self {
        Self {
            job: None,
            resume_paused: false,
            settings: FlipbookSettings::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            last_result: None,
        }
    }
}

impl ExportTask {
    pub fn is_running(&self) -> bool {
        self.job.is_some()
    }

    pub fn progress(&self) -> Option<(usize, usize)> {
        self.job.as_ref().map(FlipbookJob::progress)
    }

    /// Snapshot the live configuration and pause the live loop.
    /// Does nothing if an export is already in flight.
    pub fn start(&mut self, live: &mut LiveSimulation) {
        if self.job.is_some() {
            return;
        }
        match FlipbookJob::new(&live.config, self.settings) {
            Ok(job) => {
                self.resume_paused = live.state.paused;
                live.state.paused = true;
                self.job = Some(job);
            }
            Err(e) => {
                error!("Could not start export: {e}");
                self.last_result = Some(format!("Export failed: {e}"));
            }
        }
    }

    pub fn cancel(&mut self) {
        if let Some(job) = self.job.as_mut() {
            job.cancel();
        }
    }

    /// Run one frame of the job; on completion save the sheet and hand the
    /// live loop back in the pause state it had before the export.
    pub fn step(&mut self, live: &mut LiveSimulation) {
        let Some(job) = self.job.as_mut() else {
            return;
        };
        let outcome = match job.advance() {
            Ok(JobStatus::InProgress { .. }) => return,
            Ok(JobStatus::Finished) => self.save_finished(),
            Ok(JobStatus::Cancelled) => {
                self.job = None;
                warn!("Flipbook export cancelled");
                "Export cancelled".to_string()
            }
            Err(e) => {
                self.job = None;
                error!("Flipbook export failed: {e}");
                format!("Export failed: {e}")
            }
        };
        live.state.paused = self.resume_paused;
        self.last_result = Some(outcome);
    }

    fn save_finished(&mut self) -> String {
        let Some(job) = self.job.take() else {
            return String::new();
        };
        let settings = *job.settings();
        let saved = job
            .finish()
            .and_then(|sheet| save_sheet(&sheet, &settings, &self.output_dir));
        match saved {
            Ok(path) => format!("Saved {}", path.display()),
            Err(e) => {
                error!("Could not save flipbook: {e}");
                format!("Export failed: {e}")
            }
        }
    }
}

/// X starts an export, Escape cancels the one in flight
pub fn export_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut export: ResMut<ExportTask>,
    mut live: ResMut<LiveSimulation>,
) {
    if keyboard.just_pressed(KeyCode::KeyX) {
        export.start(&mut live);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        export.cancel();
    }
}

pub fn drive_export(mut export: ResMut<ExportTask>, mut live: ResMut<LiveSimulation>) {
    export.step(&mut live);
}
