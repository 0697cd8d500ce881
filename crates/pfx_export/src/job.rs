use pfx_core::{CANVAS_SIZE, EffectConfig};
use pfx_raster::{Canvas, render_frame};
use pfx_sim::SimulationState;
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};
use crate::settings::FlipbookSettings;
use crate::sheet::{CapturedFrame, FlipbookSheet, assemble_sheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    /// `frame` of `total` simulated frames are done
    InProgress { frame: usize, total: usize },
    Finished,
    Cancelled,
}

/// A flipbook export driven one frame at a time.
///
/// The job owns its own configuration snapshot and simulation state, so
/// edits to the live configuration while it runs have no effect on it and
/// it never touches the live particles.
pub struct FlipbookJob {
    config: EffectConfig,
    settings: FlipbookSettings,
    state: SimulationState,
    canvas: Canvas,
    frames: Vec<CapturedFrame>,
    next_frame: usize,
    cancelled: bool,
}

impl FlipbookJob {
    pub fn new(config: &EffectConfig, settings: FlipbookSettings) -> ExportResult<Self> {
        config.validate()?;
        settings.validate()?;
        info!(
            "Starting flipbook export: {} frames at {} fps{}",
            settings.frame_count(),
            settings.fps,
            if settings.loop_mode { " (loop mode)" } else { "" }
        );
        Ok(Self {
            config: config.clone(),
            settings,
            state: SimulationState::new(settings.seed),
            canvas: Canvas::new(CANVAS_SIZE, CANVAS_SIZE),
            frames: Vec::new(),
            next_frame: 0,
            cancelled: false,
        })
    }

    pub fn settings(&self) -> &FlipbookSettings {
        &self.settings
    }

    /// Simulated frames completed and the total to simulate
    pub fn progress(&self) -> (usize, usize) {
        (self.next_frame, self.settings.simulated_frames())
    }

    pub fn is_finished(&self) -> bool {
        self.next_frame >= self.settings.simulated_frames()
    }

    /// Stop before the next frame. Frames already captured are discarded.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Simulate one fixed-timestep frame and capture it if it belongs to the
    /// kept range. In loop mode the second half is simulated but not kept.
    pub fn advance(&mut self) -> ExportResult<JobStatus> {
        if self.cancelled {
            return Ok(JobStatus::Cancelled);
        }
        let total = self.settings.simulated_frames();
        if self.next_frame >= total {
            return Ok(JobStatus::Finished);
        }

        let index = self.next_frame;
        self.state.advance(&self.config, self.settings.frame_dt());
        if index < self.settings.frame_count() {
            render_frame(
                &mut self.canvas,
                &self.state.decals,
                &self.state.particles,
                &self.config,
                false,
            );
            self.frames.push(CapturedFrame::capture(index, &self.canvas)?);
            debug!("Captured frame {index} ({} particles)", self.state.particle_count());
        }
        self.next_frame += 1;

        Ok(if self.next_frame >= total {
            JobStatus::Finished
        } else {
            JobStatus::InProgress { frame: self.next_frame, total }
        })
    }

    /// Assemble the sheet from the captured frames
    pub fn finish(self) -> ExportResult<FlipbookSheet> {
        if self.cancelled {
            return Err(ExportError::Cancelled);
        }
        Ok(assemble_sheet(&self.frames))
    }
}
