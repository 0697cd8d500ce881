use pfx_core::{
    CANVAS_SIZE, DEFAULT_EXPORT_DURATION, DEFAULT_EXPORT_FPS, DEFAULT_SEED, FLIPBOOK_COLUMNS,
    PfxError, PfxResult,
};
use serde::{Deserialize, Serialize};

/// Most frames one sheet can hold: its pixel height must fit in a `u32`.
pub const MAX_SHEET_FRAMES: usize = (u32::MAX / CANVAS_SIZE) as usize * FLIPBOOK_COLUMNS as usize;

/// Parameters of one flipbook export
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipbookSettings {
    /// Frames per simulated second; also fixes the timestep at `1 / fps`
    pub fps: u32,
    /// Seconds of effect captured
    pub duration: f64,
    /// Simulate twice as long and keep only the first half
    pub loop_mode: bool,
    /// Seed of the export's own random stream
    pub seed: u64,
}

impl Default for FlipbookSettings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_EXPORT_FPS,
            duration: DEFAULT_EXPORT_DURATION,
            loop_mode: false,
            seed: DEFAULT_SEED,
        }
    }
}

impl FlipbookSettings {
    pub fn validate(&self) -> PfxResult<()> {
        if self.fps == 0 {
            return Err(PfxError::numeric("fps", "must be at least 1"));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(PfxError::numeric(
                "duration",
                format!("{} must be a finite number >= 0", self.duration),
            ));
        }
        let frames = self.frame_count();
        if frames > MAX_SHEET_FRAMES {
            return Err(PfxError::numeric(
                "duration",
                format!(
                    "{}s at {} fps needs {frames} frames, a sheet holds at most {MAX_SHEET_FRAMES}",
                    self.duration, self.fps
                ),
            ));
        }
        Ok(())
    }

    /// Fixed simulation timestep
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Frames kept in the sheet: `ceil(fps * duration)`, saturating at `usize::MAX`
    pub fn frame_count(&self) -> usize {
        let frames = (self.fps as f64 * self.duration).ceil();
        if frames.is_nan() || frames <= 0.0 { 0 } else { frames as usize }
    }

    /// Frames simulated, including the discarded half in loop mode
    pub fn simulated_frames(&self) -> usize {
        if self.loop_mode {
            self.frame_count().saturating_mul(2)
        } else {
            self.frame_count()
        }
    }

    /// `particle-flipbook-30fps-2s-1700000000000.png`, with `-loop` before
    /// the timestamp in loop mode
    pub fn file_name(&self, timestamp_ms: u128) -> String {
        let loop_suffix = if self.loop_mode { "-loop" } else { "" };
        format!(
            "particle-flipbook-{}fps-{}s{}-{}.png",
            self.fps, self.duration, loop_suffix, timestamp_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_counts() {
        let s = FlipbookSettings { fps: 10, duration: 1.0, ..FlipbookSettings::default() };
        assert_eq!(s.frame_count(), 10);
        assert_eq!(s.simulated_frames(), 10);
        let s = FlipbookSettings { loop_mode: true, ..s };
        assert_eq!(s.simulated_frames(), 20);
        let s = FlipbookSettings { fps: 24, duration: 0.55, loop_mode: false, seed: 0 };
        // 13.2 rounds up
        assert_eq!(s.frame_count(), 14);
        assert_eq!(FlipbookSettings::default().frame_count(), 60);
    }

    #[test]
    fn test_file_name_encodes_parameters() {
        let s = FlipbookSettings::default();
        assert_eq!(s.file_name(123), "particle-flipbook-30fps-2s-123.png");
        let s = FlipbookSettings { fps: 12, duration: 1.5, loop_mode: true, seed: 1 };
        assert_eq!(s.file_name(9), "particle-flipbook-12fps-1.5s-loop-9.png");
    }

    #[test]
    fn test_validation() {
        FlipbookSettings::default().validate().unwrap();
        FlipbookSettings { duration: 0.0, ..FlipbookSettings::default() }.validate().unwrap();
        for bad in [
            FlipbookSettings { fps: 0, ..FlipbookSettings::default() },
            FlipbookSettings { duration: -1.0, ..FlipbookSettings::default() },
            FlipbookSettings { duration: f64::NAN, ..FlipbookSettings::default() },
        ] {
            assert!(matches!(bad.validate(), Err(PfxError::InvalidNumericInput { .. })));
        }
    }

    #[test]
    fn test_sheet_capacity_bounds_duration() {
        let max_duration = (MAX_SHEET_FRAMES / 8) as f64;
        let fits = FlipbookSettings { fps: 8, duration: max_duration, ..FlipbookSettings::default() };
        assert_eq!(fits.frame_count(), MAX_SHEET_FRAMES);
        fits.validate().unwrap();

        let over = FlipbookSettings { duration: max_duration + 1.0, ..fits };
        assert!(matches!(
            over.validate(),
            Err(PfxError::InvalidNumericInput { ref field, .. }) if field == "duration"
        ));
    }

    #[test]
    fn test_huge_duration_counts_saturate() {
        let s = FlipbookSettings { fps: 30, duration: 1e18, loop_mode: true, seed: 0 };
        assert_eq!(s.frame_count(), usize::MAX);
        assert_eq!(s.simulated_frames(), usize::MAX);
        assert!(s.validate().is_err());
    }
}
