use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageOutputFormat, Rgba, RgbaImage};
use pfx_core::{CANVAS_SIZE, FLIPBOOK_COLUMNS};
use pfx_raster::Canvas;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ExportError, ExportResult};
use crate::settings::FlipbookSettings;

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// One rendered frame, held as PNG bytes until the sheet is assembled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFrame {
    pub index: usize,
    pub png: Vec<u8>,
}

impl CapturedFrame {
    pub fn capture(index: usize, canvas: &Canvas) -> ExportResult<Self> {
        Ok(Self {
            index,
            png: encode_png(&canvas.to_image())?,
        })
    }

    pub fn decode(&self) -> ExportResult<RgbaImage> {
        image::load_from_memory_with_format(&self.png, ImageFormat::Png)
            .map(|img| img.to_rgba8())
            .map_err(|e| ExportError::FrameDecodeFailure {
                index: self.index,
                reason: e.to_string(),
            })
    }
}

/// Tiled frame grid ready to be written out
#[derive(Debug, Clone)]
pub struct FlipbookSheet {
    pub image: RgbaImage,
    pub frame_count: usize,
    pub columns: u32,
    pub rows: u32,
    /// Frames whose cell was left blank because they failed to decode
    pub skipped_frames: Vec<usize>,
}

/// Sidecar describing the grid, written next to the sheet image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetManifest {
    pub image: String,
    pub fps: u32,
    pub duration: f64,
    pub loop_mode: bool,
    pub seed: u64,
    pub frames: usize,
    pub columns: u32,
    pub rows: u32,
    pub cell_size: u32,
    pub skipped_frames: Vec<usize>,
}

/// Grid shape for `frame_count` cells; always at least one row
pub fn sheet_grid(frame_count: usize) -> (u32, u32) {
    let rows = frame_count.div_ceil(FLIPBOOK_COLUMNS as usize).max(1);
    (FLIPBOOK_COLUMNS, rows as u32)
}

/// Tile frames row-major into an 8-column grid on an opaque black sheet.
///
/// A frame that fails to decode leaves its cell blank; the rest of the sheet
/// is still produced.
pub fn assemble_sheet(frames: &[CapturedFrame]) -> FlipbookSheet {
    let (columns, rows) = sheet_grid(frames.len());
    let mut image = RgbaImage::from_pixel(columns * CANVAS_SIZE, rows * CANVAS_SIZE, BACKGROUND);
    let mut skipped_frames = Vec::new();

    for (slot, frame) in frames.iter().enumerate() {
        let cell = match frame.decode() {
            Ok(cell) => cell,
            Err(e) => {
                warn!("Leaving cell {slot} blank: {e}");
                skipped_frames.push(frame.index);
                continue;
            }
        };
        let cell = if cell.dimensions() == (CANVAS_SIZE, CANVAS_SIZE) {
            cell
        } else {
            imageops::resize(&cell, CANVAS_SIZE, CANVAS_SIZE, FilterType::Triangle)
        };
        let x = (slot as u32 % columns) * CANVAS_SIZE;
        let y = (slot as u32 / columns) * CANVAS_SIZE;
        imageops::overlay(&mut image, &cell, x as i64, y as i64);
    }

    FlipbookSheet {
        image,
        frame_count: frames.len(),
        columns,
        rows,
        skipped_frames,
    }
}

impl FlipbookSheet {
    pub fn encode_png(&self) -> ExportResult<Vec<u8>> {
        encode_png(&self.image)
    }

    /// Copy of the cell at `slot`, if the grid has one
    pub fn cell(&self, slot: usize) -> Option<RgbaImage> {
        let slot = u32::try_from(slot).ok()?;
        if slot >= self.columns * self.rows {
            return None;
        }
        let x = (slot % self.columns) * CANVAS_SIZE;
        let y = (slot / self.columns) * CANVAS_SIZE;
        Some(imageops::crop_imm(&self.image, x, y, CANVAS_SIZE, CANVAS_SIZE).to_image())
    }

    pub fn manifest(&self, image_name: &str, settings: &FlipbookSettings) -> SheetManifest {
        SheetManifest {
            image: image_name.to_string(),
            fps: settings.fps,
            duration: settings.duration,
            loop_mode: settings.loop_mode,
            seed: settings.seed,
            frames: self.frame_count,
            columns: self.columns,
            rows: self.rows,
            cell_size: CANVAS_SIZE,
            skipped_frames: self.skipped_frames.clone(),
        }
    }
}

/// Write the sheet and its `.toml` manifest into `dir`, returning the image path
pub fn save_sheet(
    sheet: &FlipbookSheet,
    settings: &FlipbookSettings,
    dir: &Path,
) -> ExportResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let name = settings.file_name(timestamp);
    let path = dir.join(&name);

    fs::write(&path, sheet.encode_png()?)?;
    let manifest = toml::to_string_pretty(&sheet.manifest(&name, settings))?;
    fs::write(path.with_extension("toml"), manifest)?;

    info!(
        "Saved {}x{} flipbook ({} frames) to {}",
        sheet.columns,
        sheet.rows,
        sheet.frame_count,
        path.display()
    );
    Ok(path)
}

fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}
