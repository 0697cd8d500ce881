use pfx_core::PfxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Config(#[from] PfxError),

    #[error("frame {index} could not be decoded: {reason}")]
    FrameDecodeFailure { index: usize, reason: String },

    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("could not write sheet manifest: {0}")]
    Manifest(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export was cancelled")]
    Cancelled,
}

pub type ExportResult<T> = Result<T, ExportError>;
