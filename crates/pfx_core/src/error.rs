use thiserror::Error;

/// Errors raised while editing or loading an effect configuration
#[derive(Error, Debug)]
pub enum PfxError {
    /// A color string did not match `#rrggbb`
    #[error("invalid color format {0:?}: expected #rrggbb")]
    InvalidColorFormat(String),
    /// A numeric or boolean field received a value it cannot hold
    #[error("invalid value for `{field}`: {reason}")]
    InvalidNumericInput { field: String, reason: String },
    /// A setter named a field the configuration does not have
    #[error("unknown configuration field `{0}`")]
    UnknownField(String),
    /// A preset name that is not one of fire, snow, explosion, sparkles
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    /// A configuration file could not be parsed or serialized
    #[error("config parse error: {0}")]
    ConfigParse(String),
    /// A configuration file could not be read or written
    #[error("config file error: {0}")]
    Io(#[from] std::io::Error),
}

impl PfxError {
    pub fn numeric(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type PfxResult<T> = Result<T, PfxError>;
