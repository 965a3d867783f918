use thiserror::Error;

#[derive(Error, Debug)]
pub enum RubricError {
    #[error("invalid field: {0}")]
    InvalidField(String),

    #[error("rating out of range: {value} (expected 0..={max})")]
    OutOfRange { value: String, max: u8 },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("refusing to overwrite existing file: {0}")]
    FileExists(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RubricError {
    /// Input-contract violations, as opposed to environment failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RubricError::InvalidField(_) | RubricError::OutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RubricError>;
