use thiserror::Error;

/// Errors that can occur while reading or writing an instance file.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to access instance file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid instance: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialise instance: {0}")]
    Serialise(#[from] toml::ser::Error),
}
