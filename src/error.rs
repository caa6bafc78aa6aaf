use thiserror::Error;

/// Errors that can occur in epidemic curve analysis.
#[derive(Error, Debug)]
pub enum EpiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Fit error: {0}")]
    FitError(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Plot error: {0}")]
    Plot(String),
}

impl From<toml::de::Error> for EpiError {
    fn from(e: toml::de::Error) -> Self {
        EpiError::Config(e.to_string())
    }
}
