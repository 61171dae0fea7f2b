use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokestackError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Load error: {0}")]
    Load(String),
    #[error("No records found for {0}")]
    NotFound(String),
    #[error("Unknown column: {requested}. Available columns: {valid}")]
    UnknownColumn { requested: String, valid: String },
    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, SmokestackError>;

// Helper conversions
impl From<csv::Error> for SmokestackError {
    fn from(e: csv::Error) -> Self {
        Self::Load(e.to_string())
    }
}
impl From<config::ConfigError> for SmokestackError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}
