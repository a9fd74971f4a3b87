

use thiserror::Error;


#[derive(Error, Debug)]
pub enum NluError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}


pub type Result<T> = std::result::Result<T, NluError>;
