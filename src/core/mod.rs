

pub mod config;
pub mod error;

pub use config::NluConfig;
pub use error::{NluError, Result};
