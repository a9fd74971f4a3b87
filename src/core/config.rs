

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{NluError, Result};

lazy_static! {
    // Bare or double-quoted identifier, optionally schema-qualified.
    static ref SQL_IDENTIFIER: Option<Regex> = Regex::new(
        r#"^(?:[A-Za-z_][A-Za-z0-9_]*|"[^"]+")(?:\.(?:[A-Za-z_][A-Za-z0-9_]*|"[^"]+"))?$"#
    )
    .ok();
}


pub const DEFAULT_STATE_COLUMN: &str = "state_name";

pub const DEFAULT_DIVISION_COLUMN: &str = "division_name";

pub const DEFAULT_TABLE: &str = "schemes";


#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NluConfig {

    pub locations_csv: Option<PathBuf>,


    pub state_column: String,
    pub division_column: String,


    pub table: String,


    pub use_recognizer: bool,
}

impl NluConfig {
    pub fn new(locations_csv: Option<PathBuf>) -> Self {
        Self {
            locations_csv,
            state_column: DEFAULT_STATE_COLUMN.to_string(),
            division_column: DEFAULT_DIVISION_COLUMN.to_string(),
            table: DEFAULT_TABLE.to_string(),
            use_recognizer: true,
        }
    }


    pub fn from_env() -> Self {
        let mut config = Self::new(std::env::var("NLU_LOCATIONS_CSV").ok().map(PathBuf::from));

        if let Ok(column) = std::env::var("NLU_STATE_COLUMN") {
            config.state_column = column;
        }
        if let Ok(column) = std::env::var("NLU_DIVISION_COLUMN") {
            config.division_column = column;
        }
        if let Ok(table) = std::env::var("NLU_TABLE") {
            config.table = table;
        }
        if let Some(enabled) = std::env::var("NLU_USE_RECOGNIZER")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.use_recognizer = enabled;
        }

        if let Err(e) = config.validate() {
            tracing::warn!("Ignoring invalid environment configuration: {}", e);
            return Self::new(config.locations_csv);
        }

        config
    }


    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("NLU").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Column and table names are spliced into SQL text, so each must be a
    /// bare or double-quoted identifier.
    pub fn validate(&self) -> Result<()> {
        check_identifier("state_column", &self.state_column)?;
        check_identifier("division_column", &self.division_column)?;
        check_identifier("table", &self.table)
    }
}


pub fn is_sql_identifier(name: &str) -> bool {
    SQL_IDENTIFIER
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(name))
}

fn check_identifier(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NluError::Validation(format!("{} must not be empty", field)));
    }
    if !is_sql_identifier(value) {
        return Err(NluError::Validation(format!(
            "{} must be an identifier or a quoted identifier, got {:?}",
            field, value
        )));
    }
    Ok(())
}

impl Default for NluConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
