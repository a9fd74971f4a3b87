

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::error::Result;


#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub state: String,
    pub division: String,
}


// Sources may carry the display and snake_case headers side by side.
#[derive(Debug, Deserialize)]
struct LocationRow {
    #[serde(rename = "State Name", default)]
    state_display: Option<String>,
    #[serde(rename = "state_name", default)]
    state_snake: Option<String>,
    #[serde(rename = "Division Name", default)]
    division_display: Option<String>,
    #[serde(rename = "division_name", default)]
    division_snake: Option<String>,
}

impl From<LocationRow> for LocationRecord {
    /// The display column wins whenever it holds a value; csv reads blank
    /// cells as `None`, so a blank display cell falls back to snake_case.
    fn from(row: LocationRow) -> Self {
        Self {
            state: row.state_display.or(row.state_snake).unwrap_or_default(),
            division: row.division_display.or(row.division_snake).unwrap_or_default(),
        }
    }
}

impl LocationRecord {
    pub fn new(state: impl Into<String>, division: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            division: division.into(),
        }
    }
}


pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<LocationRecord>> {
    let path = path.as_ref();
    debug!("Reading location records from {}", path.display());
    let file = std::fs::File::open(path)?;
    read_records_from(file)
}

/// Rows that fail to decode are skipped; only I/O failures abort the read.
pub fn read_records_from<R: Read>(source: R) -> Result<Vec<LocationRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.deserialize::<LocationRow>() {
        match row {
            Ok(row) => records.push(LocationRecord::from(row)),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!("Skipping undecodable location row: {}", e);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} undecodable location rows", skipped);
    }

    Ok(records)
}
