use serde::{Deserialize, Serialize};

use crate::core::config::{DEFAULT_DIVISION_COLUMN, DEFAULT_STATE_COLUMN};
use crate::gazetteer::Gazetteer;

use super::models::EntitySet;


/// Parameterised location predicate with `?` placeholders.
///
/// An empty clause always comes with empty params and means "unfiltered".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFilter {
    pub clause: String,
    pub params: Vec<String>,
}

impl LocationFilter {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }

    /// Chart caption suffix naming the applied restriction, e.g. `" (filtered by: bhopal)"`.
    pub fn caption(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" (filtered by: {})", self.params.join(", "))
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterColumns {
    pub state: String,
    pub division: String,
}

impl FilterColumns {
    pub fn new(state: impl Into<String>, division: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            division: division.into(),
        }
    }
}

impl Default for FilterColumns {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_COLUMN, DEFAULT_DIVISION_COLUMN)
    }
}


#[derive(Debug, Clone, Default)]
pub struct LocationFilterBuilder {
    columns: FilterColumns,
}

impl LocationFilterBuilder {
    pub fn new(columns: FilterColumns) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &FilterColumns {
        &self.columns
    }

    /// Scheme entities never restrict location, and a generic location that
    /// is neither a known state nor a known division is dropped.
    pub fn build(&self, entities: &EntitySet, gazetteer: &Gazetteer) -> LocationFilter {
        let mut conditions = Vec::new();
        let mut params = Vec::new();

        if let Some(state) = entities.state() {
            conditions.push(equality(&self.columns.state));
            params.push(state.to_lowercase());
        } else if let Some(division) = entities.division() {
            conditions.push(equality(&self.columns.division));
            params.push(division.to_lowercase());
        } else if let Some(location) = entities.locations.first() {
            let location = location.trim().to_lowercase();
            if gazetteer.is_state(&location) {
                conditions.push(equality(&self.columns.state));
                params.push(location);
            } else if gazetteer.is_division(&location) {
                conditions.push(equality(&self.columns.division));
                params.push(location);
            }
        }

        LocationFilter {
            clause: conditions.join(" AND "),
            params,
        }
    }
}

fn equality(column: &str) -> String {
    format!("LOWER({}) = ?", column)
}
