

pub mod aliases;
pub mod defaults;
pub mod loader;

pub use aliases::{AliasEntry, AliasTarget, DEFAULT_ALIASES};
pub use loader::{LocationRecord, read_records, read_records_from};

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use defaults::{FALLBACK_DIVISIONS, FALLBACK_STATES};

const REJECTED_VALUES: &[&str] = &["", "state name", "division name", "nan"];


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub states: usize,
    pub divisions: usize,
    pub aliases: usize,
    pub fallback: bool,
}


/// Read-only vocabulary of states, divisions and aliases.
///
/// Built once and shared; there is no mutation path after construction.
/// Both name sets are also kept in scan order (longest first, then
/// lexicographic) so substring resolution never depends on load order.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    states: BTreeSet<String>,
    divisions: BTreeSet<String>,
    state_scan: Vec<String>,
    division_scan: Vec<String>,
    aliases: Vec<AliasEntry>,
    fallback: bool,
}

impl Gazetteer {

    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = LocationRecord>,
    {
        Self::build_with_aliases(records, DEFAULT_ALIASES.as_slice())
    }


    pub fn build_with_aliases<I>(records: I, aliases: &[(&str, AliasTarget)]) -> Self
    where
        I: IntoIterator<Item = LocationRecord>,
    {
        let mut states = BTreeSet::new();
        let mut divisions = BTreeSet::new();
        let mut skipped = 0usize;

        for record in records {
            let state = normalize_field(&record.state);
            let division = normalize_field(&record.division);

            if state.is_none() && division.is_none() {
                debug!("Skipping location record without usable fields: {:?}", record);
                skipped += 1;
                continue;
            }

            states.extend(state);
            divisions.extend(division);
        }

        if skipped > 0 {
            warn!("Skipped {} malformed location records", skipped);
        }

        let fallback = states.is_empty() && divisions.is_empty();
        if fallback {
            warn!("No usable location records, using built-in vocabulary");
            states.extend(FALLBACK_STATES.iter().map(|s| (*s).to_string()));
            divisions.extend(FALLBACK_DIVISIONS.iter().map(|s| (*s).to_string()));
        }

        let aliases = compile_aliases(aliases, &states);

        let gazetteer = Self {
            state_scan: scan_order(&states),
            division_scan: scan_order(&divisions),
            states,
            divisions,
            aliases,
            fallback,
        };

        info!(
            "Gazetteer ready: {} states, {} divisions, {} aliases",
            gazetteer.states.len(),
            gazetteer.divisions.len(),
            gazetteer.aliases.len()
        );

        gazetteer
    }


    pub fn fallback() -> Self {
        Self::build(std::iter::empty())
    }

    /// Never fails: an unreadable source yields the fallback vocabulary.
    pub fn from_csv(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_records(path) {
            Ok(records) => {
                info!("Loaded {} location records from {}", records.len(), path.display());
                Self::build(records)
            }
            Err(e) => {
                warn!("Cannot read location records from {}: {}", path.display(), e);
                Self::fallback()
            }
        }
    }

    pub fn states(&self) -> &BTreeSet<String> {
        &self.states
    }

    pub fn divisions(&self) -> &BTreeSet<String> {
        &self.divisions
    }

    pub fn aliases(&self) -> &[AliasEntry] {
        &self.aliases
    }

    /// States ordered longest first.
    pub fn states_by_length(&self) -> &[String] {
        &self.state_scan
    }

    /// Divisions ordered longest first.
    pub fn divisions_by_length(&self) -> &[String] {
        &self.division_scan
    }

    pub fn is_state(&self, name: &str) -> bool {
        self.states.contains(&name.trim().to_lowercase())
    }

    pub fn is_division(&self, name: &str) -> bool {
        self.divisions.contains(&name.trim().to_lowercase())
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn stats(&self) -> GazetteerStats {
        GazetteerStats {
            states: self.states.len(),
            divisions: self.divisions.len(),
            aliases: self.aliases.len(),
            fallback: self.fallback,
        }
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::fallback()
    }
}


fn normalize_field(raw: &str) -> Option<String> {
    let value = raw.trim().to_lowercase();
    if REJECTED_VALUES.contains(&value.as_str()) {
        None
    } else {
        Some(value)
    }
}

fn scan_order(names: &BTreeSet<String>) -> Vec<String> {
    let mut ordered: Vec<String> = names.iter().cloned().collect();
    // BTreeSet iteration is already lexicographic and the sort is stable.
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));
    ordered
}

fn compile_aliases(table: &[(&str, AliasTarget)], states: &BTreeSet<String>) -> Vec<AliasEntry> {
    let mut entries = Vec::with_capacity(table.len());

    for (alias, target) in table {
        let Some(entry) = AliasEntry::new(alias, target.clone()) else {
            warn!("Ignoring unusable alias {:?}", alias);
            continue;
        };

        if let AliasTarget::State(state) = &entry.target {
            if !states.contains(state) {
                debug!("Dropping alias {:?}: unknown state {:?}", entry.alias, state);
                continue;
            }
        }

        entries.push(entry);
    }

    entries
}
