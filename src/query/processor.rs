use std::sync::Arc;

use tracing::debug;

use crate::core::config::NluConfig;
use crate::gazetteer::Gazetteer;
use crate::recognizer::{GeoRecognizer, HeuristicRecognizer, NoopRecognizer};

use super::classifier::classify_intent;
use super::extractor::extract_entities;
use super::filter::{FilterColumns, LocationFilter, LocationFilterBuilder};
use super::models::{EntitySet, IntentLabel, ParsedQuery};


/// Text → entities → intent → location filter.
///
/// Holds only read-only state, so one instance can serve any number of
/// threads without locking.
#[derive(Clone)]
pub struct QueryProcessor {
    gazetteer: Arc<Gazetteer>,
    recognizer: Arc<dyn GeoRecognizer>,
    filter_builder: LocationFilterBuilder,
}

impl QueryProcessor {
    pub fn new(
        gazetteer: Arc<Gazetteer>,
        recognizer: Arc<dyn GeoRecognizer>,
        columns: FilterColumns,
    ) -> Self {
        Self {
            gazetteer,
            recognizer,
            filter_builder: LocationFilterBuilder::new(columns),
        }
    }

    pub fn from_config(config: &NluConfig) -> Self {
        let gazetteer = match &config.locations_csv {
            Some(path) => Gazetteer::from_csv(path),
            None => Gazetteer::fallback(),
        };

        let recognizer: Arc<dyn GeoRecognizer> = if config.use_recognizer {
            Arc::new(HeuristicRecognizer::new())
        } else {
            Arc::new(NoopRecognizer)
        };

        Self::new(
            Arc::new(gazetteer),
            recognizer,
            FilterColumns::new(config.state_column.clone(), config.division_column.clone()),
        )
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn recognizer(&self) -> &dyn GeoRecognizer {
        self.recognizer.as_ref()
    }

    pub fn extract_entities(&self, text: &str) -> EntitySet {
        extract_entities(text, &self.gazetteer, self.recognizer.as_ref())
    }

    pub fn classify_intent(&self, text: &str, entities: &EntitySet) -> IntentLabel {
        classify_intent(text, entities)
    }


    pub fn parse_query(&self, text: &str) -> ParsedQuery {
        let entities = self.extract_entities(text);
        let intent = self.classify_intent(text, &entities);

        debug!("Parsed query {:?} as {}", text, intent);

        ParsedQuery {
            intent,
            entities,
            original_text: text.to_string(),
        }
    }

    pub fn build_location_filter(&self, entities: &EntitySet) -> LocationFilter {
        self.filter_builder.build(entities, &self.gazetteer)
    }
}

impl Default for QueryProcessor {
    fn default() -> Self {
        Self::from_config(&NluConfig::default())
    }
}

impl std::fmt::Debug for QueryProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryProcessor")
            .field("gazetteer", &self.gazetteer.stats())
            .field("recognizer", &self.recognizer.backend_id())
            .field("columns", self.filter_builder.columns())
            .finish()
    }
}
