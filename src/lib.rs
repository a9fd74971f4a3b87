

pub mod core;
pub mod gazetteer;
pub mod query;
pub mod recognizer;

pub use crate::core::config::NluConfig;
pub use crate::core::error::{NluError, Result};
pub use gazetteer::{AliasTarget, Gazetteer, LocationRecord};
pub use query::{
    AggregateKind, AggregatePlan, EntitySet, IntentLabel, LocationFilter, ParsedQuery,
    QueryProcessor,
};
pub use recognizer::{GeoRecognizer, HeuristicRecognizer, NoopRecognizer};

use lazy_static::lazy_static;

lazy_static! {
    // Built on first use from the environment and never mutated afterwards.
    static ref SHARED_PROCESSOR: QueryProcessor = QueryProcessor::from_config(&NluConfig::from_env());
}


pub fn shared_processor() -> &'static QueryProcessor {
    &SHARED_PROCESSOR
}


pub fn parse_query(text: &str) -> ParsedQuery {
    SHARED_PROCESSOR.parse_query(text)
}


pub fn build_location_filter(entities: &EntitySet) -> LocationFilter {
    SHARED_PROCESSOR.build_location_filter(entities)
}
