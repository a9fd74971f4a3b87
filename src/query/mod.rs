

pub mod classifier;
pub mod extractor;
pub mod filter;
pub mod models;
pub mod patterns;
pub mod planner;
pub mod processor;

pub use classifier::classify_intent;
pub use extractor::extract_entities;
pub use filter::{FilterColumns, LocationFilter, LocationFilterBuilder};
pub use models::{EntitySet, IntentLabel, ParsedQuery};
pub use patterns::{INTENT_PATTERNS, VISUALIZATION_KEYWORDS, detect_intent};
pub use planner::{AggregateKind, AggregatePlan, plan_aggregate, should_visualize};
pub use processor::QueryProcessor;
