

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use super::GeoRecognizer;

lazy_static! {
    // A locative preposition followed by a run of capitalised words.
    static ref LOCATIVE_SPAN: Option<Regex> = Regex::new(
        r"\b(?i:in|at|for|from|near|across|within)\s+([A-Z][A-Za-z'.-]*(?:\s+[A-Z][A-Za-z'.-]*)*)"
    )
    .ok();
}


#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicRecognizer;

impl HeuristicRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl GeoRecognizer for HeuristicRecognizer {
    fn backend_id(&self) -> &str {
        "heuristic"
    }

    fn find_geographic_spans(&self, text: &str) -> Vec<String> {
        let Some(pattern) = LOCATIVE_SPAN.as_ref() else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut spans = Vec::new();

        for capture in pattern.captures_iter(text) {
            let Some(span) = capture.get(1) else {
                continue;
            };
            let span = span.as_str().trim_end_matches(['.', '\'', '-']);
            if !span.is_empty() && seen.insert(span.to_string()) {
                spans.push(span.to_string());
            }
        }

        spans
    }
}
