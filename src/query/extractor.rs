use tracing::debug;

use crate::gazetteer::{AliasTarget, Gazetteer};
use crate::recognizer::GeoRecognizer;

use super::models::EntitySet;


/// Resolves the entities mentioned in `text`.
///
/// Order is fixed: recognizer candidates, aliases, full state names, then
/// full division names. Divisions are only searched when no state matched.
///
/// At most one state is recorded. When several state aliases match
/// ("mp vs ap"), only the first in alias-table order is kept and the rest
/// are ignored; scheme aliases are all collected.
pub fn extract_entities(text: &str, gazetteer: &Gazetteer, recognizer: &dyn GeoRecognizer) -> EntitySet {
    let mut entities = EntitySet::default();

    if text.trim().is_empty() {
        return entities;
    }

    for span in recognizer.find_geographic_spans(text) {
        let span = span.trim().to_lowercase();
        if !span.is_empty() {
            entities.locations.push(span);
        }
    }

    let text_lower = text.to_lowercase();

    for entry in gazetteer.aliases() {
        if !entry.is_match(&text_lower) {
            continue;
        }

        match &entry.target {
            AliasTarget::Scheme(name) => {
                if !entities.schemes.contains(name) {
                    entities.schemes.push(name.clone());
                }
            }
            AliasTarget::State(name) => {
                if entities.states.is_empty() {
                    entities.states.push(name.clone());
                }
            }
        }
    }

    if entities.states.is_empty() {
        if let Some(state) = first_contained(gazetteer.states_by_length(), &text_lower) {
            entities.states.push(state.to_string());
        }
    }

    if entities.states.is_empty() {
        if let Some(division) = first_contained(gazetteer.divisions_by_length(), &text_lower) {
            entities.divisions.push(division.to_string());
        }
    }

    debug!(
        "Extracted entities: states={:?} divisions={:?} locations={:?} schemes={:?}",
        entities.states, entities.divisions, entities.locations, entities.schemes
    );

    entities
}

fn first_contained<'a>(names: &'a [String], text_lower: &str) -> Option<&'a str> {
    names
        .iter()
        .find(|name| text_lower.contains(name.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gazetteer::LocationRecord;
    use crate::recognizer::{HeuristicRecognizer, NoopRecognizer};

    fn gazetteer() -> Gazetteer {
        Gazetteer::build(vec![
            LocationRecord::new("Madhya Pradesh", "Bhopal"),
            LocationRecord::new("Madhya Pradesh", "Gwalior"),
            LocationRecord::new("Andhra Pradesh", "Guntur"),
            LocationRecord::new("Haryana", "Ambala"),
            LocationRecord::new("Andaman and Nicobar Islands", "Port Blair"),
        ])
    }

    #[test]
    fn test_full_state_name_any_case() {
        let gazetteer = gazetteer();
        for text in ["MADHYA PRADESH", "madhya pradesh", "Schemes in Madhya Pradesh please"] {
            let entities = extract_entities(text, &gazetteer, &NoopRecognizer);
            assert_eq!(entities.states, vec!["madhya pradesh"], "text: {text}");
            assert!(entities.divisions.is_empty());
        }
    }

    #[test]
    fn test_abbreviation() {
        let entities = extract_entities("MP", &gazetteer(), &NoopRecognizer);
        assert_eq!(entities.states, vec!["madhya pradesh"]);
    }

    #[test]
    fn test_abbreviation_requires_word_boundary() {
        let gazetteer = gazetteer();

        let entities = extract_entities("What is the impact of the camp?", &gazetteer, &NoopRecognizer);
        assert!(entities.states.is_empty());

        let entities = extract_entities("Impact of schemes in AP", &gazetteer, &NoopRecognizer);
        assert_eq!(entities.states, vec!["andhra pradesh"]);
    }

    #[test]
    fn test_scheme_aliases() {
        let entities = extract_entities("Compare SBM and JJM, then SBM again", &gazetteer(), &NoopRecognizer);
        assert_eq!(entities.schemes, vec!["swachh bharat mission", "jal jeevan mission"]);
    }

    #[test]
    fn test_state_suppresses_division() {
        let entities = extract_entities("Bhopal in Madhya Pradesh", &gazetteer(), &NoopRecognizer);
        assert_eq!(entities.states, vec!["madhya pradesh"]);
        assert!(entities.divisions.is_empty());
    }

    #[test]
    fn test_division_first_longest_only() {
        let entities = extract_entities("Show me schemes in Bhopal and Gwalior", &gazetteer(), &NoopRecognizer);
        assert_eq!(entities.divisions, vec!["gwalior"]);
    }

    #[test]
    fn test_longest_state_wins() {
        let gazetteer = Gazetteer::build(vec![
            LocationRecord::new("Goa", ""),
            LocationRecord::new("North Goa", ""),
        ]);
        let entities = extract_entities("budget for north goa", &gazetteer, &NoopRecognizer);
        assert_eq!(entities.states, vec!["north goa"]);
    }

    #[test]
    fn test_at_most_one_state_from_aliases() {
        let entities = extract_entities("mp vs ap vs hr", &gazetteer(), &NoopRecognizer);
        assert_eq!(entities.states, vec!["madhya pradesh"]);
    }

    #[test]
    fn test_andaman_variants_resolve_once() {
        let entities = extract_entities("Andaman and Nicobar Islands, A&N", &gazetteer(), &NoopRecognizer);
        assert_eq!(entities.states, vec!["andaman and nicobar islands"]);
    }

    #[test]
    fn test_recognizer_spans_lowercased() {
        let entities = extract_entities("Count schemes in Gwalior", &gazetteer(), &HeuristicRecognizer::new());
        assert_eq!(entities.locations, vec!["gwalior"]);
        assert_eq!(entities.divisions, vec!["gwalior"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let gazetteer = gazetteer();
        assert!(extract_entities("", &gazetteer, &HeuristicRecognizer::new()).is_empty());
        assert!(extract_entities("   \t", &gazetteer, &HeuristicRecognizer::new()).is_empty());
    }

    #[test]
    fn test_unknown_vocabulary() {
        let entities = extract_entities("xyz unknown location", &gazetteer(), &NoopRecognizer);
        assert!(entities.is_empty());
    }
}
