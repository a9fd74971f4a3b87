use lazy_static::lazy_static;
use regex::Regex;

use super::models::IntentLabel;

lazy_static! {
    // Priority order: the first group with any matching pattern wins.
    pub static ref INTENT_PATTERNS: Vec<(IntentLabel, Vec<&'static str>)> = vec![
        (IntentLabel::CountSchemes, vec![
            r"how many schemes?",
            r"count.*schemes?",
            r"number.*schemes?",
            r"total.*schemes?",
        ]),
        (IntentLabel::CostAnalysis, vec![
            r"cost.*year",
            r"expenditure.*year",
            r"budget.*year",
            r"spending.*year",
        ]),
        (IntentLabel::SchemeTypes, vec![
            r"scheme.*type",
            r"type.*scheme",
            r"categories.*scheme",
        ]),
        (IntentLabel::ProgressAnalysis, vec![
            r"progress",
            r"completion",
            r"status",
        ]),
    ];

    static ref COMPILED_PATTERNS: Vec<(IntentLabel, Vec<Regex>)> = INTENT_PATTERNS
        .iter()
        .map(|(intent, patterns)| {
            let compiled = patterns
                .iter()
                .filter_map(|pattern| Regex::new(pattern).ok())
                .collect();
            (*intent, compiled)
        })
        .collect();
}

pub const VISUALIZATION_KEYWORDS: &[&str] = &["visualize", "show", "chart", "graph"];


/// Expects lower-cased text.
pub fn detect_intent(text_lower: &str) -> Option<IntentLabel> {
    COMPILED_PATTERNS
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|regex| regex.is_match(text_lower)))
        .map(|(intent, _)| *intent)
}

pub fn wants_visualization(text_lower: &str) -> bool {
    VISUALIZATION_KEYWORDS
        .iter()
        .any(|keyword| text_lower.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for ((_, sources), (_, compiled)) in INTENT_PATTERNS.iter().zip(COMPILED_PATTERNS.iter()) {
            assert_eq!(sources.len(), compiled.len());
        }
    }

    #[test]
    fn test_detect_each_group() {
        assert_eq!(detect_intent("how many schemes are there?"), Some(IntentLabel::CountSchemes));
        assert_eq!(detect_intent("show cost by year"), Some(IntentLabel::CostAnalysis));
        assert_eq!(detect_intent("what are the scheme types?"), Some(IntentLabel::SchemeTypes));
        assert_eq!(detect_intent("show me the progress"), Some(IntentLabel::ProgressAnalysis));
        assert_eq!(detect_intent("tell me about water"), None);
    }

    #[test]
    fn test_group_priority() {
        // Matches both count and progress; count is checked first.
        assert_eq!(
            detect_intent("total schemes by completion status"),
            Some(IntentLabel::CountSchemes)
        );
    }

    #[test]
    fn test_visualization_keywords() {
        assert!(wants_visualization("visualize the data"));
        assert!(wants_visualization("draw a bar chart"));
        assert!(!wants_visualization("tell me about water"));
    }
}
