use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
    Serialize, Deserialize, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IntentLabel {
    CountSchemes,
    CostAnalysis,
    SchemeTypes,
    ProgressAnalysis,
    SchemeInfo,
    Visualization,
    #[default]
    GeneralQuery,
}

impl IntentLabel {
    /// Intents answered from aggregate data rather than documents.
    pub fn is_data_intent(&self) -> bool {
        matches!(
            self,
            Self::CountSchemes | Self::CostAnalysis | Self::SchemeTypes | Self::ProgressAnalysis
        )
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}


/// Entities recognised in one query.
///
/// `states` and `divisions` hold at most one value each and are never both
/// populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    pub states: Vec<String>,
    pub divisions: Vec<String>,
    pub locations: Vec<String>,
    pub schemes: Vec<String>,
}

impl EntitySet {
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
            && self.divisions.is_empty()
            && self.locations.is_empty()
            && self.schemes.is_empty()
    }

    pub fn has_location(&self) -> bool {
        !self.states.is_empty() || !self.divisions.is_empty()
    }

    pub fn state(&self) -> Option<&str> {
        self.states.first().map(String::as_str)
    }

    pub fn division(&self) -> Option<&str> {
        self.divisions.first().map(String::as_str)
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub intent: IntentLabel,
    pub entities: EntitySet,
    pub original_text: String,
}

impl ParsedQuery {
    pub fn empty(text: &str) -> Self {
        Self {
            intent: IntentLabel::GeneralQuery,
            entities: EntitySet::default(),
            original_text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_intent_names() {
        assert_eq!(IntentLabel::CountSchemes.as_str(), "count_schemes");
        assert_eq!(IntentLabel::ProgressAnalysis.to_string(), "progress_analysis");
        assert_eq!(IntentLabel::from_str("scheme_info").unwrap(), IntentLabel::SchemeInfo);
        assert!(IntentLabel::from_str("unknown").is_err());
        assert_eq!(IntentLabel::iter().count(), 7);
    }

    #[test]
    fn test_intent_serde() {
        let json = serde_json::to_string(&IntentLabel::CostAnalysis).unwrap();
        assert_eq!(json, "\"cost_analysis\"");
    }

    #[test]
    fn test_data_intents() {
        let data: Vec<_> = IntentLabel::iter().filter(IntentLabel::is_data_intent).collect();
        assert_eq!(
            data,
            vec![
                IntentLabel::CountSchemes,
                IntentLabel::CostAnalysis,
                IntentLabel::SchemeTypes,
                IntentLabel::ProgressAnalysis,
            ]
        );
    }

    #[test]
    fn test_empty_parsed_query() {
        let parsed = ParsedQuery::empty("  ");
        assert_eq!(parsed.intent, IntentLabel::GeneralQuery);
        assert!(parsed.entities.is_empty());
        assert_eq!(parsed.original_text, "  ");
    }
}
