

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum AliasTarget {
    State(String),
    Scheme(String),
}

impl AliasTarget {
    pub fn name(&self) -> &str {
        match self {
            Self::State(name) | Self::Scheme(name) => name,
        }
    }
}

lazy_static! {
    // Scanned in declaration order.
    pub static ref DEFAULT_ALIASES: Vec<(&'static str, AliasTarget)> = vec![
        ("mp", AliasTarget::State("madhya pradesh".to_string())),
        ("ap", AliasTarget::State("andhra pradesh".to_string())),
        ("hr", AliasTarget::State("haryana".to_string())),
        ("a&n", AliasTarget::State("andaman and nicobar islands".to_string())),
        ("andaman", AliasTarget::State("andaman and nicobar islands".to_string())),
        ("nicobar", AliasTarget::State("andaman and nicobar islands".to_string())),
        ("sbm", AliasTarget::Scheme("swachh bharat mission".to_string())),
        ("jjm", AliasTarget::Scheme("jal jeevan mission".to_string())),
    ];
}


#[derive(Debug, Clone)]
pub struct AliasEntry {
    pub alias: String,
    pub target: AliasTarget,
    pattern: Regex,
}

impl AliasEntry {
    /// `None` when the alias is blank or cannot be turned into a pattern.
    pub fn new(alias: &str, target: AliasTarget) -> Option<Self> {
        let alias = alias.trim().to_lowercase();
        if alias.is_empty() {
            return None;
        }

        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&alias))).ok()?;
        let target = match target {
            AliasTarget::State(name) => AliasTarget::State(name.trim().to_lowercase()),
            AliasTarget::Scheme(name) => AliasTarget::Scheme(name.trim().to_lowercase()),
        };

        Some(Self { alias, target, pattern })
    }

    /// Expects already lower-cased text.
    pub fn is_match(&self, text_lower: &str) -> bool {
        self.pattern.is_match(text_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_boundary_match() {
        let entry = AliasEntry::new("mp", AliasTarget::State("madhya pradesh".to_string())).unwrap();
        assert!(entry.is_match("schemes in mp"));
        assert!(entry.is_match("mp?"));
        assert!(!entry.is_match("completion of the camp"));
        assert!(!entry.is_match("impact"));
    }

    #[test]
    fn test_ampersand_alias() {
        let entry = AliasEntry::new("A&N", AliasTarget::State("andaman and nicobar islands".to_string())).unwrap();
        assert_eq!(entry.alias, "a&n");
        assert!(entry.is_match("projects in a&n islands"));
    }

    #[test]
    fn test_blank_alias_rejected() {
        assert!(AliasEntry::new("  ", AliasTarget::Scheme("x".to_string())).is_none());
    }

    #[test]
    fn test_target_normalized() {
        let entry = AliasEntry::new("jjm", AliasTarget::Scheme(" Jal Jeevan Mission ".to_string())).unwrap();
        assert_eq!(entry.target, AliasTarget::Scheme("jal jeevan mission".to_string()));
        assert_eq!(entry.target.name(), "jal jeevan mission");
    }

    #[test]
    fn test_default_table_targets_are_lowercase() {
        for (alias, target) in DEFAULT_ALIASES.iter() {
            assert_eq!(*alias, alias.to_lowercase());
            assert_eq!(target.name(), target.name().to_lowercase());
        }
    }
}
