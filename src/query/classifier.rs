use super::models::{EntitySet, IntentLabel};
use super::patterns::{detect_intent, wants_visualization};


/// Scheme entities outrank every text pattern; pattern groups are tried in
/// priority order, then visualization keywords, then the general fallback.
pub fn classify_intent(text: &str, entities: &EntitySet) -> IntentLabel {
    if !entities.schemes.is_empty() {
        return IntentLabel::SchemeInfo;
    }

    let text_lower = text.to_lowercase();

    if let Some(intent) = detect_intent(&text_lower) {
        return intent;
    }

    if wants_visualization(&text_lower) {
        IntentLabel::Visualization
    } else {
        IntentLabel::GeneralQuery
    }
}
