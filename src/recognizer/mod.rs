

mod heuristic;

pub use heuristic::HeuristicRecognizer;


/// Generic, vocabulary-free detection of place-like spans.
///
/// Results are advisory candidates only. Implementations must be pure
/// over their input so they can be shared across request threads.
pub trait GeoRecognizer: Send + Sync {

    fn backend_id(&self) -> &str;


    fn find_geographic_spans(&self, text: &str) -> Vec<String>;
}


#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecognizer;

impl GeoRecognizer for NoopRecognizer {
    fn backend_id(&self) -> &str {
        "noop"
    }

    fn find_geographic_spans(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }
}
