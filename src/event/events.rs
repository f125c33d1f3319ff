#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RecommendationReady(String),
    RecommendationFailed(String),
}
