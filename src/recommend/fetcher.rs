use std::sync::Arc;

use flume::Sender;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    event::events::Event,
    http::CompletionApi,
    recommend::state::{Action, Selection, Store},
};

pub const FALLBACK_TEXT: &str = "No recommendation returned.";
pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch recommendations";

pub fn build_prompt(selection: &Selection) -> Option<String> {
    if !selection.is_complete() {
        return None;
    }
    let Selection {
        genre,
        mood,
        level,
    } = selection;
    Some(format!(
        "Recommend 6 books for a {level} {genre} reader feeling {mood}. Explain why."
    ))
}

/// Runs one request and reports its outcome as the event that completes it.
pub async fn fetch_event(api: &dyn CompletionApi, prompt: &str) -> Event {
    match api.generate(prompt).await {
        Ok(response) => {
            let text = response
                .first_text()
                .filter(|text| !text.is_empty())
                .unwrap_or(FALLBACK_TEXT);
            Event::RecommendationReady(text.to_string())
        }
        Err(e) => {
            warn!("Failed to fetch recommendation: {}", e);
            Event::RecommendationFailed(FETCH_ERROR_MESSAGE.to_string())
        }
    }
}

impl From<Event> for Action {
    fn from(event: Event) -> Self {
        match event {
            Event::RecommendationReady(text) => Action::FetchSuccess(text),
            Event::RecommendationFailed(message) => Action::FetchError(message),
        }
    }
}

pub struct Recommender {
    api: Arc<dyn CompletionApi>,
    tx: Sender<Event>,
}

impl Recommender {
    pub fn new(api: Arc<dyn CompletionApi>, tx: Sender<Event>) -> Self {
        Self { api, tx }
    }

    /// No-op while the selection is incomplete or a request is already in flight.
    pub fn request(&self, store: &mut Store) -> Option<JoinHandle<()>> {
        let state = store.state();
        if state.loading {
            info!("Recommendation already in flight, ignoring request");
            return None;
        }
        let prompt = build_prompt(&state.selection)?;

        store.dispatch(Action::FetchStart);

        let api = self.api.clone();
        let tx = self.tx.clone();
        Some(tokio::spawn(async move {
            let event = fetch_event(api.as_ref(), &prompt).await;
            if let Event::RecommendationReady(_) = event {
                info!("New recommendation received");
            }
            let _ = tx.send_async(event).await;
        }))
    }
}
