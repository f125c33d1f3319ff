#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Genre,
    Mood,
    Level,
}

/// The three user choices. An empty string means nothing is selected yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub genre: String,
    pub mood: String,
    pub level: String,
}

impl Selection {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Genre => &self.genre,
            Field::Mood => &self.mood,
            Field::Level => &self.level,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Genre => &mut self.genre,
            Field::Mood => &mut self.mood,
            Field::Level => &mut self.level,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.genre.is_empty() && !self.mood.is_empty() && !self.level.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetField { field: Field, value: String },
    FetchStart,
    FetchSuccess(String),
    FetchError(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendState {
    pub selection: Selection,
    pub responses: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

pub fn reduce(mut state: RecommendState, action: Action) -> RecommendState {
    match action {
        // A genre change keeps the current mood even if the new genre does not list it.
        Action::SetField { field, value } => *state.selection.slot(field) = value,
        Action::FetchStart => {
            state.loading = true;
            state.error = None;
        }
        Action::FetchSuccess(text) => {
            state.loading = false;
            state.responses.push(text);
        }
        Action::FetchError(message) => {
            state.loading = false;
            state.error = Some(message);
        }
    }
    state
}

#[derive(Debug, Default)]
pub struct Store {
    state: RecommendState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RecommendState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        self.state = reduce(std::mem::take(&mut self.state), action);
    }
}
