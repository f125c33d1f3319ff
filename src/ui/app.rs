use std::sync::Arc;

use flume::Receiver;
use ratatui::Frame;
use tracing::debug;

use crate::{
    config::AppConfig,
    event::events::Event,
    http::{CompletionApi, GeminiClient},
    recommend::{
        fetcher::Recommender,
        state::{Action, Field, Store},
    },
    store::options::OptionStore,
    ui::{
        components::select::SelectField,
        message::AppMessage,
        state::{Focus, UiState},
    },
    util::task::{RECOMMENDATION_TASK, TaskManager},
};

use super::{
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub store: Store,
    pub options: OptionStore,
    pub recommender: Recommender,
    pub tasks: TaskManager,
    pub ui: UiState,
    pub event_rx: Receiver<Event>,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let api = Arc::new(GeminiClient::new(&config));
        let options = OptionStore::builtin()?;
        Ok(Self::with_api(api, options))
    }

    pub fn with_api(api: Arc<dyn CompletionApi>, options: OptionStore) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            store: Store::new(),
            options,
            recommender: Recommender::new(api, event_tx),
            tasks: TaskManager::new(),
            ui: UiState::default(),
            event_rx,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        let mut should_render = EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            if should_render {
                tui.draw(|f| {
                    self.ui(f);
                })?;
            }

            should_render = EventHandler::handle_events(self, &mut tui).await?;
        }

        self.tasks.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }

    pub fn select_field(&self, field: Field) -> SelectField<'_, String> {
        let selection = &self.store.state().selection;
        let (label, placeholder, options) = match field {
            Field::Genre => ("Genre", "Please select a genre", self.options.genres()),
            Field::Mood => (
                "Mood",
                "Please select a mood",
                self.options.moods_for(&selection.genre),
            ),
            Field::Level => ("Level", "Please select a level", self.options.levels()),
        };
        SelectField::new(label, placeholder, options, selection.get(field))
            .focused(self.ui.focus.field() == Some(field))
    }

    fn has_entries(&self) -> bool {
        !self.store.state().responses.is_empty()
    }

    pub fn update(&mut self, msg: AppMessage) {
        debug!(?msg, focus = ?self.ui.focus, "update");
        let entries = self.store.state().responses.len();

        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::FocusNext => self.ui.focus = self.ui.focus.next(self.has_entries()),
            AppMessage::FocusPrevious => {
                self.ui.focus = self.ui.focus.previous(self.has_entries())
            }
            AppMessage::NextOption | AppMessage::PreviousOption => {
                if let Some(field) = self.ui.focus.field() {
                    self.cycle(field, msg == AppMessage::NextOption);
                }
            }
            AppMessage::CursorDown if self.ui.focus == Focus::Entries => {
                self.ui.move_cursor(1, entries)
            }
            AppMessage::CursorUp if self.ui.focus == Focus::Entries => {
                self.ui.move_cursor(-1, entries)
            }
            AppMessage::CursorDown => self.update(AppMessage::NextOption),
            AppMessage::CursorUp => self.update(AppMessage::PreviousOption),
            AppMessage::Activate => match self.ui.focus {
                Focus::Button => self.submit(),
                Focus::Entries if entries > 0 => self.ui.toggle(self.ui.cursor),
                _ => {}
            },
        }
    }

    fn cycle(&mut self, field: Field, forward: bool) {
        let control = self.select_field(field);
        let value = if forward {
            control.next()
        } else {
            control.previous()
        };
        if let Some(value) = value.map(str::to_string) {
            self.store.dispatch(Action::SetField { field, value });
        }
    }

    pub fn submit(&mut self) {
        if self.store.state().loading {
            return;
        }
        if let Some(handle) = self.recommender.request(&mut self.store) {
            self.tasks.track(RECOMMENDATION_TASK, handle);
        }
    }

    pub fn apply(&mut self, event: Event) {
        self.store.dispatch(event.into());
        let entries = self.store.state().responses.len();
        if entries > 0 {
            self.ui.cursor = entries - 1;
        }
    }
}
