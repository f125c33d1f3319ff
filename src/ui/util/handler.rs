use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use tracing::info;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        if Self::drain_app_events(app) {
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => info!("Terminal ready"),
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Tick => return Ok(app.has_focus),
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    pub fn drain_app_events(app: &mut App) -> bool {
        let mut received = false;
        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            received = true;
        }
        received
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match &evt {
            Event::RecommendationReady(_) => {
                info!(count = app.store.state().responses.len() + 1, "Recommendation stored")
            }
            Event::RecommendationFailed(message) => info!("Recommendation failed: {}", message),
        }
        app.apply(evt);
    }

    pub fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind == KeyEventKind::Press {
            if let Some(msg) = InputHandler::handle_key(evt) {
                app.update(msg);
            }
        }
    }
}
