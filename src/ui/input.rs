use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Esc, _) => Some(AppMessage::Quit),
            (KeyCode::Tab, _) => Some(AppMessage::FocusNext),
            (KeyCode::BackTab, _) => Some(AppMessage::FocusPrevious),
            (KeyCode::Right, _) => Some(AppMessage::NextOption),
            (KeyCode::Char('l'), _) => Some(AppMessage::NextOption),
            (KeyCode::Left, _) => Some(AppMessage::PreviousOption),
            (KeyCode::Char('h'), _) => Some(AppMessage::PreviousOption),
            (KeyCode::Down, _) => Some(AppMessage::CursorDown),
            (KeyCode::Char('j'), _) => Some(AppMessage::CursorDown),
            (KeyCode::Up, _) => Some(AppMessage::CursorUp),
            (KeyCode::Char('k'), _) => Some(AppMessage::CursorUp),
            (KeyCode::Enter, _) => Some(AppMessage::Activate),
            (KeyCode::Char(' '), _) => Some(AppMessage::Activate),
            _ => None,
        }
    }
}
