use std::collections::BTreeSet;

use crate::recommend::state::Field;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Genre,
    Mood,
    Level,
    Button,
    Entries,
}

impl Focus {
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Genre => Some(Field::Genre),
            Focus::Mood => Some(Field::Mood),
            Focus::Level => Some(Field::Level),
            Focus::Button | Focus::Entries => None,
        }
    }

    pub fn next(self, has_entries: bool) -> Self {
        match self {
            Focus::Genre => Focus::Mood,
            Focus::Mood => Focus::Level,
            Focus::Level => Focus::Button,
            Focus::Button if has_entries => Focus::Entries,
            Focus::Button | Focus::Entries => Focus::Genre,
        }
    }

    pub fn previous(self, has_entries: bool) -> Self {
        match self {
            Focus::Genre if has_entries => Focus::Entries,
            Focus::Genre => Focus::Button,
            Focus::Mood => Focus::Genre,
            Focus::Level => Focus::Mood,
            Focus::Button => Focus::Level,
            Focus::Entries => Focus::Button,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    pub cursor: usize,
    pub expanded: BTreeSet<usize>,
}

impl UiState {
    pub fn toggle(&mut self, index: usize) {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
    }

    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }
}
