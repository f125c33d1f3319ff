use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Widget},
};

use crate::{ui::components::spinner::Spinner, util::colors};

pub const IDLE_LABEL: &str = "Get Recommendation";
pub const LOADING_LABEL: &str = "Loading...";

pub struct SubmitButton {
    loading: bool,
    focused: bool,
}

impl SubmitButton {
    pub fn new(loading: bool, focused: bool) -> Self {
        Self { loading, focused }
    }

    pub fn label(&self) -> &'static str {
        if self.loading { LOADING_LABEL } else { IDLE_LABEL }
    }

    pub fn is_disabled(&self) -> bool {
        self.loading
    }
}

impl Widget for SubmitButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = match (self.is_disabled(), self.focused) {
            (true, _) => Style::default().fg(colors::NEUTRAL),
            (false, true) => Style::default()
                .fg(colors::BACKGROUND)
                .bg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(colors::PRIMARY),
        };
        let border_color = if self.focused {
            colors::PRIMARY
        } else {
            colors::NEUTRAL
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.loading {
            Spinner::new()
                .with_style(style)
                .with_label(self.label())
                .render(inner, buf);
        } else {
            buf.set_style(inner, style);
            let width = self.label().len() as u16;
            let x = inner.x + inner.width.saturating_sub(width) / 2;
            buf.set_stringn(x, inner.y, self.label(), inner.width as usize, style);
        }
    }
}
