use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

pub struct SelectField<'a, S> {
    label: &'a str,
    placeholder: &'a str,
    options: &'a [S],
    value: &'a str,
    focused: bool,
}

impl<'a, S: AsRef<str>> SelectField<'a, S> {
    pub fn new(label: &'a str, placeholder: &'a str, options: &'a [S], value: &'a str) -> Self {
        Self {
            label,
            placeholder,
            options,
            value,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn position(&self) -> Option<usize> {
        if self.value.is_empty() {
            return None;
        }
        self.options.iter().position(|o| o.as_ref() == self.value)
    }

    pub fn next(&self) -> Option<&'a str> {
        let len = self.options.len();
        if len == 0 {
            return None;
        }
        let options: &'a [S] = self.options;
        let index = self.position().map_or(0, |i| (i + 1) % len);
        Some(options[index].as_ref())
    }

    pub fn previous(&self) -> Option<&'a str> {
        let len = self.options.len();
        if len == 0 {
            return None;
        }
        let options: &'a [S] = self.options;
        let index = self.position().map_or(len - 1, |i| (i + len - 1) % len);
        Some(options[index].as_ref())
    }
}

impl<S: AsRef<str>> Widget for SelectField<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.label),
                border_style.add_modifier(Modifier::BOLD),
            ));

        let mut spans = Vec::new();
        if self.focused && !self.options.is_empty() {
            spans.push(Span::styled("‹ ", Style::default().fg(colors::SECONDARY)));
        }
        if self.value.is_empty() {
            spans.push(Span::styled(
                self.placeholder,
                Style::default()
                    .fg(colors::NEUTRAL)
                    .add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::styled(self.value, Style::default().fg(colors::TEXT)));
        }
        if self.focused && !self.options.is_empty() {
            spans.push(Span::styled(" ›", Style::default().fg(colors::SECONDARY)));
        }
        if let Some(index) = self.position() {
            spans.push(Span::styled(
                format!("  {}/{}", index + 1, self.options.len()),
                Style::default().fg(colors::NEUTRAL),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::app::testing::buffer_text;

    const LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Expert"];

    #[test]
    fn cycles_forward_and_back() {
        let field = SelectField::new("Level", "Please select a level", &LEVELS, "");
        assert_eq!(field.next(), Some("Beginner"));
        assert_eq!(field.previous(), Some("Expert"));

        let field = SelectField::new("Level", "Please select a level", &LEVELS, "Expert");
        assert_eq!(field.next(), Some("Beginner"));
        assert_eq!(field.previous(), Some("Intermediate"));
    }

    #[test]
    fn stale_value_restarts_from_the_ends() {
        let moods = vec!["Epic".to_string(), "Dark".to_string()];
        let field = SelectField::new("Mood", "Please select a mood", &moods, "Curious");
        assert_eq!(field.next(), Some("Epic"));
        assert_eq!(field.previous(), Some("Dark"));
    }

    #[test]
    fn empty_options_emit_nothing() {
        let moods: Vec<String> = Vec::new();
        let field = SelectField::new("Mood", "Please select a mood", &moods, "");
        assert_eq!(field.next(), None);
        assert_eq!(field.previous(), None);
    }

    #[test]
    fn renders_placeholder_until_chosen() {
        let area = Rect::new(0, 0, 40, 3);

        let mut buf = Buffer::empty(area);
        SelectField::new("Level", "Please select a level", &LEVELS, "").render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Level"));
        assert!(text.contains("Please select a level"));

        let mut buf = Buffer::empty(area);
        SelectField::new("Level", "Please select a level", &LEVELS, "Intermediate")
            .focused(true)
            .render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("‹ Intermediate ›  2/3"), "{text}");
        assert!(!text.contains("Please select"));
    }
}
