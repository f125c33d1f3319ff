use std::collections::BTreeSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

const INDENT: &str = "    ";

/// Greedy word wrap by display width. Blank source lines are kept so
/// paragraphs in the returned text stay separated.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for source in text.lines() {
        let mut current = String::new();
        for word in source.split_whitespace() {
            let needed = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

pub struct RecommendationList<'a> {
    entries: &'a [String],
    expanded: &'a BTreeSet<usize>,
    cursor: Option<usize>,
}

impl<'a> RecommendationList<'a> {
    pub fn new(entries: &'a [String], expanded: &'a BTreeSet<usize>) -> Self {
        Self {
            entries,
            expanded,
            cursor: None,
        }
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    fn lines(&self, width: usize) -> (Vec<Line<'a>>, usize) {
        let mut lines = Vec::new();
        let mut cursor_line = 0;

        for (index, entry) in self.entries.iter().enumerate() {
            let open = self.expanded.contains(&index);
            let selected = self.cursor == Some(index);
            if selected {
                cursor_line = lines.len();
            }

            let marker = if open { "▾" } else { "▸" };
            let style = if selected {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::TEXT)
            };
            lines.push(Line::from(Span::styled(
                format!("{} Recommendation {}", marker, index + 1),
                style,
            )));

            if open {
                for row in wrap(entry, width.saturating_sub(INDENT.len())) {
                    lines.push(Line::from(Span::styled(
                        format!("{INDENT}{row}"),
                        Style::default().fg(colors::TEXT),
                    )));
                }
                lines.push(Line::default());
            }
        }

        (lines, cursor_line)
    }
}

impl Widget for RecommendationList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (lines, cursor_line) = self.lines(area.width as usize);
        let offset = if cursor_line < area.height as usize {
            0
        } else {
            cursor_line
        };

        Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::app::testing::buffer_text;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("one two three four", 9),
            ["one two", "three", "four"]
        );
        assert_eq!(wrap("a\n\nb", 10), ["a", "", "b"]);
        assert_eq!(wrap("unbreakableword", 4), ["unbreakableword"]);
    }

    #[test]
    fn entries_start_collapsed() {
        let entries = vec!["Try Dune.".to_string(), "Try Foundation.".to_string()];
        let expanded = BTreeSet::new();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);

        RecommendationList::new(&entries, &expanded).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("▸ Recommendation 1"));
        assert!(text.contains("▸ Recommendation 2"));
        assert!(!text.contains("Try Dune."));
    }

    #[test]
    fn expanded_entry_shows_text() {
        let entries = vec!["Try Dune.".to_string(), "Try Foundation.".to_string()];
        let expanded = BTreeSet::from([1]);
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        RecommendationList::new(&entries, &expanded)
            .cursor(Some(1))
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("▾ Recommendation 2"));
        assert!(text.contains("    Try Foundation."));
        assert!(!text.contains("Try Dune."));
    }

    #[test]
    fn scrolls_to_a_far_cursor() {
        let entries: Vec<String> = (0..10).map(|i| format!("entry {i}")).collect();
        let expanded = BTreeSet::new();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        RecommendationList::new(&entries, &expanded)
            .cursor(Some(8))
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.starts_with("▸ Recommendation 9"), "{text}");
        assert!(!text.contains("Recommendation 1 "));
    }
}
