use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::{
    recommend::state::Field,
    ui::{
        app::App,
        components::{button::SubmitButton, recommendations::RecommendationList},
        state::Focus,
    },
    util::colors,
};

const HELP: &str = "tab focus · ←/→ choose · ↑/↓ move · enter select · q quit";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let frame = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title_top(Line::from(" Book Mood ").style(Style::default().fg(colors::PRIMARY)))
            .title_alignment(Alignment::Center);
        let inner = frame.inner(area);
        frame.render(area, buf);

        let [genre, mood, level, button, error, list, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.select_field(Field::Genre).render(genre, buf);
        self.select_field(Field::Mood).render(mood, buf);
        self.select_field(Field::Level).render(level, buf);

        let state = self.store.state();
        let [button] = Layout::horizontal([Constraint::Length(26)])
            .flex(ratatui::layout::Flex::Center)
            .areas(button);
        SubmitButton::new(state.loading, self.ui.focus == Focus::Button).render(button, buf);

        if let Some(message) = &state.error {
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default()
                    .fg(colors::ERROR)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .render(error, buf);
        }

        let cursor = (self.ui.focus == Focus::Entries).then_some(self.ui.cursor);
        RecommendationList::new(&state.responses, &self.ui.expanded)
            .cursor(cursor)
            .render(list, buf);

        Paragraph::new(Span::styled(HELP, Style::default().fg(colors::NEUTRAL)))
            .alignment(Alignment::Center)
            .render(help, buf);
    }
}


#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::{testing::buffer_text, *};
    use crate::{
        http::{CompletionApi, error::ApiError, model::GenerateResponse},
        recommend::{fetcher::FETCH_ERROR_MESSAGE, state::Action},
        store::options::OptionStore,
    };

    struct NoApi;

    #[async_trait]
    impl CompletionApi for NoApi {
        async fn generate(&self, _prompt: &str) -> Result<GenerateResponse, ApiError> {
            Ok(GenerateResponse::default())
        }
    }

    fn render(app: &App) -> String {
        let area = Rect::new(0, 0, 70, 30);
        let mut buf = Buffer::empty(area);
        app.render(area, &mut buf);
        buffer_text(&buf)
    }

    fn app() -> App {
        App::with_api(Arc::new(NoApi), OptionStore::builtin().unwrap())
    }

    #[test]
    fn fresh_form_shows_placeholders_and_button() {
        let text = render(&app());
        assert!(text.contains("Please select a genre"));
        assert!(text.contains("Please select a mood"));
        assert!(text.contains("Please select a level"));
        assert!(text.contains("Get Recommendation"));
        assert!(!text.contains("Recommendation 1"));
    }

    #[test]
    fn loading_and_error_states_render() {
        let mut app = app();
        app.store.dispatch(Action::FetchStart);
        let text = render(&app);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Get Recommendation"));

        app.store
            .dispatch(Action::FetchError(FETCH_ERROR_MESSAGE.to_string()));
        let text = render(&app);
        assert!(text.contains("Failed to fetch recommendations"));
        assert!(text.contains("Get Recommendation"));
    }

    #[test]
    fn responses_render_as_numbered_entries() {
        let mut app = app();
        app.store.dispatch(Action::FetchSuccess("Try Dune.".into()));
        app.store.dispatch(Action::FetchSuccess("Try Hyperion.".into()));
        app.ui.expanded.insert(1);

        let text = render(&app);
        assert!(text.contains("Recommendation 1"));
        assert!(text.contains("Recommendation 2"));
        assert!(text.contains("Try Hyperion."));
        assert!(!text.contains("Try Dune."));
    }
}
