//! Status bar component
//!
//! One row under the page. It shows where the highlighted link leads, or
//! the last error, with the main key hints on the right.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{core::state::AppState, domain::text::truncate_to_width};

const KEY_HINTS: &str = "j/k scroll  1-4 jump  tab focus  enter open  q quit ";

/// Status bar component
///
/// Stateless; everything it shows comes from [`AppState`].
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let style = state.config.styles.get_or_default("status");
        let layout = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Min(0),
                Constraint::Length(KEY_HINTS.len() as u16),
            ],
        )
        .split(area);

        let message = truncate_to_width(&self.message(state), usize::from(layout[0].width));
        frame.render_widget(Paragraph::new(message).style(style), layout[0]);
        frame.render_widget(
            Paragraph::new(KEY_HINTS)
                .style(style)
                .alignment(Alignment::Right),
            layout[1],
        );
    }

    /// Error first, then the destination of the highlighted link.
    pub fn message(&self, state: &AppState) -> String {
        if let Some(message) = &state.system.status_message {
            return format!(" {message}");
        }
        state
            .highlighted_link()
            .and_then(|link| link.href())
            .map(|href| format!(" → {href}"))
            .unwrap_or_default()
    }
}
