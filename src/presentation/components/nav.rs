//! Navigation bar component
//!
//! The fixed bar above the page. It slides down from above the screen once
//! at mount and stays put while the page scrolls underneath.

use std::time::Instant;

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    domain::element::ElementId,
    presentation::widgets::{BlockView, ViewContext},
};

#[derive(Debug, Clone, Default)]
pub struct NavComponent;

impl NavComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect, now: Instant) {
        let ctx = ViewContext {
            styles: &state.config.styles,
            pointer: &state.pointer,
            focus: state.page.focus,
        };
        let nav = BlockView::new(&state.page.nav, ctx)
            .visual(state.page.visual_of(ElementId::Nav, now));
        frame.render_widget(nav, area);
    }
}
