//! Page component
//!
//! Draws the scrolled document into the viewport, every block at its
//! current reveal state.

use std::time::Instant;

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::widgets::{BlockView, ViewContext},
};

#[derive(Debug, Clone, Default)]
pub struct PageComponent;

impl PageComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect, now: Instant) {
        let page = &state.page;
        let ctx = ViewContext {
            styles: &state.config.styles,
            pointer: &state.pointer,
            focus: page.focus,
        };
        let scroll = i32::from(page.viewport.scroll);

        for block in &page.document.blocks {
            let view = BlockView::new(&block.lines, ctx)
                .target(block.target)
                .visual(page.block_visual(block, now))
                .position(block.area.x, i32::from(block.area.y) - scroll);
            if !view.is_hidden() {
                frame.render_widget(view, area);
            }
        }
    }
}
