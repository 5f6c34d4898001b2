use std::{sync::Arc, time::Instant};

use color_eyre::eyre::Result;
use ratatui::prelude::*;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    domain::document::{NAV_HEIGHT, STATUS_HEIGHT},
    infrastructure::tui,
    presentation::components::{NavComponent, PageComponent, StatusBarComponent},
};

#[derive(Debug, Default)]
pub struct Renderer {
    nav: NavComponent,
    page: PageComponent,
    status_bar: StatusBarComponent,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one frame with every animation sampled at `now`.
    pub async fn render(
        &mut self,
        tui: &Arc<Mutex<dyn tui::TuiLike + Send>>,
        state: &AppState,
        now: Instant,
    ) -> Result<()> {
        let mut guard = tui.lock().await;
        let mut draw = |f: &mut Frame<'_>| {
            let [nav, page, status] = Layout::vertical([
                Constraint::Length(NAV_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .areas(f.area());
            self.page.view(state, f, page, now);
            self.nav.view(state, f, nav, now);
            self.status_bar.view(state, f, status);
        };
        guard.draw(&mut draw)?;
        Ok(())
    }
}
