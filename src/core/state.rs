pub mod page;
pub mod pointer;
pub mod system;

use crate::{domain::element::ElementId, infrastructure::config::Config};
use page::PageState;
use pointer::PointerState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub system: SystemState,
    pub page: PageState,
    pub pointer: PointerState,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Link the status bar describes: the one under the pointer, otherwise
    /// the focused one.
    pub fn highlighted_link(&self) -> Option<ElementId> {
        self.pointer.hovered_link().or(self.page.focus)
    }
}
