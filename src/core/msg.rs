pub mod page;
pub mod pointer;
pub mod system;

use page::PageMsg;
use pointer::PointerMsg;
use system::SystemMsg;

/// Domain messages representing what the reader asked the page to do.
/// These are processed by the update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // Process and terminal lifecycle (delegated to SystemState)
    System(SystemMsg),

    // Document, scroll and reveals (delegated to PageState)
    Page(PageMsg),

    // Hover and press (delegated to PointerState)
    Pointer(PointerMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Pointer(PointerMsg::Moved { .. }))
    }
}
