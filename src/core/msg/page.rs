use crate::domain::element::Section;

/// Messages specific to PageState
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMsg {
    /// Lays the page out for a terminal of this size and fires mount reveals.
    Mount { width: u16, height: u16 },
    Resize { width: u16, height: u16 },

    // Scrolling, in document rows
    ScrollBy(i32),
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    JumpTo(Section),

    // Keyboard focus over links
    FocusNext,
    FocusPrev,
    Activate,
}
