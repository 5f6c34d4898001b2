use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};

/// External events before translation into domain messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMsg {
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,
    Key(KeyEvent),
    Mouse(MouseEvent),
    FocusLost,
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages from debug logging
    pub fn is_frequent(&self) -> bool {
        match self {
            RawMsg::Tick | RawMsg::Render => true,
            RawMsg::Mouse(mouse) => matches!(
                mouse.kind,
                MouseEventKind::Moved | MouseEventKind::Drag(_)
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton};

    use super::*;

    fn mouse(kind: MouseEventKind) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(mouse(MouseEventKind::Moved).is_frequent());
        assert!(!mouse(MouseEventKind::Down(MouseButton::Left)).is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Resize(80, 24).is_frequent());
    }
}
