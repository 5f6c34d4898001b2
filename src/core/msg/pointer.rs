/// Messages specific to PointerState, in screen cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMsg {
    Moved { column: u16, row: u16 },
    Pressed { column: u16, row: u16 },
    Released { column: u16, row: u16 },
    /// The pointer left the terminal.
    Left,
}
