/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Status management
    ShowError(String),
    ClearStatusMessage,
}
