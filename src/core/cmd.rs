/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects requested by the update function
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Open an outbound URL in a new browsing context.
    OpenLink { href: String },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; coalesced by the runner
    RequestRender,

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            Cmd::Tui(..) | Cmd::RequestRender => 0,
            Cmd::OpenLink { .. } => 1,
            Cmd::Batch(cmds) => cmds.iter().map(Cmd::priority).min().unwrap_or(255),
            Cmd::None => 255,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cmd::OpenLink { .. } => "OpenLink",
            Cmd::Tui(..) => "Tui",
            Cmd::RequestRender => "RequestRender",
            Cmd::Batch(..) => "Batch",
            Cmd::None => "None",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open(href: &str) -> Cmd {
        Cmd::OpenLink {
            href: href.to_string(),
        }
    }

    #[test]
    fn test_batch() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::RequestRender]), Cmd::RequestRender);
        assert_eq!(
            Cmd::batch(vec![Cmd::RequestRender, open("https://a")]),
            Cmd::Batch(vec![Cmd::RequestRender, open("https://a")])
        );
    }

    #[test]
    fn test_priority() {
        assert_eq!(Cmd::RequestRender.priority(), 0);
        assert_eq!(open("https://a").priority(), 1);
        assert_eq!(
            Cmd::Batch(vec![open("https://a"), Cmd::RequestRender]).priority(),
            0
        );
        assert_eq!(Cmd::None.priority(), 255);
    }
}
