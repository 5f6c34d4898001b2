use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::opener::LinkOpener,
};

/// Command executor that turns Elm commands into side effects
#[derive(Clone)]
pub struct CmdExecutor {
    opener: Arc<dyn LinkOpener>,
    open_links: bool,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    /// `open_links` false logs outbound links instead of opening them.
    pub fn new(opener: Arc<dyn LinkOpener>, open_links: bool) -> Self {
        Self {
            opener,
            open_links,
            tui_sender: None,
            render_req_sender: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::OpenLink { href } => {
                if self.open_links {
                    self.opener.open(href)?;
                } else {
                    log::info!("Link opening disabled, not opening {href}");
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                } else {
                    log::warn!("CmdExecutor: render request sender not configured");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands, most urgent first
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut sorted: Vec<&Cmd> = commands.iter().collect();
        sorted.sort_by_key(|cmd| cmd.priority());

        let mut failures = Vec::new();
        for cmd in sorted {
            if let Err(e) = self.execute_command(cmd) {
                let error_msg = format!("Failed to execute {}: {e}", cmd.name());
                log::error!("{error_msg}");
                failures.push(error_msg);
            }
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::opener::RecordingOpener;

    fn create_test_executor(open_links: bool) -> (CmdExecutor, RecordingOpener) {
        let opener = RecordingOpener::new();
        let executor = CmdExecutor::new(Arc::new(opener.clone()), open_links);
        (executor, opener)
    }

    fn open(href: &str) -> Cmd {
        Cmd::OpenLink {
            href: href.to_string(),
        }
    }

    #[test]
    fn test_execute_open_link() -> Result<()> {
        let (executor, opener) = create_test_executor(true);
        executor.execute_command(&open("https://github.com/niteshbalusu11"))?;
        assert_eq!(opener.opened(), vec!["https://github.com/niteshbalusu11"]);
        Ok(())
    }

    #[test]
    fn test_open_link_disabled() -> Result<()> {
        let (executor, opener) = create_test_executor(false);
        executor.execute_command(&open("https://github.com/niteshbalusu11"))?;
        assert!(opener.opened().is_empty());
        Ok(())
    }

    #[test]
    fn test_execute_resize() -> Result<()> {
        let (mut executor, _) = create_test_executor(false);
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);

        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 80,
            height: 24,
        }))?;

        assert_eq!(
            tui_rx.try_recv()?,
            TuiCommand::Resize {
                width: 80,
                height: 24
            }
        );
        Ok(())
    }

    #[test]
    fn test_execute_batch() -> Result<()> {
        let (mut executor, opener) = create_test_executor(true);
        let (render_tx, mut render_rx) = mpsc::unbounded_channel::<()>();
        executor.set_render_request_sender(render_tx);

        executor.execute_command(&Cmd::Batch(vec![
            Cmd::RequestRender,
            open("https://a.example"),
            Cmd::None,
        ]))?;

        render_rx.try_recv()?;
        assert_eq!(opener.opened(), vec!["https://a.example"]);
        Ok(())
    }

    #[test]
    fn test_execute_commands_reports_failures() {
        let (mut executor, opener) = create_test_executor(true);
        let (render_tx, mut render_rx) = mpsc::unbounded_channel::<()>();
        executor.set_render_request_sender(render_tx);

        let failures = executor.execute_commands(&[
            open("javascript:alert(1)"),
            Cmd::RequestRender,
            open("https://b.example"),
        ]);

        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("Failed to execute OpenLink"));
        assert_eq!(opener.opened(), vec!["https://b.example"]);
        assert!(render_rx.try_recv().is_ok());
    }
}
