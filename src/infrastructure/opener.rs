use std::{
    io,
    process::{Command, ExitStatus, Stdio},
    sync::{Arc, Mutex},
    thread::{self, JoinHandle},
};

use color_eyre::eyre::{bail, eyre, Result};

/// Hands outbound URLs to something that can show them.
pub trait LinkOpener: Send + Sync {
    fn open(&self, href: &str) -> Result<()>;
}

/// Opens URLs in a new browser context through the desktop's URL handler.
///
/// The handler runs detached with null stdio, so nothing flows back from the
/// destination and the terminal stays untouched. A watcher thread waits on
/// each handler so none is left behind as a zombie.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(href: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut command = Command::new("open");
            command.arg(href);
            command
        }
        #[cfg(windows)]
        {
            // `cmd /C start` would split the URL at `&`
            let mut command = Command::new("rundll32");
            command.args(["url.dll,FileProtocolHandler", href]);
            command
        }
        #[cfg(not(any(target_os = "macos", windows)))]
        {
            let mut command = Command::new("xdg-open");
            command.arg(href);
            command
        }
    }
}

impl LinkOpener for SystemOpener {
    fn open(&self, href: &str) -> Result<()> {
        ensure_web_url(href)?;
        spawn_reaped(Self::command(href))?;
        log::info!("Opened {href}");
        Ok(())
    }
}

/// Starts `command` with null stdio and waits for it on a background thread.
fn spawn_reaped(mut command: Command) -> Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let handle = thread::Builder::new()
        .name("folio-opener".to_string())
        .spawn(move || {
            let status = child.wait();
            match &status {
                Ok(status) if !status.success() => log::warn!("URL handler exited with {status}"),
                Err(e) => log::warn!("Failed to wait for URL handler: {e}"),
                Ok(_) => {}
            }
            status
        })?;
    Ok(handle)
}

/// Remembers every URL instead of opening it.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|opened| opened.clone())
            .unwrap_or_default()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, href: &str) -> Result<()> {
        ensure_web_url(href)?;
        self.opened
            .lock()
            .map_err(|e| eyre!("opener lock poisoned: {e}"))?
            .push(href.to_string());
        Ok(())
    }
}

fn ensure_web_url(href: &str) -> Result<()> {
    if !(href.starts_with("https://") || href.starts_with("http://")) {
        bail!("Refusing to open non-web URL `{href}`");
    }
    Ok(())
}
