use std::time::Instant;

use crate::{core::raw_msg::RawMsg, integration::runtime::Runtime};

/// Executes Elm update cycle with error handling, and applies pending coalesced resize.
pub struct UpdateExecutor;

impl UpdateExecutor {
    /// Commands that fail come back as error messages and are applied in
    /// the same call, so the status bar shows them on the next frame.
    pub fn process_update_cycle(
        runtime: &mut Runtime,
        pending_resize: &mut Option<(u16, u16)>,
        now: Instant,
    ) {
        if let Some((w, h)) = pending_resize.take() {
            runtime.send_raw_msg(RawMsg::Resize(w, h));
        }
        match runtime.run_update_cycle(now) {
            Ok(failures) if !failures.is_empty() => {
                for failure in failures {
                    runtime.send_raw_msg(RawMsg::Error(failure));
                }
                if let Err(e) = runtime.run_update_cycle(now) {
                    log::error!("Runtime error: {e}");
                }
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("Runtime error: {e}");
                runtime.send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
            }
        }
    }
}
