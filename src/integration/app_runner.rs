use std::{sync::Arc, time::Instant};

use color_eyre::eyre::Result;
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        cmd_executor::CmdExecutor,
        msg::{page::PageMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{config::Config, opener::LinkOpener, tui},
    integration::{
        coalescer::Coalescer, renderer::Renderer, runtime::Runtime,
        update_executor::UpdateExecutor,
    },
};

/// Drives the Elm runtime from terminal events and draws the page.
///
/// The terminal is injected, so the same loop runs against a real terminal
/// or a test backend.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    renderer: Renderer,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_rx: mpsc::UnboundedReceiver<()>,
    size: Option<(u16, u16)>,
}

impl AppRunner {
    pub fn new(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        opener: Arc<dyn LinkOpener>,
    ) -> Self {
        let mut executor = CmdExecutor::new(opener, config.open_links_enabled());
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        executor.set_tui_sender(tui_tx);
        executor.set_render_request_sender(render_tx);

        Self {
            runtime: Runtime::new_with_executor(AppState::new(config), executor),
            tui,
            renderer: Renderer::new(),
            tui_rx,
            render_rx,
            size: None,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Run the main loop until quit is requested or the event source ends.
    pub async fn run(&mut self) -> Result<()> {
        let size = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        self.size = Some((size.width, size.height));
        self.runtime.send_msg(Msg::Page(PageMsg::Mount {
            width: size.width,
            height: size.height,
        }));
        self.cycle(None, false).await?;

        loop {
            let event = {
                let mut tui = self.tui.lock().await;
                tui.next().await
            };
            let Some(event) = event else {
                log::info!("Event source closed");
                break;
            };

            let mut saw_frame_tick = false;
            let mut resizes = vec![];
            match event {
                tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
                tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
                tui::Event::Render => saw_frame_tick = true,
                tui::Event::Resize(w, h) => resizes.push((w, h)),
                tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
                tui::Event::Mouse(mouse) => self.runtime.send_raw_msg(RawMsg::Mouse(mouse)),
                tui::Event::FocusLost => self.runtime.send_raw_msg(RawMsg::FocusLost),
                tui::Event::Error => self
                    .runtime
                    .send_raw_msg(RawMsg::Error("Failed to read terminal input".to_string())),
                tui::Event::Init | tui::Event::FocusGained => {}
            }

            let resize = Coalescer::decide_resize(None, &resizes).filter(|s| Some(*s) != self.size);
            self.cycle(resize, saw_frame_tick).await?;

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }
            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// One update cycle followed by the terminal work it asked for.
    async fn cycle(&mut self, resize: Option<(u16, u16)>, saw_frame_tick: bool) -> Result<()> {
        let now = Instant::now();
        let mut pending_resize = resize;
        UpdateExecutor::process_update_cycle(&mut self.runtime, &mut pending_resize, now);

        while let Ok(TuiCommand::Resize { width, height }) = self.tui_rx.try_recv() {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
            self.size = Some((width, height));
        }

        let mut queued_render_reqs = 0;
        while self.render_rx.try_recv().is_ok() {
            queued_render_reqs += 1;
        }
        let animating = self.runtime.state().page.is_animating(now);
        if Coalescer::decide_render(queued_render_reqs, saw_frame_tick, animating) {
            self.renderer
                .render(&self.tui, self.runtime.state(), now)
                .await?;
        }
        Ok(())
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        self.tui.lock().await.suspend()?;
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.tui.lock().await.resume()?;
        self.cycle(None, false).await
    }
}
