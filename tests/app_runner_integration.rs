use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pretty_assertions::assert_eq;
use ratatui::layout::Size;
use tokio::sync::Mutex;

use folio::{
    core::{msg::page::PageMsg, state::page::PageState},
    domain::{content::SOCIAL_LINKS, document::NAV_HEIGHT, element::ElementId},
    infrastructure::{
        config::Config,
        opener::RecordingOpener,
        tui::{test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
};

// Note: every test injects a TestTui, so no raw mode or alternate screen is touched.

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn mouse(kind: MouseEventKind, (column, row): (u16, u16)) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

/// Screen cell of an element on the freshly mounted page.
fn screen_cell(width: u16, height: u16, id: ElementId) -> (u16, u16) {
    let mut page = PageState::default();
    page.update(PageMsg::Mount { width, height }, std::time::Instant::now());
    let (x, y) = page
        .document
        .position_of(id)
        .expect("element is on the page");
    (x, y + NAV_HEIGHT)
}

fn build_runner(
    config: Config,
    events: Vec<Event>,
) -> Result<(AppRunner, Arc<Mutex<TestTui>>, RecordingOpener)> {
    let tui = Arc::new(Mutex::new(TestTui::with_events(100, 30, events)?));
    let opener = RecordingOpener::new();
    let runner = AppRunner::new(
        config,
        Arc::<Mutex<TestTui>>::clone(&tui),
        Arc::new(opener.clone()),
    );
    Ok((runner, tui, opener))
}

#[tokio::test]
async fn test_mount_draws_once_and_quit_exits() -> Result<()> {
    let events = vec![Event::Init, key(KeyCode::Char('q'), KeyModifiers::empty())];
    let (mut runner, tui, _) = build_runner(Config::embedded()?, events)?;

    runner.run().await?;

    let state = runner.runtime().state();
    assert!(state.system.should_quit);
    assert!(state.page.mounted);
    let tui = tui.lock().await;
    assert!(!tui.is_entered());
    assert_eq!(tui.draw_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_event_source_end_stops_the_loop() -> Result<()> {
    let (mut runner, tui, _) = build_runner(Config::embedded()?, vec![])?;

    runner.run().await?;

    assert!(!runner.runtime().state().system.should_quit);
    assert!(!tui.lock().await.is_entered());
    Ok(())
}

#[tokio::test]
async fn test_click_opens_social_link() -> Result<()> {
    let cell = screen_cell(100, 30, ElementId::SocialLink(0));
    let events = vec![
        mouse(MouseEventKind::Moved, cell),
        mouse(MouseEventKind::Down(MouseButton::Left), cell),
        mouse(MouseEventKind::Up(MouseButton::Left), cell),
    ];
    let (mut runner, tui, opener) = build_runner(Config::embedded()?, events)?;

    runner.run().await?;

    assert_eq!(opener.opened(), vec![SOCIAL_LINKS[0].href.to_string()]);
    assert_eq!(
        runner.runtime().state().highlighted_link(),
        Some(ElementId::SocialLink(0))
    );
    let status = tui.lock().await.screen_lines()[29].clone();
    assert!(status.contains(SOCIAL_LINKS[0].href));
    Ok(())
}

#[tokio::test]
async fn test_disabled_mouse_and_links() -> Result<()> {
    let cell = screen_cell(100, 30, ElementId::SocialLink(0));
    let clicks = || {
        vec![
            mouse(MouseEventKind::Down(MouseButton::Left), cell),
            mouse(MouseEventKind::Up(MouseButton::Left), cell),
        ]
    };

    let mut no_mouse = Config::embedded()?;
    no_mouse.mouse = Some(false);
    let (mut runner, _, opener) = build_runner(no_mouse, clicks())?;
    runner.run().await?;
    assert!(opener.opened().is_empty());
    assert!(runner.runtime().state().pointer.hovered().is_empty());

    let mut no_links = Config::embedded()?;
    no_links.open_links = Some(false);
    let (mut runner, _, opener) = build_runner(no_links, clicks())?;
    runner.run().await?;
    assert!(opener.opened().is_empty());
    assert_eq!(
        runner.runtime().state().pointer.hovered(),
        &[ElementId::SocialLink(0)]
    );
    Ok(())
}

#[tokio::test]
async fn test_suspend_and_resume() -> Result<()> {
    let events = vec![key(KeyCode::Char('z'), KeyModifiers::CONTROL)];
    let (mut runner, tui, _) = build_runner(Config::embedded()?, events)?;

    runner.run().await?;

    assert!(!runner.runtime().state().system.should_suspend);
    let tui = tui.lock().await;
    assert_eq!(tui.suspend_count(), 1);
    assert_eq!(tui.draw_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_resize_relayouts_and_redraws() -> Result<()> {
    let (mut runner, tui, _) = build_runner(Config::embedded()?, vec![Event::Resize(60, 20)])?;

    runner.run().await?;

    let page = &runner.runtime().state().page;
    assert_eq!(page.document.width, 60);
    assert_eq!(page.viewport.height, 20 - NAV_HEIGHT - 1);
    let tui = tui.lock().await;
    assert_eq!(tui.size()?, Size::new(60, 20));
    assert_eq!(tui.screen_lines().len(), 20);
    assert_eq!(tui.draw_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_frame_ticks_draw_only_while_animating() -> Result<()> {
    let (mut runner, tui, _) = build_runner(Config::embedded()?, vec![Event::Render, Event::Tick])?;

    runner.run().await?;

    // the nav spring is still moving right after mount
    assert_eq!(tui.lock().await.draw_count(), 2);
    Ok(())
}
