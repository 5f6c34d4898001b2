use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use folio::{
    core::{
        cmd_executor::CmdExecutor,
        msg::{page::PageMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::{
        element::{ElementId, Section},
        motion::{Reveal, Visual},
    },
    infrastructure::{config::Config, opener::RecordingOpener},
    integration::runtime::Runtime,
};

fn mounted_runtime(start: Instant) -> Runtime {
    let config = Config::embedded().expect("embedded config parses");
    let executor = CmdExecutor::new(Arc::new(RecordingOpener::new()), false);
    let mut runtime = Runtime::new_with_executor(AppState::new(config), executor);
    runtime.send_msg(Msg::Page(PageMsg::Mount {
        width: 100,
        height: 30,
    }));
    runtime.process_all_messages(start);
    runtime
}

fn press(runtime: &mut Runtime, c: char, now: Instant) {
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
        KeyCode::Char(c),
        KeyModifiers::empty(),
    )));
    runtime.process_all_messages(now);
}

#[test]
fn test_sections_reveal_once_when_scrolled_into_view() {
    let start = Instant::now();
    let later = |secs| start + Duration::from_secs(secs);
    let mut runtime = mounted_runtime(start);
    let projects = ElementId::SectionHeading(Section::Projects);

    assert!(!runtime.state().page.is_revealed(projects));

    press(&mut runtime, '3', later(1));
    let page = &runtime.state().page;
    assert_eq!(page.reveal(projects), Reveal::Revealed { at: later(1) });
    assert!(page.is_revealed(ElementId::ProjectCard(0)));
    assert!(!page.is_revealed(ElementId::TimelineEntry(5)));

    press(&mut runtime, 'g', later(2));
    press(&mut runtime, '3', later(3));
    let page = &runtime.state().page;
    assert_eq!(
        Some(page.viewport.scroll),
        page.document.anchor(Section::Projects)
    );
    assert_eq!(page.reveal(projects), Reveal::Revealed { at: later(1) });
    assert_eq!(page.visual_of(projects, later(3)), Visual::REST);
}

#[test]
fn test_timeline_entries_stagger() {
    let start = Instant::now();
    let mut runtime = mounted_runtime(start);
    let jump = start + Duration::from_secs(1);
    press(&mut runtime, '4', jump);

    let page = &runtime.state().page;
    let first = ElementId::TimelineEntry(0);
    let second = ElementId::TimelineEntry(1);
    assert_eq!(page.reveal(first), page.reveal(second));

    let mid = jump + Duration::from_millis(150);
    let (a, b) = (page.visual_of(first, mid), page.visual_of(second, mid));
    assert!(a.opacity > b.opacity, "{a:?} {b:?}");
    assert!(a.offset_y < b.offset_y, "{a:?} {b:?}");

    assert!(page.is_animating(mid));
    let settled = jump + Duration::from_secs(3);
    assert_eq!(page.visual_of(second, settled), Visual::REST);
}

#[test]
fn test_resize_keeps_reveals() {
    let start = Instant::now();
    let mut runtime = mounted_runtime(start);
    press(&mut runtime, '2', start);
    let card = ElementId::ExperienceCard(0);
    let before = runtime.state().page.reveal(card);
    assert!(before.is_revealed());

    runtime.send_raw_msg(RawMsg::Resize(50, 40));
    runtime.process_all_messages(start + Duration::from_secs(1));

    assert_eq!(runtime.state().page.document.width, 50);
    assert_eq!(runtime.state().page.reveal(card), before);
}

#[test]
fn test_mount_then_scroll_reveals_only_what_was_seen() {
    let start = Instant::now();
    let mut runtime = mounted_runtime(start);
    let page = &runtime.state().page;
    assert_eq!(
        page.visual_of(ElementId::Nav, start + Duration::from_secs(3)),
        Visual::REST
    );
    assert!(!page.is_revealed(ElementId::SectionHeading(Section::Journey)));

    let experience = ElementId::SectionHeading(Section::Experience);
    let mut steps = 0;
    while !runtime.state().page.is_revealed(experience) {
        press(&mut runtime, 'j', start);
        steps += 1;
        assert!(steps < 500, "experience heading never came into view");
    }

    let page = &runtime.state().page;
    let seen = page.viewport.scroll + page.viewport.height;
    for id in page.document.observed() {
        let (top, _) = page.document.extent(id).expect("observed elements are placed");
        assert_eq!(page.is_revealed(id), top < seen, "{id:?}");
    }
}
