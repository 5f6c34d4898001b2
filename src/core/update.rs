use std::time::Instant;

use crate::{
    core::{cmd::Cmd, msg::Msg, state::AppState},
    domain::element::ElementId,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message.
/// `now` is the clock reading every reveal triggered by `msg` is stamped with.
pub fn update(msg: Msg, mut state: AppState, now: Instant) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Page messages (delegated to PageState)
        Msg::Page(page_msg) => {
            let commands = state.page.update(page_msg, now);
            follow_pointer(&mut state);
            (state, commands)
        }

        // Pointer messages (delegated to PointerState, clicks followed by the page)
        Msg::Pointer(pointer_msg) => {
            let page = &state.page;
            let outcome = state
                .pointer
                .update(pointer_msg, |column, row| page.hit_chain(column, row));

            let mut commands = vec![];
            if outcome.changed {
                commands.push(Cmd::RequestRender);
            }
            if let Some(link) = outcome.clicked.into_iter().find(ElementId::is_activatable) {
                commands.extend(state.page.activate(link, now));
                follow_pointer(&mut state);
            }
            (state, commands)
        }
    }
}

/// Re-resolves the hover chain after the page moved under a still pointer.
fn follow_pointer(state: &mut AppState) {
    if let Some((column, row)) = state.pointer.position {
        let chain = state.page.hit_chain(column, row);
        state.pointer.retarget(chain);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::msg::{page::PageMsg, pointer::PointerMsg, system::SystemMsg},
        domain::{
            content::SOCIAL_LINKS,
            document::NAV_HEIGHT,
            element::Section,
            motion::Interaction,
        },
    };

    fn mounted(now: Instant) -> AppState {
        let (state, _) = update(
            Msg::Page(PageMsg::Mount {
                width: 120,
                height: 30,
            }),
            AppState::default(),
            now,
        );
        state
    }

    /// Screen cell of a document element, assuming it is scrolled into view.
    fn screen_cell(state: &AppState, id: ElementId) -> (u16, u16) {
        let (x, y) = state.page.document.position_of(id).expect("composed");
        (x, y - state.page.viewport.scroll + NAV_HEIGHT)
    }

    #[test]
    fn test_quit() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::default(), Instant::now());
        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_click_social_link_opens_it() {
        let now = Instant::now();
        let state = mounted(now);
        let (column, row) = screen_cell(&state, ElementId::SocialLink(1));

        let (state, _) = update(Msg::Pointer(PointerMsg::Pressed { column, row }), state, now);
        assert_eq!(
            state.pointer.interaction(ElementId::SocialLink(1)),
            Interaction::Pressed
        );
        let (state, cmds) = update(Msg::Pointer(PointerMsg::Released { column, row }), state, now);
        assert!(cmds.contains(&Cmd::OpenLink {
            href: SOCIAL_LINKS[1].href.to_string()
        }));
        assert_eq!(
            state.pointer.interaction(ElementId::SocialLink(1)),
            Interaction::Hovered
        );
    }

    #[test]
    fn test_click_nav_link_jumps() {
        let now = Instant::now();
        let state = mounted(now);
        let column = state.page.nav[0]
            .column_of(ElementId::NavLink(Section::Experience))
            .expect("nav link");

        let (state, _) = update(Msg::Pointer(PointerMsg::Pressed { column, row: 0 }), state, now);
        let (state, cmds) = update(
            Msg::Pointer(PointerMsg::Released { column, row: 0 }),
            state,
            now,
        );
        let anchor = state
            .page
            .document
            .anchor(Section::Experience)
            .expect("anchor");
        assert_eq!(state.page.viewport.scroll, anchor);
        assert!(cmds.contains(&Cmd::RequestRender));
        assert!(!cmds.iter().any(|cmd| matches!(cmd, Cmd::OpenLink { .. })));
    }

    #[test]
    fn test_hover_follows_scroll() {
        let now = Instant::now();
        let state = mounted(now);
        let (column, row) = screen_cell(&state, ElementId::SocialLink(0));
        let (state, _) = update(Msg::Pointer(PointerMsg::Moved { column, row }), state, now);
        assert_eq!(state.pointer.hovered_link(), Some(ElementId::SocialLink(0)));

        let (state, _) = update(Msg::Page(PageMsg::ScrollToBottom), state, now);
        assert_eq!(state.pointer.position, Some((column, row)));
        assert_eq!(
            state.pointer.interaction(ElementId::SocialLink(0)),
            Interaction::Neutral
        );
    }
}
