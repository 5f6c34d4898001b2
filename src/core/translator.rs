use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    core::{
        msg::{page::PageMsg, pointer::PointerMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    presentation::config::keybindings::Action,
};

/// Rows scrolled per mouse wheel notch.
const WHEEL_ROWS: i32 = 3;

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![
            Msg::System(SystemMsg::Resize(width, height)),
            Msg::Page(PageMsg::Resize { width, height }),
        ],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // User input - translate based on key bindings and mouse settings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),
        RawMsg::FocusLost => vec![Msg::Pointer(PointerMsg::Left)],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let mut msgs = vec![];
    if state.system.status_message.is_some() {
        msgs.push(Msg::System(SystemMsg::ClearStatusMessage));
    }

    // Quit and suspend stay reachable whatever the configuration says
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => msgs.push(Msg::System(SystemMsg::Quit)),

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => msgs.push(Msg::System(SystemMsg::Suspend)),

        _ => {
            if let Some(action) = state.config.keybindings.action_for(key) {
                msgs.push(translate_action_to_msg(action));
            }
        }
    }
    msgs
}

fn translate_action_to_msg(action: Action) -> Msg {
    match action {
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::Suspend => Msg::System(SystemMsg::Suspend),
        Action::ScrollUp => Msg::Page(PageMsg::ScrollBy(-1)),
        Action::ScrollDown => Msg::Page(PageMsg::ScrollBy(1)),
        Action::PageUp => Msg::Page(PageMsg::PageUp),
        Action::PageDown => Msg::Page(PageMsg::PageDown),
        Action::ScrollToTop => Msg::Page(PageMsg::ScrollToTop),
        Action::ScrollToBottom => Msg::Page(PageMsg::ScrollToBottom),
        Action::JumpTo(section) => Msg::Page(PageMsg::JumpTo(section)),
        Action::FocusNext => Msg::Page(PageMsg::FocusNext),
        Action::FocusPrev => Msg::Page(PageMsg::FocusPrev),
        Action::Activate => Msg::Page(PageMsg::Activate),
    }
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    if !state.config.mouse_enabled() {
        return vec![];
    }

    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            vec![Msg::Pointer(PointerMsg::Moved { column, row })]
        }
        MouseEventKind::Down(MouseButton::Left) => {
            vec![Msg::Pointer(PointerMsg::Pressed { column, row })]
        }
        MouseEventKind::Up(MouseButton::Left) => {
            vec![Msg::Pointer(PointerMsg::Released { column, row })]
        }
        MouseEventKind::ScrollDown => vec![Msg::Page(PageMsg::ScrollBy(WHEEL_ROWS))],
        MouseEventKind::ScrollUp => vec![Msg::Page(PageMsg::ScrollBy(-WHEEL_ROWS))],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::{domain::element::Section, infrastructure::config::Config};

    fn configured() -> AppState {
        AppState::new(Config::embedded().expect("embedded config parses"))
    }

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn mouse(kind: MouseEventKind) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind,
            column: 4,
            row: 9,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[rstest]
    #[case(key(KeyCode::Char('j')), Msg::Page(PageMsg::ScrollBy(1)))]
    #[case(key(KeyCode::Up), Msg::Page(PageMsg::ScrollBy(-1)))]
    #[case(key(KeyCode::Char(' ')), Msg::Page(PageMsg::PageDown))]
    #[case(key(KeyCode::Char('G')), Msg::Page(PageMsg::ScrollToBottom))]
    #[case(key(KeyCode::Char('3')), Msg::Page(PageMsg::JumpTo(Section::Projects)))]
    #[case(key(KeyCode::Tab), Msg::Page(PageMsg::FocusNext))]
    #[case(key(KeyCode::Enter), Msg::Page(PageMsg::Activate))]
    #[case(key(KeyCode::Char('q')), Msg::System(SystemMsg::Quit))]
    #[case(mouse(MouseEventKind::Moved), Msg::Pointer(PointerMsg::Moved { column: 4, row: 9 }))]
    #[case(mouse(MouseEventKind::Down(MouseButton::Left)), Msg::Pointer(PointerMsg::Pressed { column: 4, row: 9 }))]
    #[case(mouse(MouseEventKind::Up(MouseButton::Left)), Msg::Pointer(PointerMsg::Released { column: 4, row: 9 }))]
    #[case(mouse(MouseEventKind::ScrollDown), Msg::Page(PageMsg::ScrollBy(WHEEL_ROWS)))]
    #[case(RawMsg::FocusLost, Msg::Pointer(PointerMsg::Left))]
    fn test_single_translation(#[case] raw: RawMsg, #[case] expected: Msg) {
        assert_eq!(translate_raw_to_domain(raw, &configured()), vec![expected]);
    }

    #[test]
    fn test_shifted_char_matches_binding() {
        let shifted = RawMsg::Key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(
            translate_raw_to_domain(shifted, &configured()),
            vec![Msg::Page(PageMsg::ScrollToBottom)]
        );
    }

    #[test]
    fn test_ctrl_c_quits_without_bindings() {
        let state = AppState::default();
        let ctrl_c = RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(
            translate_raw_to_domain(ctrl_c, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert!(translate_raw_to_domain(key(KeyCode::Char('j')), &state).is_empty());
    }

    #[test]
    fn test_resize_reaches_system_and_page() {
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(90, 40), &AppState::default()),
            vec![
                Msg::System(SystemMsg::Resize(90, 40)),
                Msg::Page(PageMsg::Resize {
                    width: 90,
                    height: 40
                }),
            ]
        );
    }

    #[test]
    fn test_key_clears_error_message() {
        let mut state = configured();
        state.system.status_message = Some("Error: boom".to_string());
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('j')), &state),
            vec![
                Msg::System(SystemMsg::ClearStatusMessage),
                Msg::Page(PageMsg::ScrollBy(1)),
            ]
        );
    }

    #[test]
    fn test_mouse_ignored_when_disabled() {
        let mut state = configured();
        state.config.mouse = Some(false);
        assert!(translate_raw_to_domain(mouse(MouseEventKind::Moved), &state).is_empty());
        assert!(translate_raw_to_domain(RawMsg::Tick, &state).is_empty());
    }
}
