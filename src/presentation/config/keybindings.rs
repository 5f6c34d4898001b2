use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};

use crate::domain::element::Section;

/// Things a key can ask the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    Suspend,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,
    JumpTo(Section),
    FocusNext,
    FocusPrev,
    Activate,
}

/// Key sequences mapped to actions, e.g. `"<ctrl-c>": "Quit"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = HashMap::<String, Action>::deserialize(deserializer)?;
        let keybindings = parsed
            .into_iter()
            .map(|(raw, action)| {
                parse_key_sequence(&raw)
                    .map(|keys| (keys, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;
        Ok(KeyBindings(keybindings))
    }
}

impl KeyBindings {
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        self.get(&vec![normalize(key)]).copied()
    }
}

/// Drops what terminals disagree on: the event kind and state, and SHIFT on
/// keys whose code already carries it (`G`, back-tab).
pub fn normalize(key: KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    if matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(key.code, modifiers)
}

/// Parses `"<ctrl-d>"` or `"<g><g>"` into key events.
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .ok_or_else(|| format!("Unable to parse `{raw}`"))?;
    inner.split("><").map(parse_key_event).collect()
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let (modifiers, rest) = extract_modifiers(raw);
    parse_key_code_with_modifiers(rest, modifiers)
}

fn extract_modifiers(raw: &str) -> (KeyModifiers, &str) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        let lower = current.to_ascii_lowercase();
        let (modifier, len) = if lower.starts_with("ctrl-") {
            (KeyModifiers::CONTROL, 5)
        } else if lower.starts_with("alt-") {
            (KeyModifiers::ALT, 4)
        } else if lower.starts_with("shift-") {
            (KeyModifiers::SHIFT, 6)
        } else {
            break;
        };
        modifiers.insert(modifier);
        current = &current[len..];
    }

    (modifiers, current)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let code = match raw.to_ascii_lowercase().as_str() {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        lower if lower.len() > 1 && lower.starts_with('f') => lower[1..]
            .parse::<u8>()
            .map(KeyCode::F)
            .map_err(|_| format!("Unable to parse `{raw}`"))?,
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        modifiers.remove(KeyModifiers::SHIFT);
                        KeyCode::Char(c.to_ascii_uppercase())
                    } else {
                        KeyCode::Char(c)
                    }
                }
                _ => return Err(format!("Unable to parse `{raw}`")),
            }
        }
    };
    Ok(normalize(KeyEvent::new(code, modifiers)))
}
