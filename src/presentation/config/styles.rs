use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"heading": "bold lightblue"`.
///
/// Keys are the snake_case names of document roles plus the interaction
/// slots `hover`, `pressed`, `focus` and `status`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = HashMap::<String, String>::deserialize(deserializer)?;
        let styles = parsed
            .into_iter()
            .map(|(key, raw)| {
                parse_style(&raw)
                    .map(|style| (key, style))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;
        Ok(Styles(styles))
    }
}

impl Styles {
    pub fn get_or_default(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }
}

/// Parses `"bold white on darkgray"`: modifiers and a foreground color, then
/// optionally `on` and a background color.
pub fn parse_style(line: &str) -> Result<Style, String> {
    let mut style = Style::default();
    let mut tokens = line.split_whitespace();

    while let Some(token) = tokens.next() {
        if token.eq_ignore_ascii_case("on") {
            let bg = tokens
                .next()
                .ok_or_else(|| format!("Missing background color in `{line}`"))?;
            style = style.bg(parse_color(bg)?);
        } else if let Some(modifier) = parse_modifier(token) {
            style = style.add_modifier(modifier);
        } else {
            style = style.fg(parse_color(token)?);
        }
    }

    Ok(style)
}

fn parse_modifier(token: &str) -> Option<Modifier> {
    match token.to_ascii_lowercase().as_str() {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "reverse" => Some(Modifier::REVERSED),
        "crossed_out" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        "blink" | "slow_blink" => Some(Modifier::SLOW_BLINK),
        _ => None,
    }
}

fn parse_color(token: &str) -> Result<Color, String> {
    Color::from_str(token).map_err(|_| format!("Unknown color `{token}`"))
}
