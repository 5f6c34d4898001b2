use ratatui::prelude::*;

use crate::{
    core::state::pointer::PointerState,
    domain::{
        document::{DocLine, DocSpan, Role},
        element::ElementId,
        motion::{gesture_for, Interaction, Visual},
    },
    presentation::config::Styles,
};

/// Below this opacity a block is not drawn at all.
pub const HIDDEN_OPACITY: f32 = 0.15;
/// Below this opacity a block is drawn dimmed.
pub const DIM_OPACITY: f32 = 0.6;

/// Everything a block needs besides its own lines to pick its styles.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub styles: &'a Styles,
    pub pointer: &'a PointerState,
    pub focus: Option<ElementId>,
}

/// Draws a run of document lines at a visual state.
///
/// `top` is the row of the first line relative to the drawing area and may
/// be negative; rows falling outside the area are skipped.
pub struct BlockView<'a> {
    lines: &'a [DocLine],
    target: Option<ElementId>,
    visual: Visual,
    top: i32,
    left: u16,
    ctx: ViewContext<'a>,
}

impl<'a> BlockView<'a> {
    pub fn new(lines: &'a [DocLine], ctx: ViewContext<'a>) -> Self {
        Self {
            lines,
            target: None,
            visual: Visual::REST,
            top: 0,
            left: 0,
            ctx,
        }
    }

    /// Pointer target covering every line, e.g. a card.
    pub fn target(mut self, target: Option<ElementId>) -> Self {
        self.target = target;
        self
    }

    pub fn visual(mut self, visual: Visual) -> Self {
        self.visual = visual;
        self
    }

    pub fn position(mut self, left: u16, top: i32) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.visual.opacity < HIDDEN_OPACITY
    }

    /// Style of one span: its role, then pointer and focus feedback, then fading.
    pub fn span_style(&self, span: &DocSpan) -> Style {
        let styles = self.ctx.styles;
        let mut style = styles.get_or_default(span.role.as_ref());

        if span.role == Role::Border {
            if let Some(card) = self.target {
                style = style.patch(self.feedback(card));
            }
        }
        if let Some(target) = span.target {
            style = style.patch(self.feedback(target));
            if self.ctx.focus == Some(target) {
                style = style.patch(styles.get_or_default("focus"));
            }
        }
        if self.visual.opacity < DIM_OPACITY {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }

    fn feedback(&self, id: ElementId) -> Style {
        let Some(gesture) = gesture_for(id) else {
            return Style::default();
        };
        let interaction = self.ctx.pointer.interaction(id);
        if !gesture.responds_to(interaction) {
            return Style::default();
        }
        let styles = self.ctx.styles;
        match interaction {
            Interaction::Pressed if gesture.press_scale.is_some() => styles
                .get_or_default("hover")
                .patch(styles.get_or_default("pressed")),
            _ => styles.get_or_default("hover"),
        }
    }
}

impl Widget for BlockView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.is_hidden() || self.left >= area.width {
            return;
        }
        let top = self.top + self.visual.offset_rows();
        let x = area.x + self.left;

        for (i, line) in self.lines.iter().enumerate() {
            let Ok(row) = u16::try_from(top + i as i32) else {
                continue;
            };
            if row >= area.height {
                break;
            }
            let y = area.y + row;
            let mut col = x;
            for span in &line.spans {
                let remaining = area.right().saturating_sub(col);
                if remaining == 0 {
                    break;
                }
                let (next, _) =
                    buf.set_stringn(col, y, &span.text, usize::from(remaining), self.span_style(span));
                col = next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::msg::pointer::PointerMsg;

    const CARD: ElementId = ElementId::ExperienceCard(0);
    const LINK: ElementId = ElementId::SocialLink(0);

    fn styles() -> Styles {
        Styles(HashMap::from([
            ("link".to_string(), Style::new().fg(Color::Cyan)),
            ("hover".to_string(), Style::new().add_modifier(Modifier::BOLD)),
            ("pressed".to_string(), Style::new().add_modifier(Modifier::REVERSED)),
            ("focus".to_string(), Style::new().add_modifier(Modifier::UNDERLINED)),
        ]))
    }

    fn lines() -> Vec<DocLine> {
        vec![
            DocLine::new(vec![DocSpan::new("╭──╮", Role::Border)]),
            DocLine::new(vec![
                DocSpan::new("│", Role::Border),
                DocSpan::new("go", Role::Link).targeting(LINK),
                DocSpan::new("│", Role::Border),
            ]),
        ]
    }

    fn rows(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| (area.left()..area.right()).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn ctx<'a>(styles: &'a Styles, pointer: &'a PointerState) -> ViewContext<'a> {
        ViewContext {
            styles,
            pointer,
            focus: None,
        }
    }

    #[test]
    fn test_draws_at_position_and_clips() {
        let (styles, pointer) = (styles(), PointerState::default());
        let lines = lines();
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));
        BlockView::new(&lines, ctx(&styles, &pointer))
            .position(1, 1)
            .render(buf.area, &mut buf);
        assert_eq!(rows(&buf), vec!["      ", " ╭──╮ "]);

        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));
        BlockView::new(&lines, ctx(&styles, &pointer))
            .position(1, -1)
            .render(buf.area, &mut buf);
        assert_eq!(rows(&buf), vec![" │go│ ", "      "]);
    }

    #[test]
    fn test_offset_and_fade() {
        let (styles, pointer) = (styles(), PointerState::default());
        let lines = lines();

        let hidden = BlockView::new(&lines, ctx(&styles, &pointer)).visual(Visual::faded(0.0));
        assert!(hidden.is_hidden());

        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 3));
        BlockView::new(&lines, ctx(&styles, &pointer))
            .visual(Visual {
                opacity: 0.5,
                offset_y: 16.0,
                scale: 1.0,
            })
            .render(buf.area, &mut buf);
        assert_eq!(rows(&buf), vec!["    ", "╭──╮", "│go│"]);
        assert!(buf[(0, 1)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_hover_press_and_focus_styles() {
        let styles = styles();
        let lines = lines();
        let link_span = &lines[1].spans[1];
        let border = &lines[0].spans[0];
        let hit = |column: u16, _row: u16| match column {
            0 => vec![CARD],
            _ => vec![CARD, LINK],
        };

        let mut pointer = PointerState::default();
        pointer.update(PointerMsg::Moved { column: 1, row: 0 }, hit);
        let view = BlockView::new(&lines, ctx(&styles, &pointer)).target(Some(CARD));
        assert_eq!(
            view.span_style(link_span),
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        );
        assert_eq!(
            view.span_style(border),
            Style::new().add_modifier(Modifier::BOLD)
        );

        pointer.update(PointerMsg::Pressed { column: 1, row: 0 }, hit);
        let view = BlockView::new(&lines, ctx(&styles, &pointer));
        assert!(view
            .span_style(link_span)
            .add_modifier
            .contains(Modifier::REVERSED));

        let idle = PointerState::default();
        let focused = BlockView::new(
            &lines,
            ViewContext {
                focus: Some(LINK),
                ..ctx(&styles, &idle)
            },
        );
        assert_eq!(
            focused.span_style(link_span),
            Style::new().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
        );
    }
}
