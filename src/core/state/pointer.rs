use std::collections::HashMap;

use crate::{
    core::msg::pointer::PointerMsg,
    domain::{element::ElementId, motion::Interaction},
};

/// Where the pointer is and which elements it is hovering or pressing.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Last screen cell, `None` once the pointer left the terminal.
    pub position: Option<(u16, u16)>,
    /// Elements under the pointer, outermost first.
    hovered: Vec<ElementId>,
    /// Non-neutral elements only.
    interactions: HashMap<ElementId, Interaction>,
}

/// What a pointer message did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerOutcome {
    /// Some element changed its interaction state.
    pub changed: bool,
    /// Elements pressed and released under the pointer, innermost first.
    pub clicked: Vec<ElementId>,
}

impl PointerState {
    /// Pointer-specific update function
    /// `hit` resolves a screen cell to the elements under it.
    pub fn update(
        &mut self,
        msg: PointerMsg,
        hit: impl Fn(u16, u16) -> Vec<ElementId>,
    ) -> PointerOutcome {
        let before = self.interactions.clone();
        let mut clicked = vec![];

        match msg {
            PointerMsg::Moved { column, row } => {
                self.move_to(column, row, &hit);
            }
            PointerMsg::Pressed { column, row } => {
                self.move_to(column, row, &hit);
                for id in self.hovered.clone() {
                    self.set(id, self.interaction(id).press());
                }
            }
            PointerMsg::Released { column, row } => {
                self.move_to(column, row, &hit);
                for id in self.hovered.clone().into_iter().rev() {
                    let interaction = self.interaction(id);
                    if interaction == Interaction::Pressed {
                        clicked.push(id);
                    }
                    self.set(id, interaction.release());
                }
            }
            PointerMsg::Left => {
                self.position = None;
                self.retarget(vec![]);
            }
        }

        PointerOutcome {
            changed: before != self.interactions,
            clicked,
        }
    }

    pub fn interaction(&self, id: ElementId) -> Interaction {
        self.interactions.get(&id).copied().unwrap_or_default()
    }

    pub fn hovered(&self) -> &[ElementId] {
        &self.hovered
    }

    /// Innermost link under the pointer.
    pub fn hovered_link(&self) -> Option<ElementId> {
        self.hovered
            .iter()
            .rev()
            .copied()
            .find(ElementId::is_activatable)
    }

    /// Replaces the hovered chain: elements no longer under the pointer
    /// leave, new ones enter, the rest keep their state.
    pub fn retarget(&mut self, chain: Vec<ElementId>) {
        for id in self.hovered.clone() {
            if !chain.contains(&id) {
                self.set(id, self.interaction(id).pointer_leave());
            }
        }
        for id in &chain {
            self.set(*id, self.interaction(*id).pointer_enter());
        }
        self.hovered = chain;
    }

    fn move_to(&mut self, column: u16, row: u16, hit: &impl Fn(u16, u16) -> Vec<ElementId>) {
        self.position = Some((column, row));
        self.retarget(hit(column, row));
    }

    fn set(&mut self, id: ElementId, interaction: Interaction) {
        if interaction.is_neutral() {
            self.interactions.remove(&id);
        } else {
            self.interactions.insert(id, interaction);
        }
    }
}
