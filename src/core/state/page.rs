use std::{collections::HashMap, time::Instant};

use crate::{
    core::{cmd::Cmd, msg::page::PageMsg},
    domain::{
        document::{compose, compose_nav, Block, DocLine, Document, NAV_HEIGHT, STATUS_HEIGHT},
        element::{ElementId, Section},
        motion::{motion_for, Reveal, Visual},
        observer::{IntersectionObserver, Viewport},
    },
};

/// The page as laid out for the current terminal, with its scroll position
/// and every element's reveal state.
///
/// Reveals are keyed by element identity, so they survive relayouts: an
/// element revealed at one width stays revealed at every other.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub document: Document,
    pub nav: Vec<DocLine>,
    pub viewport: Viewport,
    pub focus: Option<ElementId>,
    pub mounted: bool,
    observer: IntersectionObserver,
    reveals: HashMap<ElementId, Reveal>,
}

impl PageState {
    /// Page-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: PageMsg, now: Instant) -> Vec<Cmd> {
        match msg {
            PageMsg::Mount { width, height } => {
                self.layout(width, height);
                if !self.mounted {
                    self.mounted = true;
                    let on_mount = std::iter::once(ElementId::Nav).chain(self.document.mounted());
                    for id in on_mount {
                        self.reveals.entry(id).or_default().mount(now);
                    }
                    log::info!("Mounted page at {width}x{height}");
                }
                self.observe(now);
                vec![Cmd::RequestRender]
            }

            PageMsg::Resize { width, height } => {
                self.layout(width, height);
                self.observer.reset();
                if self.mounted {
                    self.observe(now);
                }
                vec![Cmd::RequestRender]
            }

            PageMsg::ScrollBy(delta) => {
                let target = i32::from(self.viewport.scroll).saturating_add(delta);
                self.scroll_to(target.max(0).try_into().unwrap_or(u16::MAX), now)
            }
            PageMsg::PageUp => {
                let step = self.page_step();
                self.scroll_to(self.viewport.scroll.saturating_sub(step), now)
            }
            PageMsg::PageDown => {
                let step = self.page_step();
                self.scroll_to(self.viewport.scroll.saturating_add(step), now)
            }
            PageMsg::ScrollToTop => self.scroll_to(0, now),
            PageMsg::ScrollToBottom => self.scroll_to(self.max_scroll(), now),
            PageMsg::JumpTo(section) => self.jump_to(section, now),

            PageMsg::FocusNext => self.move_focus(1, now),
            PageMsg::FocusPrev => self.move_focus(-1, now),
            PageMsg::Activate => match self.focus {
                Some(id) => self.activate(id, now),
                None => vec![],
            },
        }
    }

    pub fn reveal(&self, id: ElementId) -> Reveal {
        self.reveals.get(&id).copied().unwrap_or_default()
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.reveal(id).is_revealed()
    }

    /// Visual of one element from its own motion alone.
    pub fn visual_of(&self, id: ElementId, now: Instant) -> Visual {
        motion_for(id)
            .map(|spec| spec.visual_at(&self.reveal(id), now))
            .unwrap_or(Visual::REST)
    }

    /// Visual of a block, including the motion of its group wrapper.
    pub fn block_visual(&self, block: &Block, now: Instant) -> Visual {
        let own = self.visual_of(block.id, now);
        match block.group {
            Some(group) => {
                let outer = self.visual_of(group, now);
                Visual {
                    opacity: own.opacity * outer.opacity,
                    offset_y: own.offset_y + outer.offset_y,
                    scale: own.scale * outer.scale,
                }
            }
            None => own,
        }
    }

    /// Whether any revealed element is still travelling to rest.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.reveals.iter().any(|(id, reveal)| {
            reveal.is_revealed()
                && motion_for(*id).is_some_and(|spec| !spec.is_settled(reveal, now))
        })
    }

    /// Pointer targets under a screen cell, outermost first.
    pub fn hit_chain(&self, column: u16, row: u16) -> Vec<ElementId> {
        if !self.mounted {
            return vec![];
        }
        if row < NAV_HEIGHT {
            return self
                .nav
                .get(usize::from(row))
                .and_then(|line| line.target_at(column))
                .into_iter()
                .collect();
        }
        let offset = row - NAV_HEIGHT;
        if offset >= self.viewport.height {
            return vec![];
        }
        self.document
            .hit_test(column, self.viewport.scroll.saturating_add(offset))
    }

    pub fn max_scroll(&self) -> u16 {
        self.document.height.saturating_sub(self.viewport.height)
    }

    /// Links reachable with Tab: navigation links first, then the page's.
    pub fn focus_order(&self) -> Vec<ElementId> {
        let nav = self
            .nav
            .iter()
            .flat_map(|line| line.spans.iter())
            .filter_map(|span| span.target)
            .filter(ElementId::is_activatable);
        nav.chain(self.document.activatable()).collect()
    }

    /// Follows a link: in-page anchors scroll, outbound links become commands.
    pub fn activate(&mut self, id: ElementId, now: Instant) -> Vec<Cmd> {
        match id {
            ElementId::NavLink(section) => self.jump_to(section, now),
            ElementId::SocialLink(_) | ElementId::ProjectLink(_) => id
                .href()
                .map(|href| vec![Cmd::OpenLink { href }])
                .unwrap_or_default(),
            _ => vec![],
        }
    }

    fn layout(&mut self, width: u16, height: u16) {
        if width != self.document.width || self.document.blocks.is_empty() {
            self.document = compose(width);
            self.nav = compose_nav(width);
        }
        self.viewport.height = height.saturating_sub(NAV_HEIGHT + STATUS_HEIGHT);
        self.viewport.scroll = self.viewport.scroll.min(self.max_scroll());
        if let Some(focus) = self.focus {
            if !self.focus_order().contains(&focus) {
                self.focus = None;
            }
        }
    }

    fn observe(&mut self, now: Instant) {
        for change in self.observer.observe(&self.document, &self.viewport) {
            let reveal = self.reveals.entry(change.id).or_default();
            if reveal.observe(change.intersecting, now) {
                log::debug!("Revealed {:?}", change.id);
            }
        }
    }

    fn page_step(&self) -> u16 {
        self.viewport.height.saturating_sub(2).max(1)
    }

    fn scroll_to(&mut self, row: u16, now: Instant) -> Vec<Cmd> {
        let row = row.min(self.max_scroll());
        if row == self.viewport.scroll {
            return vec![];
        }
        self.viewport.scroll = row;
        self.observe(now);
        vec![Cmd::RequestRender]
    }

    fn jump_to(&mut self, section: Section, now: Instant) -> Vec<Cmd> {
        match self.document.anchor(section) {
            Some(row) => self.scroll_to(row, now),
            None => vec![],
        }
    }

    fn move_focus(&mut self, step: isize, now: Instant) -> Vec<Cmd> {
        let order = self.focus_order();
        if order.is_empty() {
            return vec![];
        }
        let len = order.len() as isize;
        let next = match self.focus.and_then(|id| order.iter().position(|o| *o == id)) {
            Some(current) => (current as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };
        let id = order[next as usize];
        self.focus = Some(id);

        let mut commands = vec![Cmd::RequestRender];
        if let Some((_, row)) = self.document.position_of(id) {
            let Viewport { scroll, height } = self.viewport;
            if row < scroll {
                commands.extend(self.scroll_to(row, now));
            } else if row >= scroll.saturating_add(height) {
                commands.extend(self.scroll_to(row + 1 - height, now));
            }
        }
        commands
    }
}
