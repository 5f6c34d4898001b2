use std::collections::HashSet;

use crate::domain::{document::Document, element::ElementId};

/// Window of document rows currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub scroll: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(scroll: u16, height: u16) -> Self {
        Self { scroll, height }
    }

    pub fn bottom(&self) -> u16 {
        self.scroll.saturating_add(self.height)
    }

    /// Whether any row of `[top, bottom)` is on screen.
    pub fn intersects(&self, top: u16, bottom: u16) -> bool {
        top < self.bottom() && bottom > self.scroll
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionChange {
    pub id: ElementId,
    pub intersecting: bool,
}

/// Reports elements entering or leaving the viewport.
///
/// Only changes are reported; observing twice without moving the viewport
/// yields nothing the second time.
#[derive(Debug, Clone, Default)]
pub struct IntersectionObserver {
    intersecting: HashSet<ElementId>,
}

impl IntersectionObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_intersecting(&self, id: ElementId) -> bool {
        self.intersecting.contains(&id)
    }

    pub fn observe(&mut self, document: &Document, viewport: &Viewport) -> Vec<IntersectionChange> {
        let mut changes = vec![];
        for id in document.observed() {
            let now = document
                .extent(id)
                .is_some_and(|(top, bottom)| viewport.intersects(top, bottom));
            let before = self.intersecting.contains(&id);
            if now == before {
                continue;
            }
            if now {
                self.intersecting.insert(id);
            } else {
                self.intersecting.remove(&id);
            }
            changes.push(IntersectionChange {
                id,
                intersecting: now,
            });
        }
        changes
    }

    /// Forgets every element, e.g. after the document was recomposed.
    pub fn reset(&mut self) {
        self.intersecting.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{document::compose, element::Section};

    #[test]
    fn test_viewport_intersects() {
        let viewport = Viewport::new(10, 5);
        assert!(viewport.intersects(14, 20));
        assert!(viewport.intersects(0, 11));
        assert!(!viewport.intersects(15, 20));
        assert!(!viewport.intersects(0, 10));
    }

    #[test]
    fn test_reports_only_changes() {
        let doc = compose(100);
        let mut observer = IntersectionObserver::new();
        let viewport = Viewport::new(0, 20);

        let first = observer.observe(&doc, &viewport);
        assert!(first
            .iter()
            .any(|c| c.id == ElementId::Hero && c.intersecting));
        assert!(observer.observe(&doc, &viewport).is_empty());
    }

    #[test]
    fn test_leaving_is_reported() {
        let doc = compose(100);
        let mut observer = IntersectionObserver::new();
        observer.observe(&doc, &Viewport::new(0, 20));

        let far = doc.height.saturating_sub(5);
        let changes = observer.observe(&doc, &Viewport::new(far, 5));
        assert!(changes.contains(&IntersectionChange {
            id: ElementId::Hero,
            intersecting: false,
        }));
        assert!(!observer.is_intersecting(ElementId::Hero));
        assert!(!observer.is_intersecting(ElementId::SectionHeading(Section::Experience)));
    }

    #[test]
    fn test_reset_forgets_state() {
        let doc = compose(100);
        let mut observer = IntersectionObserver::new();
        let viewport = Viewport::new(0, 20);
        observer.observe(&doc, &viewport);
        observer.reset();
        assert_eq!(
            observer.observe(&doc, &viewport).is_empty(),
            false,
            "everything visible is reported again"
        );
    }
}
