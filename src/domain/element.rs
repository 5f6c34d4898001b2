use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::domain::content::{PROJECTS, SOCIAL_LINKS};

/// Anchor targets of the single page, in page order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    About,
    Experience,
    Projects,
    Journey,
}

impl Section {
    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Journey => "Journey",
        }
    }

    /// Fragment identifier, e.g. `#journey`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.as_ref())
    }
}

/// Owner of a skill pill row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillGroup {
    Hero,
    Experience(usize),
    Project(usize),
    Timeline(usize),
}

/// Identity of everything on the page that carries motion or pointer state.
///
/// Content has no identity beyond its position in the authored arrays, so
/// repeated elements are keyed by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Nav,
    NavTitle,
    NavLink(Section),

    /// Wrapper around every hero block; revealed on first intersection.
    Hero,
    Portrait,
    Greeting,
    Name,
    Headline,
    About,
    Socials,
    SocialLink(usize),
    HeroSkills,

    SectionHeading(Section),
    ExperienceCard(usize),
    ProjectCard(usize),
    ProjectLink(usize),
    TimelineRail,
    TimelineEntry(usize),
    TimelineCard(usize),

    Pill(PillGroup, usize),
}

impl ElementId {
    /// Whether activating the element does something (open a URL or jump).
    pub fn is_activatable(&self) -> bool {
        matches!(
            self,
            ElementId::NavLink(_) | ElementId::SocialLink(_) | ElementId::ProjectLink(_)
        )
    }

    /// Where activating the element leads: an outbound URL or an in-page anchor.
    pub fn href(&self) -> Option<String> {
        match self {
            ElementId::NavLink(section) => Some(section.anchor()),
            ElementId::SocialLink(i) => SOCIAL_LINKS.get(*i).map(|link| link.href.to_string()),
            ElementId::ProjectLink(i) => PROJECTS.get(*i).map(|project| project.href.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_section_order_and_anchors() {
        let anchors: Vec<String> = Section::iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["#about", "#experience", "#projects", "#journey"]
        );
    }

    #[test]
    fn test_activatable_elements() {
        assert!(ElementId::NavLink(Section::Projects).is_activatable());
        assert!(ElementId::SocialLink(0).is_activatable());
        assert!(ElementId::ProjectLink(2).is_activatable());
        assert!(!ElementId::ExperienceCard(0).is_activatable());
        assert!(!ElementId::Pill(PillGroup::Hero, 0).is_activatable());
    }

    #[test]
    fn test_href() {
        assert_eq!(
            ElementId::NavLink(Section::Journey).href().as_deref(),
            Some("#journey")
        );
        assert_eq!(
            ElementId::ProjectLink(2).href().as_deref(),
            Some("https://github.com/niteshbalusu11/rustdress")
        );
        assert_eq!(ElementId::SocialLink(9).href(), None);
        assert_eq!(ElementId::Hero.href(), None);
    }
}
