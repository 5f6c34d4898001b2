//! Page composition.
//!
//! [`compose`] lays the fixed content out for a terminal width and returns a
//! [`Document`]: positioned blocks of styled lines in document rows (row 0 is
//! the first row under the navigation bar). The document knows nothing about
//! scrolling or motion; it is recomposed only when the width changes.

use strum::{AsRefStr, IntoEnumIterator};
use unicode_width::UnicodeWidthStr;

use crate::domain::{
    content::{self, ExperienceEntry, ProjectEntry, TimelineEntry, PROFILE},
    element::{ElementId, PillGroup, Section},
    motion::{motion_for, Trigger},
    text::wrap_words,
};

/// Rows taken by the navigation bar above the document.
pub const NAV_HEIGHT: u16 = 2;
/// Rows taken by the status bar below the document.
pub const STATUS_HEIGHT: u16 = 1;

const MAX_CONTENT_WIDTH: u16 = 96;
/// Content width from which projects sit side by side and the timeline alternates.
const WIDE_CONTENT: u16 = 80;
/// Terminal width from which the navigation bar shows its anchor links.
const NAV_LINKS_MIN_WIDTH: u16 = 60;
const PORTRAIT_WIDTH: u16 = 20;
const PORTRAIT_HEIGHT: u16 = 7;

/// Style slot of a span; resolved against the configured styles when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Plain,
    Muted,
    Accent,
    Title,
    Heading,
    Link,
    Pill,
    Border,
    Rail,
    Date,
    Portrait,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSpan {
    pub text: String,
    pub role: Role,
    pub target: Option<ElementId>,
}

impl DocSpan {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
            target: None,
        }
    }

    pub fn targeting(mut self, target: ElementId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn width(&self) -> u16 {
        width_of(&self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocLine {
    pub spans: Vec<DocSpan>,
}

impl DocLine {
    pub fn new(spans: Vec<DocSpan>) -> Self {
        Self { spans }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u16 {
        self.spans.iter().map(DocSpan::width).sum()
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Target of the span covering column `col`, counted from the line start.
    pub fn target_at(&self, col: u16) -> Option<ElementId> {
        let mut start = 0;
        for span in &self.spans {
            let end = start + span.width();
            if col >= start && col < end {
                return span.target;
            }
            start = end;
        }
        None
    }

    /// Column of the first span targeting `id`.
    pub fn column_of(&self, id: ElementId) -> Option<u16> {
        let mut start = 0;
        for span in &self.spans {
            if span.target == Some(id) {
                return Some(start);
            }
            start += span.width();
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl DocRect {
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x.saturating_add(self.width) && y >= self.y && y < self.bottom()
    }
}

/// A positioned run of lines sharing one motion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: ElementId,
    /// Wrapper whose reveal also applies to this block.
    pub group: Option<ElementId>,
    /// Pointer target covering the whole block.
    pub target: Option<ElementId>,
    pub area: DocRect,
    pub lines: Vec<DocLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub width: u16,
    pub height: u16,
    /// In draw order.
    pub blocks: Vec<Block>,
    anchors: Vec<(Section, u16)>,
}

impl Document {
    pub fn anchor(&self, section: Section) -> Option<u16> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, row)| *row)
    }

    pub fn block(&self, id: ElementId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Rows `[top, bottom)` covered by an element or by every block of a group.
    pub fn extent(&self, id: ElementId) -> Option<(u16, u16)> {
        self.blocks
            .iter()
            .filter(|block| block.id == id || block.group == Some(id))
            .map(|block| (block.area.y, block.area.bottom()))
            .reduce(|(top, bottom), (t, b)| (top.min(t), bottom.max(b)))
    }

    /// Elements revealed by viewport intersection, in document order.
    pub fn observed(&self) -> Vec<ElementId> {
        let mut ids = vec![];
        for block in &self.blocks {
            for id in block.group.into_iter().chain(std::iter::once(block.id)) {
                let in_view = motion_for(id).is_some_and(|spec| spec.trigger == Trigger::InView);
                if in_view && !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }

    /// Elements revealed at mount, in document order.
    pub fn mounted(&self) -> Vec<ElementId> {
        self.blocks
            .iter()
            .map(|block| block.id)
            .filter(|id| motion_for(*id).is_some_and(|spec| spec.trigger == Trigger::Mount))
            .collect()
    }

    /// Pointer targets under a document cell, outermost first.
    pub fn hit_test(&self, x: u16, y: u16) -> Vec<ElementId> {
        let Some(block) = self.blocks.iter().rev().find(|b| b.area.contains(x, y)) else {
            return vec![];
        };

        let mut chain: Vec<ElementId> = block.target.into_iter().collect();
        let line = block.lines.get(usize::from(y - block.area.y));
        if let Some(inner) = line.and_then(|line| line.target_at(x - block.area.x)) {
            if !chain.contains(&inner) {
                chain.push(inner);
            }
        }
        chain
    }

    /// Link targets in document order.
    pub fn activatable(&self) -> Vec<ElementId> {
        let mut ids = vec![];
        for block in &self.blocks {
            for span in block.lines.iter().flat_map(|line| line.spans.iter()) {
                if let Some(id) = span.target.filter(ElementId::is_activatable) {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
            }
        }
        ids
    }

    /// Document cell where a pointer target starts.
    pub fn position_of(&self, id: ElementId) -> Option<(u16, u16)> {
        for block in &self.blocks {
            if block.target == Some(id) {
                return Some((block.area.x, block.area.y));
            }
            for (row, line) in block.lines.iter().enumerate() {
                if let Some(col) = line.column_of(id) {
                    return Some((block.area.x + col, block.area.y + row as u16));
                }
            }
        }
        None
    }

    /// Texts of every span targeting a pill of `group`, in line order.
    pub fn pill_labels(&self, group: PillGroup) -> Vec<String> {
        self.blocks
            .iter()
            .flat_map(|block| block.lines.iter())
            .flat_map(|line| line.spans.iter())
            .filter(|span| matches!(span.target, Some(ElementId::Pill(g, _)) if g == group))
            .map(|span| span.text.trim().to_string())
            .collect()
    }
}

/// Lays the page out for a terminal `width` columns wide.
pub fn compose(width: u16) -> Document {
    let mut composer = Composer::new(width);
    composer.hero();
    composer.experience();
    composer.projects();
    composer.journey();
    composer.finish()
}

/// Navigation bar lines: title with anchor links, then a rule.
pub fn compose_nav(width: u16) -> Vec<DocLine> {
    let (x, content) = content_box(width);
    let mut line = DocLine::new(vec![
        DocSpan::new(" ".repeat(usize::from(x)), Role::Plain),
        DocSpan::new(PROFILE.display_name, Role::Title).targeting(ElementId::NavTitle),
    ]);

    if width >= NAV_LINKS_MIN_WIDTH {
        let links: Vec<DocSpan> = Section::iter()
            .map(|s| DocSpan::new(s.label(), Role::Link).targeting(ElementId::NavLink(s)))
            .collect();
        let links_width: u16 =
            links.iter().map(DocSpan::width).sum::<u16>() + 3 * (links.len() as u16 - 1);
        let used = width_of(PROFILE.display_name);
        let fill = content.saturating_sub(used + links_width).max(1);
        line.spans
            .push(DocSpan::new(" ".repeat(usize::from(fill)), Role::Plain));
        for (i, link) in links.into_iter().enumerate() {
            if i > 0 {
                line.spans.push(DocSpan::new("   ", Role::Plain));
            }
            line.spans.push(link);
        }
    }

    let rule = DocLine::new(vec![DocSpan::new(
        "─".repeat(usize::from(width)),
        Role::Border,
    )]);
    vec![line, rule]
}

fn width_of(s: &str) -> u16 {
    s.width().min(usize::from(u16::MAX)) as u16
}

/// Left edge and width of the centered content column.
fn content_box(width: u16) -> (u16, u16) {
    let content = width.saturating_sub(4).min(MAX_CONTENT_WIDTH).max(1);
    (width.saturating_sub(content) / 2, content)
}

/// Lays `items` out left to right, breaking lines at `width`.
fn flow(items: Vec<DocSpan>, width: u16, separator: &str) -> Vec<DocLine> {
    let sep_width = width_of(separator);
    let mut lines = vec![];
    let mut current = DocLine::blank();

    for item in items {
        let needed = if current.spans.is_empty() {
            item.width()
        } else {
            current.width() + sep_width + item.width()
        };
        if !current.spans.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.spans.is_empty() {
            current.spans.push(DocSpan::new(separator, Role::Plain));
        }
        current.spans.push(item);
    }

    if !current.spans.is_empty() {
        lines.push(current);
    }
    lines
}

fn pills(skills: &[&str], group: PillGroup, width: u16) -> Vec<DocLine> {
    let items = skills
        .iter()
        .enumerate()
        .map(|(i, skill)| DocSpan::new(format!(" {skill} "), Role::Pill).targeting(ElementId::Pill(group, i)))
        .collect();
    flow(items, width, " ")
}

fn paragraph(text: &str, width: u16, role: Role) -> Vec<DocLine> {
    wrap_words(text, usize::from(width))
        .into_iter()
        .map(|line| DocLine::new(vec![DocSpan::new(line, role)]))
        .collect()
}

/// Surrounds `inner` with a rounded border `width` columns wide.
fn frame(inner: Vec<DocLine>, width: u16) -> Vec<DocLine> {
    let width = width.max(4);
    let inner_width = usize::from(width - 4);
    let bar = "─".repeat(usize::from(width - 2));

    let mut lines = vec![DocLine::new(vec![DocSpan::new(
        format!("╭{bar}╮"),
        Role::Border,
    )])];
    for mut line in inner {
        let fill = inner_width.saturating_sub(usize::from(line.width()));
        let mut spans = vec![DocSpan::new("│ ", Role::Border)];
        spans.append(&mut line.spans);
        spans.push(DocSpan::new(" ".repeat(fill), Role::Plain));
        spans.push(DocSpan::new(" │", Role::Border));
        lines.push(DocLine::new(spans));
    }
    lines.push(DocLine::new(vec![DocSpan::new(
        format!("╰{bar}╯"),
        Role::Border,
    )]));
    lines
}

struct Composer {
    x: u16,
    content: u16,
    width: u16,
    y: u16,
    blocks: Vec<Block>,
    anchors: Vec<(Section, u16)>,
}

impl Composer {
    fn new(width: u16) -> Self {
        let (x, content) = content_box(width);
        Self {
            x,
            content,
            width,
            y: 0,
            blocks: vec![],
            anchors: vec![],
        }
    }

    fn wide(&self) -> bool {
        self.content >= WIDE_CONTENT
    }

    fn gap(&mut self, rows: u16) {
        self.y = self.y.saturating_add(rows);
    }

    fn anchor(&mut self, section: Section) {
        self.anchors.push((section, self.y));
    }

    /// Places a block at row `y` without advancing; returns its height.
    fn place(
        &mut self,
        id: ElementId,
        group: Option<ElementId>,
        target: Option<ElementId>,
        area: (u16, u16, u16),
        lines: Vec<DocLine>,
    ) -> u16 {
        let (x, y, width) = area;
        let height = lines.len() as u16;
        self.blocks.push(Block {
            id,
            group,
            target,
            area: DocRect {
                x,
                y,
                width,
                height,
            },
            lines,
        });
        height
    }

    /// Places a full-width block at the cursor and moves below it.
    fn push(&mut self, id: ElementId, group: Option<ElementId>, lines: Vec<DocLine>) {
        let area = (self.x, self.y, self.content);
        let height = self.place(id, group, None, area, lines);
        self.gap(height);
    }

    fn heading(&mut self, section: Section, text: &str, centered: bool) {
        self.anchor(section);
        let indent = if centered {
            self.content.saturating_sub(width_of(text)) / 2
        } else {
            0
        };
        let pad = " ".repeat(usize::from(indent));
        let lines = vec![
            DocLine::new(vec![
                DocSpan::new(pad.clone(), Role::Plain),
                DocSpan::new(text, Role::Heading),
            ]),
            DocLine::new(vec![
                DocSpan::new(pad, Role::Plain),
                DocSpan::new("━".repeat(text.width()), Role::Accent),
            ]),
        ];
        self.push(ElementId::SectionHeading(section), None, lines);
        self.gap(1);
    }

    fn hero(&mut self) {
        let group = Some(ElementId::Hero);
        self.anchor(Section::About);
        self.gap(1);

        let portrait = frame(
            (0..PORTRAIT_HEIGHT - 2)
                .map(|row| {
                    if row == (PORTRAIT_HEIGHT - 2) / 2 {
                        let alt = PROFILE.portrait_alt;
                        let inner = PORTRAIT_WIDTH - 4;
                        let indent = inner.saturating_sub(width_of(alt)) / 2;
                        DocLine::new(vec![
                            DocSpan::new(" ".repeat(usize::from(indent)), Role::Plain),
                            DocSpan::new(alt, Role::Portrait),
                        ])
                    } else {
                        DocLine::blank()
                    }
                })
                .collect(),
            PORTRAIT_WIDTH,
        );

        let side_by_side = self.content >= PORTRAIT_WIDTH + 2 + 24;
        let top = self.y;
        self.place(
            ElementId::Portrait,
            group,
            None,
            (self.x, top, PORTRAIT_WIDTH),
            portrait,
        );
        let (intro_x, intro_y, intro_width) = if side_by_side {
            let offset = PORTRAIT_WIDTH + 3;
            (self.x + offset, top + 1, self.content - offset)
        } else {
            (self.x, top + PORTRAIT_HEIGHT + 1, self.content)
        };

        let mut y = intro_y;
        let greeting = vec![DocLine::new(vec![DocSpan::new(PROFILE.greeting, Role::Muted)])];
        y += self.place(ElementId::Greeting, group, None, (intro_x, y, intro_width), greeting);
        let name = vec![DocLine::new(vec![DocSpan::new(PROFILE.first_name, Role::Title)])];
        y += self.place(ElementId::Name, group, None, (intro_x, y, intro_width), name);
        let headline = PROFILE
            .headline
            .iter()
            .map(|line| DocLine::new(vec![DocSpan::new(*line, Role::Heading)]))
            .collect();
        y += self.place(ElementId::Headline, group, None, (intro_x, y, intro_width), headline);

        self.y = y.max(top + PORTRAIT_HEIGHT);
        self.gap(1);

        let about = paragraph(PROFILE.about, self.content, Role::Muted);
        self.push(ElementId::About, group, about);
        self.gap(1);

        let links = content::SOCIAL_LINKS
            .iter()
            .enumerate()
            .map(|(i, link)| {
                DocSpan::new(format!("{} {}", link.icon, link.label), Role::Link)
                    .targeting(ElementId::SocialLink(i))
            })
            .collect();
        let socials = flow(links, self.content, "   ");
        self.push(ElementId::Socials, group, socials);
        self.gap(1);

        let skills = pills(PROFILE.skills, PillGroup::Hero, self.content);
        self.push(ElementId::HeroSkills, group, skills);
        self.gap(3);
    }

    fn experience(&mut self) {
        self.heading(Section::Experience, "Professional Experience", false);
        for (i, entry) in content::EXPERIENCES.iter().enumerate() {
            let lines = experience_card(i, entry, self.content);
            let id = ElementId::ExperienceCard(i);
            let height = self.place(id, None, Some(id), (self.x, self.y, self.content), lines);
            self.gap(height + 1);
        }
        self.gap(2);
    }

    fn projects(&mut self) {
        self.heading(Section::Projects, "Featured Projects", false);
        let count = content::PROJECTS.len() as u16;

        if self.wide() {
            let gutter = 2;
            let column = (self.content - gutter * (count - 1)) / count;
            let top = self.y;
            let mut tallest = 0;
            for (i, project) in content::PROJECTS.iter().enumerate() {
                let x = self.x + (column + gutter) * i as u16;
                let lines = project_card(i, project, column);
                let id = ElementId::ProjectCard(i);
                tallest = tallest.max(self.place(id, None, Some(id), (x, top, column), lines));
            }
            self.gap(tallest + 1);
        } else {
            for (i, project) in content::PROJECTS.iter().enumerate() {
                let lines = project_card(i, project, self.content);
                let id = ElementId::ProjectCard(i);
                let height = self.place(id, None, Some(id), (self.x, self.y, self.content), lines);
                self.gap(height + 1);
            }
        }
        self.gap(2);
    }

    fn journey(&mut self) {
        self.heading(Section::Journey, "Professional Journey", true);
        self.gap(1);

        let wide = self.wide();
        let (rail_x, card_width) = if wide {
            (self.x + self.content / 2, self.content / 2 - 3)
        } else {
            (self.x + 1, self.content.saturating_sub(4))
        };

        let top = self.y;
        let mut entries = vec![];
        let mut dots = vec![];
        for (i, entry) in content::TIMELINE.iter().enumerate() {
            let lines = timeline_card(i, entry, card_width);
            let height = lines.len() as u16;
            let card_x = match (wide, i % 2) {
                (true, 0) => rail_x + 3,
                (true, _) => rail_x - 2 - card_width,
                (false, _) => rail_x + 3,
            };
            dots.push(if wide { self.y + height / 2 } else { self.y + 1 });
            entries.push(Block {
                id: ElementId::TimelineEntry(i),
                group: None,
                target: Some(ElementId::TimelineCard(i)),
                area: DocRect {
                    x: card_x,
                    y: self.y,
                    width: card_width,
                    height,
                },
                lines,
            });
            self.gap(height + 2);
        }

        let rail = (top..self.y)
            .map(|row| {
                let glyph = if dots.contains(&row) { "●" } else { "│" };
                DocLine::new(vec![DocSpan::new(glyph, Role::Rail)])
            })
            .collect();
        self.place(ElementId::TimelineRail, None, None, (rail_x, top, 1), rail);
        self.blocks.append(&mut entries);
        self.gap(2);
    }

    fn finish(self) -> Document {
        Document {
            width: self.width,
            height: self.y,
            blocks: self.blocks,
            anchors: self.anchors,
        }
    }
}

fn experience_card(i: usize, entry: &ExperienceEntry, width: u16) -> Vec<DocLine> {
    let inner = width.saturating_sub(4).max(1);
    let mut lines = vec![
        DocLine::new(vec![DocSpan::new(entry.title, Role::Title)]),
        DocLine::blank(),
    ];
    lines.extend(paragraph(entry.description, inner, Role::Muted));
    lines.push(DocLine::blank());
    lines.extend(pills(entry.skills, PillGroup::Experience(i), inner));
    frame(lines, width)
}

fn project_card(i: usize, project: &ProjectEntry, width: u16) -> Vec<DocLine> {
    let inner = width.saturating_sub(4).max(1);
    let mut lines: Vec<DocLine> = wrap_words(project.name, usize::from(inner))
        .into_iter()
        .map(|name| {
            DocLine::new(vec![
                DocSpan::new(name, Role::Link).targeting(ElementId::ProjectLink(i))
            ])
        })
        .collect();
    lines.push(DocLine::blank());
    lines.extend(paragraph(project.description, inner, Role::Muted));
    lines.push(DocLine::blank());
    lines.extend(pills(project.skills, PillGroup::Project(i), inner));
    frame(lines, width)
}

fn timeline_card(i: usize, entry: &TimelineEntry, width: u16) -> Vec<DocLine> {
    let inner = width.saturating_sub(4).max(1);
    let mut lines = vec![DocLine::new(vec![DocSpan::new(entry.date, Role::Date)])];
    lines.extend(paragraph(entry.role, inner, Role::Title));
    lines.push(DocLine::new(vec![
        DocSpan::new(entry.company, Role::Muted),
        DocSpan::new(" • ", Role::Muted),
        DocSpan::new(entry.employment_type, Role::Muted),
    ]));
    lines.extend(paragraph(entry.location, inner, Role::Muted));
    lines.push(DocLine::blank());
    lines.extend(pills(entry.skills, PillGroup::Timeline(i), inner));
    frame(lines, width)
}
