//! Declarative motion for page elements.
//!
//! Each animated element is described by a [`MotionSpec`]: what triggers it,
//! where it starts, and how it travels to rest. The runtime side is two tiny
//! state machines per element: [`Reveal`] (pending, revealed) and
//! [`Interaction`] (neutral, hovered, pressed). Visual properties are
//! derived from those states and the clock; they are never stored.

use std::time::{Duration, Instant};

use crate::domain::element::ElementId;

/// Delay added per timeline entry so later entries animate in after earlier ones.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Tween duration used when a preset does not name one.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

/// Presets are authored in CSS pixels; the terminal draws whole rows.
pub const PX_PER_ROW: f32 = 16.0;

/// Reveal delay of the timeline entry at `index`.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// Animatable visual properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub opacity: f32,
    /// Vertical offset in CSS pixels; positive is below the resting position.
    pub offset_y: f32,
    pub scale: f32,
}

impl Visual {
    pub const REST: Visual = Visual {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    pub const fn faded(offset_y: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_y,
            scale: 1.0,
        }
    }

    pub fn lerp(from: Visual, to: Visual, t: f32) -> Visual {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Visual {
            opacity: mix(from.opacity, to.opacity).clamp(0.0, 1.0),
            offset_y: mix(from.offset_y, to.offset_y),
            scale: mix(from.scale, to.scale),
        }
    }

    /// Offset rounded to terminal rows.
    pub fn offset_rows(&self) -> i32 {
        (self.offset_y / PX_PER_ROW).round() as i32
    }

    pub fn scaled(self, factor: f32) -> Visual {
        Visual {
            scale: self.scale * factor,
            ..self
        }
    }
}

/// How an element travels from its initial visual to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Ease-out cubic over `duration`.
    Tween { delay: Duration, duration: Duration },
    /// Damped spring with unit displacement.
    Spring {
        delay: Duration,
        stiffness: f32,
        damping: f32,
        mass: f32,
    },
}

impl Transition {
    pub const fn tween(duration: Duration) -> Self {
        Transition::Tween {
            delay: Duration::ZERO,
            duration,
        }
    }

    pub const fn spring(stiffness: f32, damping: f32) -> Self {
        Transition::Spring {
            delay: Duration::ZERO,
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    pub fn with_delay(self, delay: Duration) -> Self {
        match self {
            Transition::Tween { duration, .. } => Transition::Tween { delay, duration },
            Transition::Spring {
                stiffness,
                damping,
                mass,
                ..
            } => Transition::Spring {
                delay,
                stiffness,
                damping,
                mass,
            },
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            Transition::Tween { delay, .. } | Transition::Spring { delay, .. } => *delay,
        }
    }

    /// Time from trigger until the element is at rest.
    pub fn total(&self) -> Duration {
        match self {
            Transition::Tween { delay, duration } => *delay + *duration,
            Transition::Spring { delay, .. } => {
                let (omega, zeta) = self.spring_params();
                // envelope e^(-zeta*omega*t) below 1%
                let settle = 4.605_17 / (zeta.min(1.0) * omega);
                *delay + Duration::from_secs_f32(settle)
            }
        }
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }

    /// Fraction of the way to rest, `0.0` before the delay has passed and
    /// exactly `1.0` once complete. Springs may overshoot in between.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.is_complete(elapsed) {
            return 1.0;
        }
        let Some(t) = elapsed.checked_sub(self.delay()) else {
            return 0.0;
        };
        let t = t.as_secs_f32();

        match self {
            Transition::Tween { duration, .. } => {
                let d = duration.as_secs_f32();
                if d <= f32::EPSILON {
                    return 1.0;
                }
                let x = (t / d).clamp(0.0, 1.0);
                1.0 - (1.0 - x).powi(3)
            }
            Transition::Spring { .. } => {
                let (omega, zeta) = self.spring_params();
                if zeta < 1.0 {
                    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
                    let envelope = (-zeta * omega * t).exp();
                    1.0 - envelope
                        * ((omega_d * t).cos() + (zeta * omega / omega_d) * (omega_d * t).sin())
                } else {
                    1.0 - (-omega * t).exp() * (1.0 + omega * t)
                }
            }
        }
    }

    /// Natural frequency and damping ratio.
    fn spring_params(&self) -> (f32, f32) {
        match self {
            Transition::Spring {
                stiffness,
                damping,
                mass,
                ..
            } => {
                let omega = (stiffness / mass).sqrt();
                let zeta = damping / (2.0 * (stiffness * mass).sqrt());
                (omega, zeta)
            }
            Transition::Tween { .. } => (1.0, 1.0),
        }
    }
}

/// What starts a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Fires once when the page mounts, wherever the element is.
    Mount,
    /// Fires once when the element first intersects the viewport.
    InView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSpec {
    pub trigger: Trigger,
    pub from: Visual,
    pub transition: Transition,
}

impl MotionSpec {
    pub fn visual_at(&self, reveal: &Reveal, now: Instant) -> Visual {
        match reveal {
            Reveal::Pending => self.from,
            Reveal::Revealed { at } => {
                let elapsed = now.saturating_duration_since(*at);
                Visual::lerp(self.from, Visual::REST, self.transition.progress(elapsed))
            }
        }
    }

    pub fn is_settled(&self, reveal: &Reveal, now: Instant) -> bool {
        match reveal {
            Reveal::Pending => false,
            Reveal::Revealed { at } => self
                .transition
                .is_complete(now.saturating_duration_since(*at)),
        }
    }
}

/// Fire-once reveal flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Pending,
    Revealed {
        at: Instant,
    },
}

impl Reveal {
    pub fn is_revealed(&self) -> bool {
        matches!(self, Reveal::Revealed { .. })
    }

    /// Applies an intersection report. Returns `true` only for the single
    /// pending to revealed transition; later reports, including the element
    /// leaving the viewport, change nothing.
    pub fn observe(&mut self, intersecting: bool, now: Instant) -> bool {
        match self {
            Reveal::Pending if intersecting => {
                *self = Reveal::Revealed { at: now };
                true
            }
            _ => false,
        }
    }

    pub fn mount(&mut self, now: Instant) -> bool {
        self.observe(true, now)
    }
}

/// Momentary pointer state. Nothing here outlives the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Neutral,
    Hovered,
    Pressed,
}

impl Interaction {
    pub fn pointer_enter(self) -> Self {
        match self {
            Interaction::Neutral => Interaction::Hovered,
            other => other,
        }
    }

    pub fn pointer_leave(self) -> Self {
        Interaction::Neutral
    }

    pub fn press(self) -> Self {
        Interaction::Pressed
    }

    /// Release with the pointer still over the element.
    pub fn release(self) -> Self {
        match self {
            Interaction::Pressed => Interaction::Hovered,
            other => other,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Interaction::Neutral
    }
}

/// Hover and press responses of an interactive element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub hover_scale: Option<f32>,
    pub press_scale: Option<f32>,
    /// Changes color on hover without scaling.
    pub highlight: bool,
}

impl Gesture {
    const LIFT: Gesture = Gesture {
        hover_scale: Some(1.05),
        press_scale: None,
        highlight: false,
    };
    const LINK: Gesture = Gesture {
        hover_scale: Some(1.05),
        press_scale: Some(0.95),
        highlight: true,
    };
    const CARD: Gesture = Gesture {
        hover_scale: Some(1.02),
        press_scale: None,
        highlight: false,
    };
    const PILL: Gesture = Gesture {
        hover_scale: None,
        press_scale: Some(0.97),
        highlight: false,
    };
    const TITLE_LINK: Gesture = Gesture {
        hover_scale: None,
        press_scale: None,
        highlight: true,
    };

    pub fn scale(&self, interaction: Interaction) -> f32 {
        match interaction {
            Interaction::Neutral => 1.0,
            Interaction::Hovered => self.hover_scale.unwrap_or(1.0),
            // hover keeps applying underneath a press
            Interaction::Pressed => self.press_scale.or(self.hover_scale).unwrap_or(1.0),
        }
    }

    /// Whether the element looks different in `interaction`.
    pub fn responds_to(&self, interaction: Interaction) -> bool {
        !interaction.is_neutral() && (self.highlight || self.scale(interaction) != 1.0)
    }
}

/// Reveal preset of an element, if it animates at all.
pub fn motion_for(id: ElementId) -> Option<MotionSpec> {
    let in_view = |from: Visual, transition: Transition| MotionSpec {
        trigger: Trigger::InView,
        from,
        transition,
    };
    let on_mount = |from: Visual, transition: Transition| MotionSpec {
        trigger: Trigger::Mount,
        from,
        transition,
    };
    let fade_in_after = |millis: u64| {
        on_mount(
            Visual::faded(0.0),
            Transition::tween(DEFAULT_DURATION).with_delay(Duration::from_millis(millis)),
        )
    };

    let spec = match id {
        ElementId::Nav => on_mount(
            Visual {
                offset_y: -100.0,
                ..Visual::REST
            },
            Transition::spring(100.0, 10.0),
        ),
        ElementId::Hero => in_view(
            Visual::faded(20.0),
            Transition::tween(Duration::from_millis(500)),
        ),
        ElementId::Portrait => on_mount(
            Visual {
                opacity: 0.0,
                offset_y: 0.0,
                scale: 0.8,
            },
            Transition::tween(Duration::from_millis(500)),
        ),
        ElementId::Greeting => fade_in_after(100),
        ElementId::Name => fade_in_after(200),
        ElementId::Headline | ElementId::About => fade_in_after(300),
        ElementId::Socials => fade_in_after(400),
        ElementId::HeroSkills => fade_in_after(500),
        ElementId::SectionHeading(_) | ElementId::ProjectCard(_) => {
            in_view(Visual::faded(20.0), Transition::tween(DEFAULT_DURATION))
        }
        ElementId::ExperienceCard(_) => in_view(
            Visual::faded(20.0),
            Transition::tween(Duration::from_millis(200)),
        ),
        ElementId::TimelineEntry(index) => in_view(
            Visual::faded(50.0),
            Transition::tween(Duration::from_millis(500)).with_delay(stagger_delay(index)),
        ),
        _ => return None,
    };
    Some(spec)
}

/// Pointer preset of an element, if it reacts to the pointer.
pub fn gesture_for(id: ElementId) -> Option<Gesture> {
    match id {
        ElementId::NavTitle | ElementId::NavLink(_) => Some(Gesture::LIFT),
        ElementId::SocialLink(_) => Some(Gesture::LINK),
        ElementId::ProjectLink(_) => Some(Gesture::TITLE_LINK),
        ElementId::ExperienceCard(_) | ElementId::ProjectCard(_) | ElementId::TimelineCard(_) => {
            Some(Gesture::CARD)
        }
        ElementId::Pill(..) => Some(Gesture::PILL),
        _ => None,
    }
}
