/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Pure decision function: whether to render this loop based on coalesced inputs.
    /// Frame ticks only draw while something is still moving.
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_frame_tick: bool, animating: bool) -> bool {
        queued_render_reqs > 0 || (saw_frame_tick && animating)
    }

    /// Pure decision function: coalesce multiple resizes into last-only
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}
