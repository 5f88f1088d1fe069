/// Availability of the previous/next navigation affordances.
///
/// Derived, never stored: recompute from the settled index and slide count
/// whenever either changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavAvailability {
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

impl NavAvailability {
    pub fn for_index(settled_index: usize, count: usize) -> Self {
        Self {
            can_go_prev: count > 0 && settled_index > 0,
            can_go_next: count > 0 && settled_index + 1 < count,
        }
    }
}

/// Whether navigation arrows render at all.
///
/// Requires the caller's opt-in flag and more than one slide: a single-slide
/// carousel never shows arrows, independent of the flag.
pub fn arrows_enabled(count: usize, show_navigation_arrows: bool) -> bool {
    show_navigation_arrows && count > 1
}
