use carousel::PageMetrics;

use crate::{CarouselKey, Easing, ScrollTween};

const DEFAULT_SCROLL_DURATION_MS: u64 = 250;

/// A framework-neutral controller that wraps a `carousel::Carousel` and owns
/// the animated programmatic scroll the engine requests.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `request_index` / `prev` / `next` for controlled-index changes and
///   arrow taps
/// - `on_user_scroll` / `on_user_scroll_settled` when the viewport reports
///   touch scrolling
/// - `tick(now_ms)` each frame/timer tick; apply the returned offset to the
///   real scroll container
///
/// Settle events reach the engine from exactly two places: a finished
/// animation (silent) and `on_user_scroll_settled` (may fire
/// `on_index_change`).
#[derive(Clone, Debug)]
pub struct Controller<K> {
    c: carousel::Carousel<K>,
    offset: u64,
    tween: Option<ScrollTween>,
    scroll_duration_ms: u64,
    easing: Easing,
}

impl<K: CarouselKey> Controller<K> {
    pub fn new(options: carousel::CarouselOptions<K>) -> Self {
        let c = carousel::Carousel::new(options);
        let offset = PageMetrics::new(c.page_width()).offset_for_index(c.settled_index());
        Self {
            c,
            offset,
            tween: None,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            easing: Easing::default(),
        }
    }

    pub fn carousel(&self) -> &carousel::Carousel<K> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut carousel::Carousel<K> {
        &mut self.c
    }

    pub fn into_carousel(self) -> carousel::Carousel<K> {
        self.c
    }

    /// The offset the scroll container should currently sit at.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn set_scroll_duration_ms(&mut self, duration_ms: u64) {
        self.scroll_duration_ms = duration_ms.max(1);
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Requests that `index` become the visible page, animating there.
    ///
    /// A request while an animation is in flight retargets it: the latest
    /// request wins and the viewport glides from wherever it currently is.
    /// Returns the target offset, or `None` when nothing needs to move.
    pub fn request_index(&mut self, index: usize, now_ms: u64) -> Option<u64> {
        let target = self.c.request_index(index)?;
        self.animate_to(target, now_ms);
        Some(target)
    }

    /// Previous-arrow tap; a no-op at the first page.
    pub fn prev(&mut self, now_ms: u64) -> Option<u64> {
        let target = self.c.prev()?;
        self.animate_to(target, now_ms);
        Some(target)
    }

    /// Next-arrow tap; a no-op at the last page.
    pub fn next(&mut self, now_ms: u64) -> Option<u64> {
        let target = self.c.next()?;
        self.animate_to(target, now_ms);
        Some(target)
    }

    fn animate_to(&mut self, target: u64, now_ms: u64) {
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, target, self.scroll_duration_ms),
            None => {
                self.tween = Some(ScrollTween::new(
                    self.offset,
                    target,
                    now_ms,
                    self.scroll_duration_ms,
                    self.easing,
                ));
            }
        }
    }

    /// Advances the controller.
    ///
    /// While an animation is active, returns the offset for this frame;
    /// when it finishes, the final offset is fed to the engine as a
    /// (silent) programmatic settle. Returns `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let tween = self.tween?;
        let off = tween.sample(now_ms);
        self.offset = off;

        if tween.is_done(now_ms) {
            self.tween = None;
            self.c.settle_scroll(off);
        }

        Some(off)
    }

    /// Call this while the user is dragging or momentum is running.
    ///
    /// User input supersedes a programmatic scroll, so any active animation
    /// is dropped; the eventual settle decides where things actually are.
    pub fn on_user_scroll(&mut self, offset: u64) {
        self.cancel_animation();
        self.offset = offset;
    }

    /// Call this when the viewport reports that momentum ended.
    ///
    /// This is the gesture path: the engine may fire `on_index_change`,
    /// exactly once, if the viewport came to rest on a new page.
    pub fn on_user_scroll_settled(&mut self, offset: u64) {
        self.cancel_animation();
        self.offset = offset;
        self.c.settle_scroll(offset);
    }
}
