use alloc::sync::Arc;

use crate::key::LoadStateKey;
use crate::loading::LoadTracker;
use crate::reconciler::IndexReconciler;
use crate::{
    CarouselOptions, LoadPhase, NavAvailability, PageMetrics, PagingState, Rgba, SlideId,
    navigation,
};

const PREV_ARROW_GLYPH: &str = "‹";
const NEXT_ARROW_GLYPH: &str = "›";

/// A headless paging carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or slide content.
/// - Your adapter drives it by forwarding viewport events (scroll settles,
///   image load starts/ends, taps) and performing the scroll targets it
///   returns.
/// - Everything the render layer needs is exposed as queries
///   (`nav`, `prev_arrow_visible`, `is_loading`, ...).
///
/// There is exactly one entry point for index changes, `request_index`;
/// arrow taps re-enter it. The only path that invokes `on_index_change` is a
/// settle event caused by a user gesture, once per settled transition.
///
/// For animated programmatic scrolling, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<K = SlideId> {
    options: CarouselOptions<K>,
    reconciler: IndexReconciler,
    loads: LoadTracker<K>,
}

fn check_page_width(page_width: u32) {
    if page_width == 0 {
        cwarn!("Carousel: page_width is 0; settle offsets cannot map to a page");
        debug_assert!(
            page_width > 0,
            "the viewport must supply a positive page width"
        );
    }
}

impl<K: LoadStateKey> Carousel<K> {
    pub fn new(options: CarouselOptions<K>) -> Self {
        check_page_width(options.page_width);
        let metrics = PageMetrics::new(options.page_width);
        let reconciler = IndexReconciler::new(metrics, options.count, options.initial_index);
        cdebug!(
            count = options.count,
            page_width = options.page_width,
            initial_index = options.initial_index,
            "Carousel::new"
        );
        Self {
            options,
            reconciler,
            loads: LoadTracker::new(),
        }
    }

    pub fn options(&self) -> &CarouselOptions<K> {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselOptions<K>) {
        let prev_count = self.options.count;
        let prev_width = self.options.page_width;
        let get_slide_key_unchanged =
            Arc::ptr_eq(&self.options.get_slide_key, &options.get_slide_key);
        self.options = options;
        ctrace!(
            count = self.options.count,
            page_width = self.options.page_width,
            "Carousel::set_options"
        );

        if self.options.page_width != prev_width {
            check_page_width(self.options.page_width);
            self.reconciler
                .set_metrics(PageMetrics::new(self.options.page_width));
        }
        if self.options.count != prev_count {
            self.reconciler.resize(self.options.count);
            self.loads.clear();
        } else if !get_slide_key_unchanged {
            // Same length, new identities: a full list replacement.
            self.reconciler.resize(self.options.count);
            self.loads.clear();
        }
    }

    /// Clones the current options, applies `f`, then delegates to
    /// `set_options`, which decides what needs re-deriving.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Replaces the slide list length.
    ///
    /// Both indexes re-clamp into the new bounds and load state is dropped;
    /// `on_index_change` stays silent: list-identity changes are not
    /// index-change events.
    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        cdebug!(count, "Carousel::set_count");
        self.options.count = count;
        self.reconciler.resize(count);
        self.loads.clear();
    }

    /// Re-derives paging math after a viewport resize.
    pub fn set_page_width(&mut self, page_width: u32) {
        if self.options.page_width == page_width {
            return;
        }
        check_page_width(page_width);
        self.options.page_width = page_width;
        self.reconciler.set_metrics(PageMetrics::new(page_width));
    }

    pub fn set_on_index_change(
        &mut self,
        on_index_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.options.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_item_activate(
        &mut self,
        on_item_activate: Option<impl Fn() + Send + Sync + 'static>,
    ) {
        self.options.on_item_activate = on_item_activate.map(|f| Arc::new(f) as _);
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    /// An empty carousel renders nothing: no pages, no navigation.
    pub fn is_empty(&self) -> bool {
        self.options.count == 0
    }

    /// The index the engine believes is actually visible (0 when empty).
    pub fn settled_index(&self) -> usize {
        self.reconciler.settled()
    }

    /// The last index asked for, by the caller or an arrow tap.
    pub fn requested_index(&self) -> usize {
        self.reconciler.requested()
    }

    /// Whether a programmatic scroll is in flight.
    pub fn is_scrolling(&self) -> bool {
        self.reconciler.is_scrolling()
    }

    pub fn page_width(&self) -> u32 {
        self.options.page_width
    }

    pub fn page_height(&self) -> u32 {
        self.options.page_height
    }

    pub fn placeholder_color(&self) -> Rgba {
        self.options.placeholder_color
    }

    pub fn loader_color(&self) -> Rgba {
        self.options.loader_color
    }

    pub fn show_scroll_indicator(&self) -> bool {
        self.options.show_scroll_indicator
    }

    /// The single entry point for index changes.
    ///
    /// Returns the offset the surface should animate to, or `None` when no
    /// scroll is needed. Out-of-range requests clamp to the nearest bound.
    /// The latest request always wins: calling this while a scroll is in
    /// flight yields a fresh target for the adapter to retarget to.
    ///
    /// Never invokes `on_index_change`: a requested change is one the
    /// caller already knows about.
    pub fn request_index(&mut self, index: usize) -> Option<u64> {
        let target = self.reconciler.request(index);
        ctrace!(index, ?target, "Carousel::request_index");
        target
    }

    /// Feeds the viewport's scroll-settle event.
    ///
    /// Call this once momentum or a programmatic animation ends, with the
    /// physical offset the viewport came to rest at. Invokes
    /// `on_index_change` exactly once when the settle was a user gesture
    /// landing on a new page, and never otherwise.
    pub fn settle_scroll(&mut self, offset: u64) {
        if let Some(index) = self.reconciler.settle(offset) {
            cdebug!(offset, index, "Carousel::settle_scroll: gesture moved");
            if let Some(cb) = &self.options.on_index_change {
                cb(index);
            }
        }
    }

    /// Arrow tap: previous page.
    ///
    /// A no-op when `nav().can_go_prev` is false, so an out-of-bounds
    /// request never reaches the paging machinery and an unchanged index
    /// never animates. Otherwise routes through `request_index`.
    pub fn prev(&mut self) -> Option<u64> {
        if !self.nav().can_go_prev {
            return None;
        }
        self.request_index(self.settled_index() - 1)
    }

    /// Arrow tap: next page. Guarded like `prev`.
    pub fn next(&mut self) -> Option<u64> {
        if !self.nav().can_go_next {
            return None;
        }
        self.request_index(self.settled_index() + 1)
    }

    /// Tap on the visible slide.
    pub fn activate_slide(&self) {
        if let Some(cb) = &self.options.on_item_activate {
            cb();
        }
    }

    pub fn nav(&self) -> NavAvailability {
        NavAvailability::for_index(self.reconciler.settled(), self.options.count)
    }

    pub fn arrows_enabled(&self) -> bool {
        navigation::arrows_enabled(self.options.count, self.options.show_navigation_arrows)
    }

    pub fn prev_arrow_visible(&self) -> bool {
        self.arrows_enabled() && self.nav().can_go_prev
    }

    pub fn next_arrow_visible(&self) -> bool {
        self.arrows_enabled() && self.nav().can_go_next
    }

    pub fn prev_arrow_glyph(&self) -> &str {
        self.options
            .prev_arrow_glyph
            .as_deref()
            .unwrap_or(PREV_ARROW_GLYPH)
    }

    pub fn next_arrow_glyph(&self) -> &str {
        self.options
            .next_arrow_glyph
            .as_deref()
            .unwrap_or(NEXT_ARROW_GLYPH)
    }

    pub fn key_for(&self, index: usize) -> K {
        (self.options.get_slide_key)(index)
    }

    /// Image load started for the slide at `index`.
    ///
    /// Restarts `Ready` and `Failed` slots (a retry shows the spinner
    /// again). Ignored when the loading overlay is disengaged or the index
    /// is out of range.
    pub fn begin_load(&mut self, index: usize) {
        if !self.options.show_placeholder || index >= self.options.count {
            return;
        }
        ctrace!(index, "Carousel::begin_load");
        let key = self.key_for(index);
        self.loads.begin(key);
    }

    /// Image load finished for the slide at `index`. Idempotent.
    pub fn complete_load(&mut self, index: usize) {
        if !self.options.show_placeholder || index >= self.options.count {
            return;
        }
        ctrace!(index, "Carousel::complete_load");
        let key = self.key_for(index);
        self.loads.complete(key);
    }

    /// Image load failed for the slide at `index`.
    ///
    /// The spinner stops; `begin_load` starts a retry.
    pub fn fail_load(&mut self, index: usize) {
        if !self.options.show_placeholder || index >= self.options.count {
            return;
        }
        ctrace!(index, "Carousel::fail_load");
        let key = self.key_for(index);
        self.loads.fail(key);
    }

    /// Load phase of the slide at `index`; `None` before the first load
    /// start, or while the loading overlay is disengaged.
    pub fn load_phase(&self, index: usize) -> Option<LoadPhase> {
        if !self.options.show_placeholder || index >= self.options.count {
            return None;
        }
        self.loads.phase(&self.key_for(index))
    }

    /// Whether the render layer should show the loading indicator for the
    /// slide at `index`.
    pub fn is_loading(&self, index: usize) -> bool {
        if !self.options.show_placeholder || index >= self.options.count {
            return false;
        }
        self.loads.is_loading(&self.key_for(index))
    }

    /// Whether the slide at `index` has finished loading.
    pub fn is_ready(&self, index: usize) -> bool {
        if !self.options.show_placeholder || index >= self.options.count {
            return false;
        }
        self.loads.is_ready(&self.key_for(index))
    }

    /// Whether the last load attempt for the slide at `index` failed.
    pub fn is_failed(&self, index: usize) -> bool {
        if !self.options.show_placeholder || index >= self.options.count {
            return false;
        }
        self.loads.is_failed(&self.key_for(index))
    }

    /// Drops all recorded load phases; every slot starts over.
    pub fn reset_load_states(&mut self) {
        self.loads.clear();
    }

    /// Number of slots with a recorded load phase.
    pub fn load_state_len(&self) -> usize {
        self.loads.len()
    }

    /// Returns a snapshot of the paging state.
    pub fn paging_state(&self) -> PagingState {
        PagingState {
            requested_index: self.reconciler.requested(),
            settled_index: self.reconciler.settled(),
            is_scrolling: self.reconciler.is_scrolling(),
        }
    }

    /// Restores a previously captured paging snapshot (clamped into the
    /// current bounds). Never invokes `on_index_change`.
    ///
    /// A snapshot taken mid-scroll restores as still scrolling, so the next
    /// settle event stays silent.
    pub fn restore_paging_state(&mut self, state: PagingState) {
        self.reconciler
            .restore(state.requested_index, state.settled_index, state.is_scrolling);
    }
}
