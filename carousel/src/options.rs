use alloc::sync::Arc;

use crate::{Rgba, SlideId};

/// A callback fired when a user gesture settles on a new page.
///
/// The argument is the new settled index.
pub type OnIndexChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// A callback fired when the visible slide is tapped.
pub type OnItemActivateCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// This type is designed to be cheap to clone: callbacks are stored in
/// `Arc`s so adapters can update a few fields and call
/// `Carousel::set_options` without reallocating closures.
pub struct CarouselOptions<K = SlideId> {
    /// Number of slides. The engine never inspects slide content, only
    /// identity via `get_slide_key`.
    pub count: usize,

    /// Page width in the scroll axis, supplied by the viewport.
    pub page_width: u32,

    /// Stable identity for the slide at an index, used to key load state.
    ///
    /// Identity should follow the image reference: when a slot starts
    /// showing a different image, its key must change.
    pub get_slide_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    /// Index shown when the carousel is created.
    pub initial_index: usize,

    /// Fired exactly once per user-gesture settle that lands on a new page.
    /// Never fired for programmatic scrolls, clamping, or list replacement.
    pub on_index_change: Option<OnIndexChangeCallback>,

    /// Fired when the visible slide is tapped.
    pub on_item_activate: Option<OnItemActivateCallback>,

    /// Page height hint for the render layer. Cosmetic.
    pub page_height: u32,

    /// Whether navigation arrows may render at all. Even when `true`,
    /// arrows require more than one slide.
    pub show_navigation_arrows: bool,

    /// Engages the per-slide loading overlay. When `false`, images render
    /// directly and the load tracker is disengaged entirely.
    pub show_placeholder: bool,

    /// Background behind a still-loading slide. Cosmetic.
    pub placeholder_color: Rgba,

    /// Spinner tint. Cosmetic.
    pub loader_color: Rgba,

    /// Override for the previous-arrow visual; `None` falls back to a
    /// built-in chevron glyph.
    pub prev_arrow_glyph: Option<Arc<str>>,

    /// Override for the next-arrow visual; `None` falls back to a built-in
    /// chevron glyph.
    pub next_arrow_glyph: Option<Arc<str>>,

    /// Forwarded to the scroll container untouched.
    pub show_scroll_indicator: bool,
}

impl<K> Clone for CarouselOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            page_width: self.page_width,
            get_slide_key: Arc::clone(&self.get_slide_key),
            initial_index: self.initial_index,
            on_index_change: self.on_index_change.clone(),
            on_item_activate: self.on_item_activate.clone(),
            page_height: self.page_height,
            show_navigation_arrows: self.show_navigation_arrows,
            show_placeholder: self.show_placeholder,
            placeholder_color: self.placeholder_color,
            loader_color: self.loader_color,
            prev_arrow_glyph: self.prev_arrow_glyph.clone(),
            next_arrow_glyph: self.next_arrow_glyph.clone(),
            show_scroll_indicator: self.show_scroll_indicator,
        }
    }
}

impl CarouselOptions<SlideId> {
    /// Creates options for a carousel keyed by index (`SlideId = u64`).
    ///
    /// Index keying is only correct while slides are never replaced in
    /// place; use `new_with_key` to tie load state to image identity.
    pub fn new(count: usize, page_width: u32) -> Self {
        Self::new_with_key(count, page_width, |i| i as u64)
    }
}

impl<K> CarouselOptions<K> {
    /// Creates options with a custom slide identity mapping.
    pub fn new_with_key(
        count: usize,
        page_width: u32,
        get_slide_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            page_width,
            get_slide_key: Arc::new(get_slide_key),
            initial_index: 0,
            on_index_change: None,
            on_item_activate: None,
            page_height: 220,
            show_navigation_arrows: true,
            show_placeholder: true,
            placeholder_color: Rgba(0xE0E0E0FF),
            loader_color: Rgba(0x007AFFFF),
            prev_arrow_glyph: None,
            next_arrow_glyph: None,
            show_scroll_indicator: false,
        }
    }

    pub fn with_get_slide_key(
        mut self,
        get_slide_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_slide_key = Arc::new(get_slide_key);
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_on_index_change(
        mut self,
        on_index_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_index_change = on_index_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_item_activate(
        mut self,
        on_item_activate: Option<impl Fn() + Send + Sync + 'static>,
    ) -> Self {
        self.on_item_activate = on_item_activate.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_page_height(mut self, page_height: u32) -> Self {
        self.page_height = page_height;
        self
    }

    pub fn with_show_navigation_arrows(mut self, show_navigation_arrows: bool) -> Self {
        self.show_navigation_arrows = show_navigation_arrows;
        self
    }

    pub fn with_show_placeholder(mut self, show_placeholder: bool) -> Self {
        self.show_placeholder = show_placeholder;
        self
    }

    pub fn with_placeholder_color(mut self, placeholder_color: Rgba) -> Self {
        self.placeholder_color = placeholder_color;
        self
    }

    pub fn with_loader_color(mut self, loader_color: Rgba) -> Self {
        self.loader_color = loader_color;
        self
    }

    pub fn with_prev_arrow_glyph(mut self, glyph: Option<impl Into<Arc<str>>>) -> Self {
        self.prev_arrow_glyph = glyph.map(Into::into);
        self
    }

    pub fn with_next_arrow_glyph(mut self, glyph: Option<impl Into<Arc<str>>>) -> Self {
        self.next_arrow_glyph = glyph.map(Into::into);
        self
    }

    pub fn with_show_scroll_indicator(mut self, show_scroll_indicator: bool) -> Self {
        self.show_scroll_indicator = show_scroll_indicator;
        self
    }
}

impl<K> core::fmt::Debug for CarouselOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("count", &self.count)
            .field("page_width", &self.page_width)
            .field("initial_index", &self.initial_index)
            .field("page_height", &self.page_height)
            .field("show_navigation_arrows", &self.show_navigation_arrows)
            .field("show_placeholder", &self.show_placeholder)
            .field("placeholder_color", &self.placeholder_color)
            .field("loader_color", &self.loader_color)
            .field("show_scroll_indicator", &self.show_scroll_indicator)
            .finish_non_exhaustive()
    }
}
