//! A headless paging carousel engine.
//!
//! For adapter-level utilities (animated programmatic scrolling), see the
//! `carousel-adapter` crate.
//!
//! This crate focuses on the state machines behind a one-image-per-page
//! carousel: offset → page-index mapping for a snap-to-page viewport,
//! reconciling an externally controlled index with user swipes, navigation
//! arrow availability, and per-slide image load tracking.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the page width of a horizontal, snap-to-page scroll container
//! - scroll-settle events carrying the physical offset once momentum ends
//! - an imperative "animated scroll to offset" capability
//! - per-slide image load start/end events
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod key;
mod loading;
mod navigation;
mod options;
mod paging;
mod reconciler;
mod state;
mod types;


pub use carousel::Carousel;
pub use navigation::{NavAvailability, arrows_enabled};
pub use options::{CarouselOptions, OnIndexChangeCallback, OnItemActivateCallback};
pub use paging::PageMetrics;
pub use state::PagingState;
pub use types::{LoadPhase, Rgba, SlideId};

#[doc(hidden)]
pub use key::LoadStateKey;
