//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the paging state
//! machines. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - A `Controller` that performs the animated programmatic scrolls the
//!   engine requests, and feeds settle events back into it
//! - Tween helpers for the scroll animation itself
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui
//! bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod controller;
mod key;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use key::CarouselKey;
pub use tween::{Easing, ScrollTween};
