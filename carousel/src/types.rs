/// Per-slide image load lifecycle.
///
/// A failed load is an explicit state so the render layer can stop the
/// spinner and offer a retry (`begin_load` restarts a `Failed` slot).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

/// A packed `0xRRGGBBAA` color.
///
/// Purely cosmetic: the engine forwards it to the render layer untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba(pub u32);

pub type SlideId = u64;
