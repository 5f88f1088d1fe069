/// The animated leg of a programmatic page change.
///
/// A tween owns one glide between two page offsets. Superseding an in-flight
/// scroll is `retarget`: the glide restarts from wherever the offset
/// currently is, so the viewport never jumps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTween {
    from: u64,
    to: u64,
    start_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl ScrollTween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// The offset the glide started from.
    pub fn origin(&self) -> u64 {
        self.from
    }

    /// The page offset this tween is heading for.
    pub fn target(&self) -> u64 {
        self.to
    }

    /// Animation progress in `[0, 1]`, before easing.
    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// The offset at `now_ms`; exactly `target()` once the tween is done.
    pub fn sample(&self, now_ms: u64) -> u64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now_ms));
        // Pages scroll both directions; interpolate over the signed span.
        let span = self.to as i64 - self.from as i64;
        let moved = (span as f32 * eased) as i64;
        self.from.saturating_add_signed(moved)
    }

    /// Points an in-flight tween at a new target.
    ///
    /// The current sampled offset becomes the new origin: the latest request
    /// wins and the viewport glides instead of jumping.
    pub fn retarget(&mut self, now_ms: u64, new_to: u64, duration_ms: u64) {
        *self = Self::new(self.sample(now_ms), new_to, now_ms, duration_ms, self.easing);
    }
}

/// Easing curves for the scroll glide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOutCubic => {
                let u = 2.0 - 2.0 * t;
                1.0 - u * u * u / 2.0
            }
        }
    }
}
