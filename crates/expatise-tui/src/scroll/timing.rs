//! L4 Atomic Layer: Time and interpolation helpers for scroll animations
//!
//! Time is always passed in by the caller so animations can be driven by a
//! manual clock.

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) at `now` for an animation begun at `start`
///
/// A zero duration is complete immediately. A `now` earlier than `start`
/// counts as no progress.
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Linear interpolation between two offsets
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
