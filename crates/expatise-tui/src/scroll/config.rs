//! L4 Atomic Layer: Configuration types for the momentum scroller
//!
//! Re-exports configuration from expatise-core and derives the physics
//! quantities the state machine needs from it.

use std::time::Duration;

// Re-export config types from core
pub use expatise_core::{EasingType, ScrollConfig};

/// Extension trait for ScrollConfig with physics helpers
pub trait ScrollConfigExt {
    /// Snap-back animation duration as Duration
    fn snap_back_duration(&self) -> Duration;

    /// Frame interval while an animation is running
    fn animation_tick_duration(&self) -> Duration;

    /// Velocity multiplier for an offset `past` units beyond an edge
    ///
    /// 1.0 at the edge, falling linearly to `1 - edge_damping` at the
    /// overshoot limit and staying there beyond it.
    fn edge_friction(&self, past: f64) -> f64;

    /// Whether a release at `velocity` starts momentum
    fn should_fling(&self, velocity: f64) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn snap_back_duration(&self) -> Duration {
        Duration::from_millis(self.snap_back_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn edge_friction(&self, past: f64) -> f64 {
        if past <= 0.0 {
            return 1.0;
        }
        let stretch = (past / self.overshoot).min(1.0);
        1.0 - self.edge_damping * stretch
    }

    #[inline]
    fn should_fling(&self, velocity: f64) -> bool {
        velocity.abs() > self.fling_threshold
    }
}
