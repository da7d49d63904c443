//! Momentum scrolling for the draggable card row
//!
//! Drag-to-scroll with a fling after release, rubber-band damping past the
//! edges and an eased snap-back into range.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `config` - Physics parameters (re-exported from expatise-core)
//! - `easing` - Easing curves for snap-back
//! - `timing` - Progress and interpolation helpers
//! - `surface` - Geometry capability the scroller writes to
//! - `scheduler` - Frame request/cancel capability
//!
//! ## L3 Molecular Layer
//! - `momentum` - The drag / momentum / snap-back state machine
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use expatise_tui::scroll::{DragScroller, ScrollConfig, TickScheduler};
//!
//! let mut scroller = DragScroller::new(ScrollConfig::default(), TickScheduler::new());
//!
//! // Pointer events from the host
//! scroller.pointer_down(x, Some(&row));
//! scroller.pointer_move(x, Some(&mut row));
//! scroller.pointer_up(Instant::now(), Some(&row));
//!
//! // Once per tick of the UI loop
//! scroller.tick(Instant::now(), Some(&mut row));
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod scheduler;
pub mod surface;
pub mod timing;

// L3 Molecular Layer
pub mod momentum;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient access
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
pub use momentum::{DragScroller, DragSession, Phase};
pub use scheduler::{FrameHandle, FrameScheduler, TickScheduler};
pub use surface::ScrollSurface;
