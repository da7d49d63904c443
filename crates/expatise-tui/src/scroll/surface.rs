//! L4 Atomic Layer: Geometry of a horizontally scrollable surface
//!
//! The scroller reads and writes the surface only through this trait, so it
//! can run against the terminal row or against a fake in tests.

/// A horizontally scrollable container
///
/// Offsets are not clamped by the surface: during a rubber-band excursion
/// the scroller stores values below 0 or above [`max_scroll_offset`].
///
/// [`max_scroll_offset`]: ScrollSurface::max_scroll_offset
pub trait ScrollSurface {
    /// Current scroll offset
    fn scroll_offset(&self) -> f64;

    fn set_scroll_offset(&mut self, offset: f64);

    /// Total width of the content
    fn scroll_width(&self) -> f64;

    /// Width of the visible viewport
    fn client_width(&self) -> f64;

    /// Left edge of the container in pointer coordinates
    fn left_offset(&self) -> f64;

    /// Largest valid offset, never negative
    fn max_scroll_offset(&self) -> f64 {
        (self.scroll_width() - self.client_width()).max(0.0)
    }
}

/// How far `offset` lies outside `[0, max]`, 0.0 when inside
#[inline]
pub fn overscroll(offset: f64, max: f64) -> f64 {
    if offset < 0.0 {
        -offset
    } else if offset > max {
        offset - max
    } else {
        0.0
    }
}
