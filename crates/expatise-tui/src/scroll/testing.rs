//! Test doubles for the scroll capabilities

use super::scheduler::{FrameHandle, FrameScheduler};
use super::surface::ScrollSurface;

/// In-memory surface with fixed geometry
#[derive(Debug, Clone)]
pub struct FakeSurface {
    pub offset: f64,
    pub scroll_width: f64,
    pub client_width: f64,
    pub left: f64,
}

impl FakeSurface {
    pub fn new(scroll_width: f64, client_width: f64) -> Self {
        Self {
            offset: 0.0,
            scroll_width,
            client_width,
            left: 0.0,
        }
    }

    pub fn at(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_left(mut self, left: f64) -> Self {
        self.left = left;
        self
    }
}

impl ScrollSurface for FakeSurface {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn scroll_width(&self) -> f64 {
        self.scroll_width
    }

    fn client_width(&self) -> f64 {
        self.client_width
    }

    fn left_offset(&self) -> f64 {
        self.left
    }
}

/// Scheduler that only fires when the test says so
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pub pending: Vec<FrameHandle>,
    pub requested: usize,
    pub cancelled: usize,
}

impl ManualScheduler {
    /// Deliver everything that is pending
    pub fn fire(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle::from_raw(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|pending| *pending != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}
