//! L4 Atomic Layer: Animation frame scheduling
//!
//! The scroller asks a [`FrameScheduler`] for frames and cancels them when a
//! new phase takes over. The host later delivers each requested handle back
//! to the scroller together with the current time.

/// Identifies one requested animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Request/cancel pair for per-frame callbacks
pub trait FrameScheduler {
    /// Request one frame; the returned handle is delivered once unless cancelled
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a requested frame; unknown or already delivered handles are ignored
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler driven by the UI loop
///
/// Requested frames become due on the next tick. The loop calls
/// [`TickScheduler::take_due`] once per tick and delivers the handles.
#[derive(Debug, Default)]
pub struct TickScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a frame is waiting; the loop uses this to pick its tick rate
    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Remove and return every frame due on this tick
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

impl FrameScheduler for TickScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|pending| *pending != handle);
    }
}
