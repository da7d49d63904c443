//! L3 Molecular Layer: Drag-to-scroll with momentum, rubber-band and snap-back
//!
//! [`DragScroller`] turns pointer events into scroll offsets on a
//! [`ScrollSurface`]. After a fast release it keeps the row moving with an
//! exponentially decaying velocity, damps motion past either edge, and eases
//! an out-of-range row back into range once the motion dies down.
//!
//! Exactly one of drag, momentum or snap-back can be active at a time; the
//! [`Phase`] enum makes the other combinations unrepresentable.

use std::time::Instant;

use tracing::{debug, trace};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::EasingTypeExt;
use super::scheduler::{FrameHandle, FrameScheduler};
use super::surface::{overscroll, ScrollSurface};
use super::timing::{lerp, progress};

/// An in-progress pointer drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position relative to the container at drag start
    pub anchor_x: f64,
    /// Scroll offset at drag start
    pub scroll_anchor: f64,
    /// Pointer position at the previous event
    pub last_pointer_x: f64,
    /// Latest velocity estimate, columns per frame
    pub velocity: f64,
}

/// What the scroller is doing right now
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Dragging(DragSession),
    Momentum {
        velocity: f64,
        frame: FrameHandle,
    },
    SnapBack {
        from: f64,
        to: f64,
        started: Instant,
        frame: FrameHandle,
    },
}

impl Phase {
    /// Frame requested by the current animation, if any
    pub fn frame(&self) -> Option<FrameHandle> {
        match self {
            Phase::Momentum { frame, .. } | Phase::SnapBack { frame, .. } => Some(*frame),
            Phase::Idle | Phase::Dragging(_) => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Dragging(_) => "dragging",
            Phase::Momentum { .. } => "momentum",
            Phase::SnapBack { .. } => "snap-back",
        }
    }
}

/// Pointer-driven horizontal scroller
///
/// Feed it pointer events with [`pointer_down`](Self::pointer_down),
/// [`pointer_move`](Self::pointer_move), [`pointer_up`](Self::pointer_up) and
/// [`pointer_leave`](Self::pointer_leave), and deliver every frame handle the
/// scheduler hands out to [`on_frame`](Self::on_frame).
///
/// Passing `None` for the surface means the container is detached: pointer
/// handlers do nothing and a frame ends the animation.
#[derive(Debug)]
pub struct DragScroller<F: FrameScheduler> {
    phase: Phase,
    config: ScrollConfig,
    scheduler: F,
}

impl<F: FrameScheduler> DragScroller<F> {
    pub fn new(config: ScrollConfig, scheduler: F) -> Self {
        Self {
            phase: Phase::Idle,
            config: config.validated(),
            scheduler,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Momentum or snap-back is running
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.phase.frame().is_some()
    }

    /// Current velocity estimate (0.0 unless dragging or in momentum)
    pub fn velocity(&self) -> f64 {
        match self.phase {
            Phase::Dragging(session) => session.velocity,
            Phase::Momentum { velocity, .. } => velocity,
            Phase::Idle | Phase::SnapBack { .. } => 0.0,
        }
    }

    /// Start a drag at absolute pointer position `pointer_x`
    ///
    /// Any running momentum or snap-back is cancelled first and the drag
    /// anchors on the offset it left behind.
    pub fn pointer_down<S>(&mut self, pointer_x: f64, surface: Option<&S>)
    where
        S: ScrollSurface + ?Sized,
    {
        let Some(surface) = surface else {
            return;
        };
        self.cancel_animation();

        let session = DragSession {
            anchor_x: pointer_x - surface.left_offset(),
            scroll_anchor: surface.scroll_offset(),
            last_pointer_x: pointer_x,
            velocity: 0.0,
        };
        debug!(
            anchor_x = session.anchor_x,
            scroll_anchor = session.scroll_anchor,
            "drag started"
        );
        self.phase = Phase::Dragging(session);
    }

    /// Track the pointer while dragging; ignored otherwise
    ///
    /// The offset follows the pointer inverted and unclamped: dragging right
    /// moves the content left, and a drag may pull the row past its edges.
    pub fn pointer_move<S>(&mut self, pointer_x: f64, surface: Option<&mut S>)
    where
        S: ScrollSurface + ?Sized,
    {
        let Phase::Dragging(session) = &mut self.phase else {
            return;
        };
        let Some(surface) = surface else {
            return;
        };

        let walk = (pointer_x - surface.left_offset()) - session.anchor_x;
        surface.set_scroll_offset(session.scroll_anchor - walk);

        session.velocity = (pointer_x - session.last_pointer_x) * self.config.sensitivity;
        session.last_pointer_x = pointer_x;
        trace!(walk, velocity = session.velocity, "drag move");
    }

    /// Pointer released inside the container at time `now`
    pub fn pointer_up<S>(&mut self, now: Instant, surface: Option<&S>)
    where
        S: ScrollSurface + ?Sized,
    {
        self.release(now, surface);
    }

    /// Pointer left the container; ends a drag like a release
    pub fn pointer_leave<S>(&mut self, now: Instant, surface: Option<&S>)
    where
        S: ScrollSurface + ?Sized,
    {
        self.release(now, surface);
    }

    /// Deliver a frame requested from the scheduler
    ///
    /// Handles that do not belong to the running animation are stale and
    /// ignored.
    pub fn on_frame<S>(&mut self, handle: FrameHandle, now: Instant, surface: Option<&mut S>)
    where
        S: ScrollSurface + ?Sized,
    {
        if self.phase.frame() != Some(handle) {
            trace!(frame = handle.raw(), "ignoring stale frame");
            return;
        }
        let Some(surface) = surface else {
            debug!(phase = self.phase.name(), "surface detached, stopping animation");
            self.phase = Phase::Idle;
            return;
        };

        match self.phase {
            Phase::Momentum { velocity, .. } => self.step_momentum(velocity, now, surface),
            Phase::SnapBack {
                from, to, started, ..
            } => self.step_snap_back(from, to, started, now, surface),
            Phase::Idle | Phase::Dragging(_) => {}
        }
    }

    /// Cancel any running animation and go idle, leaving the offset as is
    pub fn cancel_animation(&mut self) {
        if let Some(frame) = self.phase.frame() {
            self.scheduler.cancel_frame(frame);
            debug!(phase = self.phase.name(), "animation cancelled");
            self.phase = Phase::Idle;
        }
    }

    /// Abandon a drag without a fling, settling the offset into range
    ///
    /// For hosts that stop delivering pointer events mid-drag, e.g. when the
    /// row is hidden. Does nothing unless dragging.
    pub fn cancel_drag<S>(&mut self, surface: Option<&mut S>)
    where
        S: ScrollSurface + ?Sized,
    {
        if !self.is_dragging() {
            return;
        }
        self.phase = Phase::Idle;
        if let Some(surface) = surface {
            let offset = surface.scroll_offset();
            let settled = offset.clamp(0.0, surface.max_scroll_offset());
            if settled != offset {
                surface.set_scroll_offset(settled);
            }
        }
        debug!("drag cancelled");
    }

    /// End a drag: fling, snap back a row left out of range, or settle
    fn release<S>(&mut self, now: Instant, surface: Option<&S>)
    where
        S: ScrollSurface + ?Sized,
    {
        let Phase::Dragging(session) = self.phase else {
            return;
        };

        if self.config.should_fling(session.velocity) {
            let frame = self.scheduler.request_frame();
            debug!(velocity = session.velocity, "drag released, starting momentum");
            self.phase = Phase::Momentum {
                velocity: session.velocity,
                frame,
            };
            return;
        }

        match surface {
            Some(surface) if overscroll(surface.scroll_offset(), surface.max_scroll_offset()) > 0.0 => {
                self.start_snap_back(surface.scroll_offset(), surface.max_scroll_offset(), now);
            }
            _ => {
                debug!(velocity = session.velocity, "drag released");
                self.phase = Phase::Idle;
            }
        }
    }

    fn step_momentum<S>(&mut self, velocity: f64, now: Instant, surface: &mut S)
    where
        S: ScrollSurface + ?Sized,
    {
        let max = surface.max_scroll_offset();
        let overshoot = self.config.overshoot;

        let current = surface.scroll_offset();
        // A drag may already have pulled the row past the limit; never pull it back in one step
        let lower = (-overshoot).min(current);
        let upper = (max + overshoot).max(current);

        let mut velocity = velocity;
        let mut offset = current - velocity;

        let past = overscroll(offset, max);
        if offset < lower || offset > upper {
            // Stretched as far as the rubber band allows
            offset = offset.clamp(lower, upper);
            velocity = 0.0;
        } else if past > 0.0 {
            velocity *= self.config.edge_friction(past);
        }
        surface.set_scroll_offset(offset);

        velocity *= self.config.friction;
        trace!(offset, velocity, "momentum frame");

        if velocity.abs() > self.config.min_velocity {
            let frame = self.scheduler.request_frame();
            self.phase = Phase::Momentum { velocity, frame };
        } else if overscroll(offset, max) == 0.0 {
            debug!(offset, "momentum settled");
            self.phase = Phase::Idle;
        } else {
            self.start_snap_back(offset, max, now);
        }
    }

    fn start_snap_back(&mut self, from: f64, max: f64, now: Instant) {
        let to = from.clamp(0.0, max);
        let frame = self.scheduler.request_frame();
        debug!(from, to, "out of range, snapping back");
        self.phase = Phase::SnapBack {
            from,
            to,
            started: now,
            frame,
        };
    }

    fn step_snap_back<S>(&mut self, from: f64, to: f64, started: Instant, now: Instant, surface: &mut S)
    where
        S: ScrollSurface + ?Sized,
    {
        let t = progress(started, now, self.config.snap_back_duration());
        if t >= 1.0 {
            surface.set_scroll_offset(to);
            debug!(offset = to, "snap-back finished");
            self.phase = Phase::Idle;
            return;
        }

        let offset = lerp(from, to, self.config.easing.apply(t));
        surface.set_scroll_offset(offset);
        trace!(offset, progress = t, "snap-back frame");

        let frame = self.scheduler.request_frame();
        self.phase = Phase::SnapBack {
            from,
            to,
            started,
            frame,
        };
    }
}

impl DragScroller<super::scheduler::TickScheduler> {
    /// Deliver every frame due on this tick of the UI loop
    pub fn tick<S>(&mut self, now: Instant, mut surface: Option<&mut S>)
    where
        S: ScrollSurface + ?Sized,
    {
        for handle in self.scheduler.take_due() {
            self.on_frame(handle, now, surface.as_deref_mut());
        }
    }
}
