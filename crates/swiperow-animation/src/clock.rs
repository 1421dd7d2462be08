//! Host-driven frame clock.
//!
//! Platform integrations own the real frame timer (vsync, compositor
//! callback, test loop) and pump registered callbacks through
//! [`FrameClock::drain_frame_callbacks`]. Callbacks are one-shot;
//! continuous animations re-register every frame.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;

#[derive(Clone, Default)]
pub struct FrameClock {
    inner: Rc<RefCell<ClockInner>>,
}

#[derive(Default)]
struct ClockInner {
    next_id: FrameCallbackId,
    pending: Vec<(FrameCallbackId, FrameCallback)>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a one-shot callback for the next frame.
    ///
    /// Dropping the returned registration (or calling
    /// [`FrameCallbackRegistration::cancel`]) deregisters the callback if
    /// it has not run yet.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.pending.push((id, Box::new(callback)));
        FrameCallbackRegistration {
            clock: Rc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Run every callback registered before this drain, in registration
    /// order. Callbacks registered while draining run on the next drain.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let pending = std::mem::take(&mut self.inner.borrow_mut().pending);
        for (_, callback) in pending {
            callback(frame_time_nanos);
        }
    }

    /// Whether another frame is needed. Hosts use this to keep the frame
    /// timer running only while something is animating.
    pub fn has_pending_callbacks(&self) -> bool {
        !self.inner.borrow().pending.is_empty()
    }
}

pub struct FrameCallbackRegistration {
    clock: Weak<RefCell<ClockInner>>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if let (Some(inner), Some(id)) = (self.clock.upgrade(), self.id.take()) {
            inner.borrow_mut().pending.retain(|(pending_id, _)| *pending_id != id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.remove();
    }
}
