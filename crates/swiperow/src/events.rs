//! Event payloads and handler lists.
//!
//! Handlers fire synchronously on the calling thread, in registration
//! order, exactly once per occurrence.

use crate::config::SwipeDirection;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use swiperow_animation::Easing;

/// Emitted for every accepted per-frame drag update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeProgressEvent {
    pub direction: SwipeDirection,
    pub cumulative_x: f32,
    pub delta_x: f32,
    /// Current offset as a fraction of item width.
    pub rate: f32,
}

/// Emitted when the drag crosses the trigger threshold, in either
/// direction — only on the boolean transition, never per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholdEvent {
    pub direction: SwipeDirection,
    pub over_threshold: bool,
}

/// Emitted synchronously when a release animation (trigger or restore)
/// begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeReleaseEvent {
    pub direction: SwipeDirection,
    pub easing: Easing,
    /// Main-layer offset the animation is heading to.
    pub target_x: f32,
    pub duration_millis: u64,
}

/// Emitted once when a release animation finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeCompleteEvent {
    pub direction: SwipeDirection,
}

pub(crate) struct HandlerList<T> {
    handlers: RefCell<SmallVec<[Rc<dyn Fn(&T)>; 2]>>,
}

impl<T> HandlerList<T> {
    pub(crate) fn push(&self, handler: Rc<dyn Fn(&T)>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub(crate) fn emit(&self, event: &T) {
        // Clone out first so a handler may register further handlers.
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler(event);
        }
    }
}

impl<T> Default for HandlerList<T> {
    fn default() -> Self {
        Self {
            handlers: RefCell::new(SmallVec::new()),
        }
    }
}

/// All handler lists of one swipe item, shared with the release-callback
/// closures.
#[derive(Default)]
pub(crate) struct SwipeHandlers {
    pub progress: HandlerList<SwipeProgressEvent>,
    pub threshold: HandlerList<SwipeThresholdEvent>,
    pub begin_trigger: HandlerList<SwipeReleaseEvent>,
    pub trigger_complete: HandlerList<SwipeCompleteEvent>,
    pub begin_restore: HandlerList<SwipeReleaseEvent>,
    pub restore_complete: HandlerList<SwipeCompleteEvent>,
}
