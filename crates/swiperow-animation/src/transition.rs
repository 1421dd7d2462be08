//! Fire-and-forget tweens over one or more float tracks.

use crate::clock::{FrameCallbackRegistration, FrameClock};
use crate::easing::Easing;
use std::cell::RefCell;
use std::rc::Rc;

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(200, Easing::ExponentialEaseOut)
    }
}

struct Track {
    from: f32,
    to: f32,
    apply: Box<dyn Fn(f32)>,
}

/// A running tween that interpolates every track each frame and fires an
/// optional completion hook exactly once.
///
/// Transitions are fire-and-forget: `start` hands ownership to the frame
/// clock and the tween keeps itself alive until the final frame. There is
/// no cancellation; a competing writer simply overwrites the sink values
/// after the transition finishes with them.
pub struct Transition {
    inner: Rc<RefCell<TransitionInner>>,
}

struct TransitionInner {
    clock: FrameClock,
    spec: AnimationSpec,
    tracks: Vec<Track>,
    start_time_nanos: Option<u64>,
    on_finished: Option<Box<dyn FnOnce()>>,
    registration: Option<FrameCallbackRegistration>,
}

impl Transition {
    pub fn new(clock: FrameClock, spec: AnimationSpec) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TransitionInner {
                clock,
                spec,
                tracks: Vec::new(),
                start_time_nanos: None,
                on_finished: None,
                registration: None,
            })),
        }
    }

    /// Add a float track interpolated from `from` to `to`, written through
    /// `apply` every frame.
    pub fn animate(self, from: f32, to: f32, apply: impl Fn(f32) + 'static) -> Self {
        self.inner.borrow_mut().tracks.push(Track {
            from,
            to,
            apply: Box::new(apply),
        });
        self
    }

    /// Invoke `callback` once, after the final frame applied the exact
    /// target values.
    pub fn on_finished(self, callback: impl FnOnce() + 'static) -> Self {
        self.inner.borrow_mut().on_finished = Some(Box::new(callback));
        self
    }

    /// Start the tween on the clock it was created with.
    pub fn start(self) {
        Self::schedule(&self.inner);
    }

    fn schedule(this: &Rc<RefCell<TransitionInner>>) {
        let clock = this.borrow().clock.clone();
        let strong = Rc::clone(this);
        let registration = clock.with_frame_nanos(move |time| Self::on_frame(&strong, time));
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<TransitionInner>>, frame_time_nanos: u64) {
        let mut finished = None;
        let schedule_next;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (inner.spec.duration_millis * 1_000_000).max(1);
            let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

            if linear_progress >= 1.0 {
                for track in &inner.tracks {
                    (track.apply)(track.to);
                }
                finished = inner.on_finished.take();
                schedule_next = false;
            } else {
                let progress = inner.spec.easing.transform(linear_progress);
                for track in &inner.tracks {
                    (track.apply)(track.from + (track.to - track.from) * progress);
                }
                schedule_next = true;
            }
        }

        if schedule_next {
            Self::schedule(this);
        }
        if let Some(callback) = finished {
            callback();
        }
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
