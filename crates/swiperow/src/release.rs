//! Release-time decision making and the three trigger animations.
//!
//! When a gesture ends, the constructor picks the animator for the active
//! direction's mode, asks it whether the release should trigger the
//! action, and runs exactly one of trigger/restore. Begin callbacks fire
//! synchronously before the animation starts; complete callbacks fire
//! exactly once, when it finishes.

use crate::config::{SwipeConfig, SwipeDirection, SwipeMode};
use std::cell::RefCell;
use std::rc::Rc;
use swiperow_animation::{Easing, Transition};
use swiperow_graphics::Rect;

/// Fired synchronously as a release animation begins, with the easing,
/// target main-layer offset and duration in milliseconds.
pub type AnimationCallback = Box<dyn FnOnce(Easing, f32, u64)>;

/// Fired once, after a release animation finished.
pub type CompleteCallback = Box<dyn FnOnce()>;

pub struct SwipeReleaseAnimationConstructor {
    config: Rc<RefCell<SwipeConfig>>,
}

impl SwipeReleaseAnimationConstructor {
    pub fn create(config: Rc<RefCell<SwipeConfig>>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> Rc<RefCell<SwipeConfig>> {
        Rc::clone(&self.config)
    }

    /// Resolve the release into a trigger or restore animation.
    ///
    /// Mode `None` (including a neutral direction) returns immediately
    /// without invoking any callback.
    pub fn display_swipe_animation(
        &self,
        direction: SwipeDirection,
        begin_trigger: AnimationCallback,
        trigger_complete: CompleteCallback,
        begin_restore: AnimationCallback,
        restore_complete: CompleteCallback,
    ) {
        let mode = self.config.borrow().swipe_mode(direction);
        let Some(animator) = swipe_animator(mode) else {
            return;
        };

        let snapshot = {
            let config = self.config.borrow();
            // Scale targets are multipliers from identity, so re-anchor
            // the clip scale before computing them.
            config.reset_clip_center(direction);
            let mut snapshot = config.clone();
            snapshot.direction = direction;
            snapshot
        };

        if animator.should_trigger(&snapshot) {
            animator.action_trigger(direction, &snapshot, begin_trigger, trigger_complete);
        } else {
            animator.restore(&snapshot, begin_restore, restore_complete);
        }
    }
}

/// Animator lookup by mode; `None` for a disabled side.
pub fn swipe_animator(mode: SwipeMode) -> Option<&'static dyn SwipeAnimator> {
    match mode {
        SwipeMode::Collapse => Some(&CollapseSwipeAnimator),
        SwipeMode::Fix => Some(&FixedSwipeAnimator),
        SwipeMode::Expand => Some(&ExpandSwipeAnimator),
        SwipeMode::None => None,
    }
}

/// Release policy for one swipe mode. Animators are stateless: they read
/// a config snapshot and never retain it.
pub trait SwipeAnimator {
    /// Whether the release should fire the action rather than restore.
    fn should_trigger(&self, config: &SwipeConfig) -> bool {
        config.action_rate_for_swipe_length(config.direction) <= config.current_swipe_rate()
    }

    fn action_trigger(
        &self,
        direction: SwipeDirection,
        config: &SwipeConfig,
        begin_trigger: AnimationCallback,
        trigger_complete: CompleteCallback,
    );

    /// Snap the row back shut: offset and clip scale animate to zero, then
    /// the clip is cleared and the scale reset to identity.
    fn restore(
        &self,
        config: &SwipeConfig,
        begin_restore: AnimationCallback,
        restore_complete: CompleteCallback,
    ) {
        let spec = config.animation_spec(config.direction);
        begin_restore(spec.easing, 0.0, spec.duration_millis);

        let snapshot = config.clone();
        display_animation(config, 0.0, 0.0, move || {
            snapshot.clear_clip();
            snapshot.set_clip_scale_x(1.0);
            restore_complete();
        });
    }
}

/// Trigger snaps fully shut; used when the action removes the row.
pub struct CollapseSwipeAnimator;

impl SwipeAnimator for CollapseSwipeAnimator {
    fn action_trigger(
        &self,
        _direction: SwipeDirection,
        config: &SwipeConfig,
        begin_trigger: AnimationCallback,
        trigger_complete: CompleteCallback,
    ) {
        let spec = config.animation_spec(config.direction);
        begin_trigger(spec.easing, 0.0, spec.duration_millis);

        let snapshot = config.clone();
        display_animation(config, 0.0, 0.0, move || {
            trigger_complete();
            snapshot.clear_clip();
            snapshot.set_clip_scale_x(1.0);
        });
    }
}

/// Trigger settles at a fixed reveal width regardless of where the drag
/// stopped.
pub struct FixedSwipeAnimator;

impl FixedSwipeAnimator {
    /// The configured reveal width, or the trigger threshold distance
    /// when unconfigured.
    fn target_width(config: &SwipeConfig, direction: SwipeDirection) -> f32 {
        if config.trigger_action_target_width > 0.0 {
            config.trigger_action_target_width
        } else {
            config.action_rate_for_swipe_length(direction) * config.item_width
        }
    }
}

impl SwipeAnimator for FixedSwipeAnimator {
    fn action_trigger(
        &self,
        direction: SwipeDirection,
        config: &SwipeConfig,
        begin_trigger: AnimationCallback,
        trigger_complete: CompleteCallback,
    ) {
        let target_width = Self::target_width(config, direction);
        let target_x = if direction == SwipeDirection::Left {
            target_width
        } else {
            -target_width
        };
        // The clip width was frozen at current_swipe_width when the drag
        // ended; a multiplicative scale carries it to the fixed target.
        let clip_scale_x = if config.current_swipe_width > 0.0 {
            target_width / config.current_swipe_width
        } else {
            1.0
        };

        let spec = config.animation_spec(config.direction);
        begin_trigger(spec.easing, target_x, spec.duration_millis);

        let snapshot = config.clone();
        display_animation(config, target_x, clip_scale_x, move || {
            trigger_complete();

            snapshot.set_clip_scale_x(1.0);
            let height = snapshot.clip_rect().height;
            let rect = if direction == SwipeDirection::Left {
                Rect::new(0.0, 0.0, target_width, height)
            } else {
                Rect::new(
                    snapshot.item_width - target_width,
                    0.0,
                    target_width,
                    height,
                )
            };
            snapshot.set_clip_rect(rect);
        });
    }
}

/// Trigger expands the revealed panel to cover the full row; used for
/// full-row replace actions.
pub struct ExpandSwipeAnimator;

impl SwipeAnimator for ExpandSwipeAnimator {
    fn action_trigger(
        &self,
        direction: SwipeDirection,
        config: &SwipeConfig,
        begin_trigger: AnimationCallback,
        trigger_complete: CompleteCallback,
    ) {
        let target_x = if direction == SwipeDirection::Left {
            config.item_width
        } else {
            -config.item_width
        };
        let clip_scale_x = if config.current_swipe_width > 0.0 {
            config.item_width / config.current_swipe_width
        } else {
            1.0
        };

        let spec = config.animation_spec(config.direction);
        begin_trigger(spec.easing, target_x, spec.duration_millis);

        let snapshot = config.clone();
        display_animation(config, target_x, clip_scale_x, move || {
            trigger_complete();
            snapshot.clear_clip();
            snapshot.set_clip_scale_x(1.0);
        });
    }
}

/// Animate the main offset and the clip scale together, then run the
/// settle step.
fn display_animation(
    config: &SwipeConfig,
    item_to: f32,
    clip_to: f32,
    complete: impl FnOnce() + 'static,
) {
    let main = config.main_transform.clone();
    let clip = config.clip_transform.clone();
    let item_from = config.main_offset_x();
    let clip_from = config.clip_scale_x();

    Transition::new(config.clock.clone(), config.animation_spec(config.direction))
        .animate(item_from, item_to, move |x| {
            if let Some(transform) = &main {
                transform.set_x(x);
            }
        })
        .animate(clip_from, clip_to, move |scale_x| {
            if let Some(transform) = &clip {
                transform.set_scale_x(scale_x);
            }
        })
        .on_finished(complete)
        .start();
}

#[cfg(test)]
#[path = "tests/release_tests.rs"]
mod tests;
