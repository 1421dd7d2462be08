//! The gesture-driven list item.
//!
//! Owns the manipulation input for one row: converts per-frame deltas into
//! offset and clip state, enforces the swipe-length limit, raises
//! progress/threshold events, and on release hands off to the
//! release-animation constructor.

use crate::config::{SwipeConfig, SwipeDirection, SwipeMode};
use crate::events::{
    SwipeCompleteEvent, SwipeHandlers, SwipeProgressEvent, SwipeReleaseEvent, SwipeThresholdEvent,
};
use crate::release::SwipeReleaseAnimationConstructor;
use crate::template::SwipeTemplate;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use swiperow_animation::{Easing, FrameClock};
use swiperow_graphics::{Rect, Size};

/// Per-item configuration surface. All fields have defaults; hosts
/// override what they need and the item derives its [`SwipeConfig`] from
/// these at [`SwipeListItem::load`] time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeItemProps {
    pub left_swipe_mode: SwipeMode,
    pub right_swipe_mode: SwipeMode,
    /// Release-animation duration in milliseconds.
    pub back_anim_duration_millis: u64,
    pub left_easing: Easing,
    pub right_easing: Easing,
    /// Max drag distance as a fraction of item width, in (0, 1].
    pub left_swipe_length_rate: f32,
    pub right_swipe_length_rate: f32,
    /// Fraction of full item width at which release triggers, in (0, 1].
    pub left_action_rate: f32,
    pub right_action_rate: f32,
    /// Reveal width Fix mode settles at; defaults to the trigger
    /// threshold distance when unset.
    pub fixed_reveal_width: Option<f32>,
}

impl Default for SwipeItemProps {
    fn default() -> Self {
        Self {
            left_swipe_mode: SwipeMode::Fix,
            right_swipe_mode: SwipeMode::Fix,
            back_anim_duration_millis: 200,
            left_easing: Easing::ExponentialEaseOut,
            right_easing: Easing::ExponentialEaseOut,
            left_swipe_length_rate: 1.0,
            right_swipe_length_rate: 1.0,
            left_action_rate: 0.5,
            right_action_rate: 0.5,
            fixed_reveal_width: None,
        }
    }
}

/// A swipeable list row. `E` is the host's element handle type, reachable
/// through [`SwipeListItem::swipe_control`].
pub struct SwipeListItem<E> {
    props: SwipeItemProps,
    template: SwipeTemplate<E>,
    config: Rc<RefCell<SwipeConfig>>,
    constructor: SwipeReleaseAnimationConstructor,
    handlers: Rc<SwipeHandlers>,
    trigger_in_touch: Cell<bool>,
    clock: FrameClock,
}

impl<E: Clone> SwipeListItem<E> {
    pub fn new(props: SwipeItemProps, clock: FrameClock) -> Self {
        let config = Rc::new(RefCell::new(SwipeConfig::default()));
        let constructor = SwipeReleaseAnimationConstructor::create(Rc::clone(&config));
        Self {
            props,
            template: SwipeTemplate::default(),
            config,
            constructor,
            handlers: Rc::new(SwipeHandlers::default()),
            trigger_in_touch: Cell::new(false),
            clock,
        }
    }

    /// Supply the visual parts. May happen before or after [`load`]; the
    /// live config picks the handles up either way.
    ///
    /// [`load`]: SwipeListItem::load
    pub fn apply_template(&mut self, template: SwipeTemplate<E>) {
        {
            let mut config = self.config.borrow_mut();
            config.main_transform = template.main_transform.clone();
            config.clip_transform = template.clip_transform.clone();
            config.clip_geometry = template.clip_geometry.clone();
        }
        self.template = template;
    }

    /// Derive the gesture config from the current props and measured item
    /// size. Called when the item enters the visual tree and again
    /// whenever the configuration properties change.
    pub fn load(&self, size: Size) {
        let props = &self.props;
        for (side, mode, length_rate, action_rate) in [
            (
                "left",
                props.left_swipe_mode,
                props.left_swipe_length_rate,
                props.left_action_rate,
            ),
            (
                "right",
                props.right_swipe_mode,
                props.right_swipe_length_rate,
                props.right_action_rate,
            ),
        ] {
            if mode != SwipeMode::None && length_rate < action_rate {
                log::warn!(
                    "{side} swipe trigger unreachable from drag: \
                     length rate {length_rate} < action rate {action_rate}"
                );
            }
        }

        let mut config = self.config.borrow_mut();
        *config = SwipeConfig {
            direction: SwipeDirection::None,
            left_mode: props.left_swipe_mode,
            right_mode: props.right_swipe_mode,
            left_length_rate: props.left_swipe_length_rate,
            right_length_rate: props.right_swipe_length_rate,
            left_action_rate: props.left_action_rate,
            right_action_rate: props.right_action_rate,
            duration_millis: props.back_anim_duration_millis,
            left_easing: props.left_easing,
            right_easing: props.right_easing,
            item_width: size.width,
            item_height: size.height,
            current_swipe_width: 0.0,
            trigger_action_target_width: props.fixed_reveal_width.unwrap_or(0.0),
            main_transform: self.template.main_transform.clone(),
            clip_transform: self.template.clip_transform.clone(),
            clip_geometry: self.template.clip_geometry.clone(),
            clock: self.clock.clone(),
        };
    }

    pub fn config(&self) -> Rc<RefCell<SwipeConfig>> {
        Rc::clone(&self.config)
    }

    pub fn direction(&self) -> SwipeDirection {
        self.config.borrow().direction
    }

    // Event registration. Handlers fire synchronously, in registration
    // order.

    pub fn on_swipe_progress(&self, handler: impl Fn(&SwipeProgressEvent) + 'static) {
        self.handlers.progress.push(Rc::new(handler));
    }

    pub fn on_swipe_threshold_crossed(&self, handler: impl Fn(&SwipeThresholdEvent) + 'static) {
        self.handlers.threshold.push(Rc::new(handler));
    }

    pub fn on_swipe_begin_trigger(&self, handler: impl Fn(&SwipeReleaseEvent) + 'static) {
        self.handlers.begin_trigger.push(Rc::new(handler));
    }

    pub fn on_swipe_trigger_complete(&self, handler: impl Fn(&SwipeCompleteEvent) + 'static) {
        self.handlers.trigger_complete.push(Rc::new(handler));
    }

    pub fn on_swipe_begin_restore(&self, handler: impl Fn(&SwipeReleaseEvent) + 'static) {
        self.handlers.begin_restore.push(Rc::new(handler));
    }

    pub fn on_swipe_restore_complete(&self, handler: impl Fn(&SwipeCompleteEvent) + 'static) {
        self.handlers.restore_complete.push(Rc::new(handler));
    }

    /// Per-frame manipulation delta from the host's gesture subsystem.
    ///
    /// The first call of a gesture only commits the direction from the
    /// delta's sign and sets panel visibility; nothing moves. Later calls
    /// accumulate from the transform's live value rather than the raw
    /// gesture cumulative, so a release animation racing a new drag is
    /// last-writer-wins on the transform.
    pub fn on_manipulation_delta(&self, _cumulative_x: f32, delta_x: f32) {
        let direction = self.config.borrow().direction;
        match direction {
            SwipeDirection::None => {
                let mut config = self.config.borrow_mut();
                config.direction = if delta_x > 0.0 {
                    SwipeDirection::Left
                } else {
                    SwipeDirection::Right
                };
                log::trace!("swipe committed toward {:?}", config.direction);
                if let Some(panel) = &self.template.left_content {
                    panel.set_visible(config.can_swipe_left());
                }
                if let Some(panel) = &self.template.right_content {
                    panel.set_visible(config.can_swipe_right());
                }
            }
            SwipeDirection::Left if self.config.borrow().can_swipe_left() => {
                self.swipe_to_left(delta_x);
            }
            SwipeDirection::Right if self.config.borrow().can_swipe_right() => {
                self.swipe_to_right(delta_x);
            }
            _ => {}
        }
    }

    fn swipe_to_left(&self, delta_x: f32) {
        let (cumulative_x, rate, length_rate, height) = self.accumulate(delta_x);

        if cumulative_x <= 0.0 {
            // Reversed past zero: a fresh commit is required.
            self.reset_swipe();
        } else if rate <= length_rate {
            let config = self.config.borrow();
            config.set_clip_rect(Rect::new(0.0, 0.0, cumulative_x.max(0.0), height));
            config.set_main_offset_x(cumulative_x);
            drop(config);
            self.swipe_action_in_touch(cumulative_x, delta_x, rate);
        }
        // Beyond the allowed length the update is a no-op: the offset
        // stays clamped at the last valid value.
    }

    fn swipe_to_right(&self, delta_x: f32) {
        let (cumulative_x, rate, length_rate, height) = self.accumulate(delta_x);

        if cumulative_x >= 0.0 {
            self.reset_swipe();
        } else if rate <= length_rate {
            let config = self.config.borrow();
            config.set_clip_rect(Rect::new(
                config.item_width + cumulative_x,
                0.0,
                (-cumulative_x).max(0.0),
                height,
            ));
            config.set_main_offset_x(cumulative_x);
            drop(config);
            self.swipe_action_in_touch(cumulative_x, delta_x, rate);
        }
    }

    fn accumulate(&self, delta_x: f32) -> (f32, f32, f32, f32) {
        let config = self.config.borrow();
        let cumulative_x = delta_x + config.main_offset_x();
        let rate = if config.item_width > 0.0 {
            cumulative_x.abs() / config.item_width
        } else {
            f32::INFINITY
        };
        (
            cumulative_x,
            rate,
            config.swipe_length_rate(config.direction),
            config.item_height,
        )
    }

    fn swipe_action_in_touch(&self, cumulative_x: f32, delta_x: f32, rate: f32) {
        let (direction, threshold) = {
            let config = self.config.borrow();
            let direction = config.direction;
            let length_rate = config.swipe_length_rate(direction);
            let threshold = if length_rate > 0.0 {
                config.action_rate_for_swipe_length(direction) / length_rate
            } else {
                f32::INFINITY
            };
            (direction, threshold)
        };

        let over_threshold = rate >= threshold;
        if self.trigger_in_touch.get() != over_threshold {
            self.trigger_in_touch.set(over_threshold);
            self.handlers.threshold.emit(&SwipeThresholdEvent {
                direction,
                over_threshold,
            });
        }

        self.handlers.progress.emit(&SwipeProgressEvent {
            direction,
            cumulative_x,
            delta_x,
            rate,
        });
    }

    /// The gesture ended: snapshot the reveal width and resolve the
    /// release into a trigger or restore animation.
    ///
    /// The logical direction returns to neutral immediately; the release
    /// animation keeps running against the snapshot it captured.
    pub fn on_manipulation_completed(&self) {
        let old_direction = {
            let mut config = self.config.borrow_mut();
            config.current_swipe_width = config.main_offset_x().abs();
            config.direction
        };

        let handlers = Rc::clone(&self.handlers);
        self.constructor.display_swipe_animation(
            old_direction,
            Box::new({
                let handlers = Rc::clone(&handlers);
                move |easing, target_x, duration_millis| {
                    handlers.begin_trigger.emit(&SwipeReleaseEvent {
                        direction: old_direction,
                        easing,
                        target_x,
                        duration_millis,
                    });
                }
            }),
            Box::new({
                let handlers = Rc::clone(&handlers);
                move || {
                    handlers.trigger_complete.emit(&SwipeCompleteEvent {
                        direction: old_direction,
                    });
                }
            }),
            Box::new({
                let handlers = Rc::clone(&handlers);
                move |easing, target_x, duration_millis| {
                    handlers.begin_restore.emit(&SwipeReleaseEvent {
                        direction: old_direction,
                        easing,
                        target_x,
                        duration_millis,
                    });
                }
            }),
            Box::new(move || {
                handlers.restore_complete.emit(&SwipeCompleteEvent {
                    direction: old_direction,
                });
            }),
        );

        self.config.borrow_mut().direction = SwipeDirection::None;
        self.trigger_in_touch.set(false);
    }

    /// Abort to the known-good neutral state: no direction, no offset,
    /// empty clip.
    pub fn reset_swipe(&self) {
        let mut config = self.config.borrow_mut();
        config.direction = SwipeDirection::None;
        config.clear_clip();
        config.set_main_offset_x(0.0);
        drop(config);
        self.trigger_in_touch.set(false);
    }

    /// The row was rebound to new data; any in-progress gesture state is
    /// meaningless now.
    pub fn content_changed(&self) {
        self.reset_swipe();
    }

    /// Resolve a named element inside the given direction's revealed
    /// content. `None` for a neutral direction, an absent panel or an
    /// unknown name.
    pub fn swipe_control(&self, direction: SwipeDirection, name: &str) -> Option<E> {
        let panel = match direction {
            SwipeDirection::Left => self.template.left_content.as_ref()?,
            SwipeDirection::Right => self.template.right_content.as_ref()?,
            SwipeDirection::None => return None,
        };
        panel.find_named(name).cloned()
    }

    pub fn left_panel_visible(&self) -> bool {
        self.template
            .left_content
            .as_ref()
            .is_some_and(|panel| panel.is_visible())
    }

    pub fn right_panel_visible(&self) -> bool {
        self.template
            .right_content
            .as_ref()
            .is_some_and(|panel| panel.is_visible())
    }
}

#[cfg(test)]
#[path = "tests/item_tests.rs"]
mod tests;
