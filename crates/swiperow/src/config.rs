//! Swipe configuration shared between the gesture item and the release
//! animators.

use std::rc::Rc;
use swiperow_animation::{AnimationSpec, Easing, FrameClock};
use swiperow_graphics::{Rect, RectGeometry, ScaleTransform, TranslateTransform};

/// Which side a gesture is revealing. `None` between gestures; the single
/// source of truth for "is a gesture active".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeDirection {
    #[default]
    None,
    Left,
    Right,
}

/// Per-direction release policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwipeMode {
    /// Swiping toward this side is disabled.
    None,
    /// Settle at a fixed reveal width.
    #[default]
    Fix,
    /// Snap fully shut.
    Collapse,
    /// Cover the full row with the revealed panel.
    Expand,
}

/// One instance per list item. Mutated continuously during a gesture,
/// snapshotted (cloned) at release time for the animators, which never
/// retain it.
///
/// The transform/clip handles are the opaque render sinks; any of them may
/// be absent when the host has not supplied the template part, in which
/// case the accessors below degrade to no-ops.
#[derive(Clone)]
pub struct SwipeConfig {
    pub direction: SwipeDirection,
    pub left_mode: SwipeMode,
    pub right_mode: SwipeMode,
    /// Max drag distance as a fraction of item width, per direction, in (0, 1].
    pub left_length_rate: f32,
    pub right_length_rate: f32,
    /// Fraction of *full* item width that counts as "far enough to
    /// trigger" (not relative to the length rate).
    pub left_action_rate: f32,
    pub right_action_rate: f32,
    pub duration_millis: u64,
    pub left_easing: Easing,
    pub right_easing: Easing,
    pub item_width: f32,
    pub item_height: f32,
    /// Absolute pixel offset captured at release; trigger targets are
    /// computed against this.
    pub current_swipe_width: f32,
    /// Reveal width Fix mode settles at. Zero means "derive from the
    /// action rate" at trigger time.
    pub trigger_action_target_width: f32,
    pub main_transform: Option<Rc<TranslateTransform>>,
    pub clip_transform: Option<Rc<ScaleTransform>>,
    pub clip_geometry: Option<Rc<RectGeometry>>,
    pub clock: FrameClock,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            direction: SwipeDirection::None,
            left_mode: SwipeMode::default(),
            right_mode: SwipeMode::default(),
            left_length_rate: 1.0,
            right_length_rate: 1.0,
            left_action_rate: 0.5,
            right_action_rate: 0.5,
            duration_millis: 200,
            left_easing: Easing::ExponentialEaseOut,
            right_easing: Easing::ExponentialEaseOut,
            item_width: 0.0,
            item_height: 0.0,
            current_swipe_width: 0.0,
            trigger_action_target_width: 0.0,
            main_transform: None,
            clip_transform: None,
            clip_geometry: None,
            clock: FrameClock::new(),
        }
    }
}

impl SwipeConfig {
    pub fn swipe_mode(&self, direction: SwipeDirection) -> SwipeMode {
        match direction {
            SwipeDirection::Left => self.left_mode,
            SwipeDirection::Right => self.right_mode,
            SwipeDirection::None => SwipeMode::None,
        }
    }

    pub fn swipe_length_rate(&self, direction: SwipeDirection) -> f32 {
        match direction {
            SwipeDirection::Left => self.left_length_rate,
            SwipeDirection::Right => self.right_length_rate,
            SwipeDirection::None => 0.0,
        }
    }

    pub fn action_rate_for_swipe_length(&self, direction: SwipeDirection) -> f32 {
        match direction {
            SwipeDirection::Left => self.left_action_rate,
            SwipeDirection::Right => self.right_action_rate,
            SwipeDirection::None => 1.0,
        }
    }

    pub fn easing(&self, direction: SwipeDirection) -> Easing {
        match direction {
            SwipeDirection::Right => self.right_easing,
            _ => self.left_easing,
        }
    }

    pub fn can_swipe_left(&self) -> bool {
        self.left_mode != SwipeMode::None
    }

    pub fn can_swipe_right(&self) -> bool {
        self.right_mode != SwipeMode::None
    }

    /// Reveal rate captured at release: `current_swipe_width` as a
    /// fraction of item width.
    pub fn current_swipe_rate(&self) -> f32 {
        if self.item_width > 0.0 {
            self.current_swipe_width / self.item_width
        } else {
            0.0
        }
    }

    pub fn animation_spec(&self, direction: SwipeDirection) -> AnimationSpec {
        AnimationSpec::tween(self.duration_millis, self.easing(direction))
    }

    /// Reset the clip scale to identity and anchor it at the revealing
    /// edge, so scale-based release targets are multipliers from 1.
    pub fn reset_clip_center(&self, direction: SwipeDirection) {
        if let Some(clip) = &self.clip_transform {
            clip.set_scale_x(1.0);
            clip.set_center_x(match direction {
                SwipeDirection::Right => self.item_width,
                _ => 0.0,
            });
        }
    }

    // Sink accessors. Absent template parts read as neutral values and
    // ignore writes.

    pub fn main_offset_x(&self) -> f32 {
        self.main_transform.as_deref().map_or(0.0, |t| t.x())
    }

    pub fn set_main_offset_x(&self, x: f32) {
        if let Some(transform) = &self.main_transform {
            transform.set_x(x);
        }
    }

    pub fn clip_scale_x(&self) -> f32 {
        self.clip_transform.as_deref().map_or(1.0, |t| t.scale_x())
    }

    pub fn set_clip_scale_x(&self, scale_x: f32) {
        if let Some(transform) = &self.clip_transform {
            transform.set_scale_x(scale_x);
        }
    }

    pub fn clip_rect(&self) -> Rect {
        self.clip_geometry.as_deref().map_or(Rect::ZERO, |g| g.rect())
    }

    pub fn set_clip_rect(&self, rect: Rect) {
        if let Some(geometry) = &self.clip_geometry {
            geometry.set_rect(rect);
        }
    }

    pub fn clear_clip(&self) {
        if let Some(geometry) = &self.clip_geometry {
            geometry.clear();
        }
    }
}
