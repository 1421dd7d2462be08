//! Headless swipeable list-row control.
//!
//! A row can be dragged horizontally to reveal a left or right action
//! panel. Releasing the drag resolves into one of two outcomes: a
//! *trigger* (the drag travelled far enough and the row's action fires)
//! or a *restore* (the row snaps back shut). The release animation depends
//! on the per-direction [`SwipeMode`]:
//!
//! - `Collapse` snaps the row fully shut (the action removes the row),
//! - `Fix` settles at a fixed reveal width (action buttons stay visible),
//! - `Expand` covers the whole row with the revealed panel,
//! - `None` disables swiping toward that side.
//!
//! The control is headless: it owns no widgets and draws nothing. Hosts
//! feed it per-frame manipulation deltas plus a release event, pump a
//! [`FrameClock`](swiperow_animation::FrameClock) for the release
//! animations, and paint from the shared transform/clip sinks declared in
//! [`SwipeTemplate`].

mod config;
mod events;
mod item;
mod release;
mod template;

pub use config::{SwipeConfig, SwipeDirection, SwipeMode};
pub use events::{
    SwipeCompleteEvent, SwipeProgressEvent, SwipeReleaseEvent, SwipeThresholdEvent,
};
pub use item::{SwipeItemProps, SwipeListItem};
pub use release::{
    swipe_animator, AnimationCallback, CollapseSwipeAnimator, CompleteCallback,
    ExpandSwipeAnimator, FixedSwipeAnimator, SwipeAnimator, SwipeReleaseAnimationConstructor,
};
pub use template::{SwipePanel, SwipeTemplate};

pub use swiperow_animation::{AnimationSpec, Easing, FrameClock};
pub use swiperow_graphics::{Rect, RectGeometry, ScaleTransform, Size, TranslateTransform};
