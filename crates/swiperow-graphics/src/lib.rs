//! Pure geometry and visual-part data for Swiperow.
//!
//! This crate has no dependencies and no behavior of its own: it defines the
//! rectangles and transforms the control writes and a host renderer reads.

mod geometry;
mod transform;

pub use geometry::{Rect, Size};
pub use transform::{RectGeometry, ScaleTransform, TranslateTransform};
