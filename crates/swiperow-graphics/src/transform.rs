//! Interior-mutable render sinks.
//!
//! The control mutates these continuously during a gesture and a host
//! renderer samples them when painting. They are shared via `Rc` and are
//! single-threaded, matching the rest of the workspace.

use crate::geometry::Rect;
use std::cell::Cell;

/// Horizontal/vertical offset applied to the row's main content layer.
#[derive(Debug, Default)]
pub struct TranslateTransform {
    x: Cell<f32>,
    y: Cell<f32>,
}

impl TranslateTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(&self) -> f32 {
        self.x.get()
    }

    pub fn set_x(&self, x: f32) {
        self.x.set(x);
    }

    pub fn y(&self) -> f32 {
        self.y.get()
    }

    pub fn set_y(&self, y: f32) {
        self.y.set(y);
    }
}

/// Scale applied to the reveal clip, anchored at `center_x`.
///
/// Identity is scale 1. Release animations animate `scale_x` as a
/// multiplier of the frozen clip rectangle width.
#[derive(Debug)]
pub struct ScaleTransform {
    scale_x: Cell<f32>,
    scale_y: Cell<f32>,
    center_x: Cell<f32>,
}

impl ScaleTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale_x(&self) -> f32 {
        self.scale_x.get()
    }

    pub fn set_scale_x(&self, scale_x: f32) {
        self.scale_x.set(scale_x);
    }

    pub fn scale_y(&self) -> f32 {
        self.scale_y.get()
    }

    pub fn set_scale_y(&self, scale_y: f32) {
        self.scale_y.set(scale_y);
    }

    pub fn center_x(&self) -> f32 {
        self.center_x.get()
    }

    pub fn set_center_x(&self, center_x: f32) {
        self.center_x.set(center_x);
    }
}

impl Default for ScaleTransform {
    fn default() -> Self {
        Self {
            scale_x: Cell::new(1.0),
            scale_y: Cell::new(1.0),
            center_x: Cell::new(0.0),
        }
    }
}

/// A mutable clip rectangle.
#[derive(Debug, Default)]
pub struct RectGeometry {
    rect: Cell<Rect>,
}

impl RectGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&self) -> Rect {
        self.rect.get()
    }

    pub fn set_rect(&self, rect: Rect) {
        self.rect.set(rect);
    }

    pub fn clear(&self) {
        self.rect.set(Rect::ZERO);
    }

    pub fn is_empty(&self) -> bool {
        self.rect.get().is_empty()
    }
}
