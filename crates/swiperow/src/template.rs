//! Template contract between the host and the control.
//!
//! Hosts that instantiate the row's visual tree hand the control explicit
//! references to the parts it drives. Every part is optional: template
//! application order relative to configuration is not guaranteed, so
//! operations on absent parts are no-ops rather than errors.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;
use swiperow_graphics::{RectGeometry, ScaleTransform, TranslateTransform};

/// Revealed content for one direction: a visibility flag plus the named
/// elements hosts want to reach from action wiring (buttons, icons).
///
/// `E` is the host's element handle type.
pub struct SwipePanel<E> {
    visibility: Cell<bool>,
    elements: HashMap<String, E>,
}

impl<E> SwipePanel<E> {
    /// A panel starts hidden; the control shows it when a gesture commits
    /// toward its side.
    pub fn new() -> Self {
        Self {
            visibility: Cell::new(false),
            elements: HashMap::new(),
        }
    }

    pub fn with_element(mut self, name: impl Into<String>, element: E) -> Self {
        self.elements.insert(name.into(), element);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.get()
    }

    pub(crate) fn set_visible(&self, visible: bool) {
        self.visibility.set(visible);
    }

    /// Resolve a named element within this panel.
    pub fn find_named(&self, name: &str) -> Option<&E> {
        self.elements.get(name)
    }
}

impl<E> Default for SwipePanel<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// The visual parts a host supplies: the main layer's translate
/// transform, the reveal clip rectangle, the scale transform on that
/// clip, and the two reveal panels.
pub struct SwipeTemplate<E> {
    pub main_transform: Option<Rc<TranslateTransform>>,
    pub clip_transform: Option<Rc<ScaleTransform>>,
    pub clip_geometry: Option<Rc<RectGeometry>>,
    pub left_content: Option<Rc<SwipePanel<E>>>,
    pub right_content: Option<Rc<SwipePanel<E>>>,
}

impl<E> SwipeTemplate<E> {
    /// A template with every part present (panels empty).
    pub fn with_parts() -> Self {
        Self {
            main_transform: Some(Rc::new(TranslateTransform::new())),
            clip_transform: Some(Rc::new(ScaleTransform::new())),
            clip_geometry: Some(Rc::new(RectGeometry::new())),
            left_content: Some(Rc::new(SwipePanel::new())),
            right_content: Some(Rc::new(SwipePanel::new())),
        }
    }
}

impl<E> Default for SwipeTemplate<E> {
    fn default() -> Self {
        Self {
            main_transform: None,
            clip_transform: None,
            clip_geometry: None,
            left_content: None,
            right_content: None,
        }
    }
}
