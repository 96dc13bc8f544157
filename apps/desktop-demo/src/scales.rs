//! Pinch-to-scale policies for the demo scene.
//!
//! The engine only reports pinches; what they scale is up to the application.
//! The scene decides once per interaction, from where the first contact
//! landed, and then applies every pinch step to that choice.

use std::fmt;
use tactus_foundation::PinchData;
use tactus_geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScalePolicy {
    /// Pinches anywhere zoom the view.
    #[default]
    View,
    /// Pinches that start on an item resize that item; others do nothing.
    Items,
    /// Items when the pinch starts on one, otherwise the view.
    ItemsAndView,
}

impl ScalePolicy {
    pub fn next(self) -> Self {
        match self {
            ScalePolicy::View => ScalePolicy::Items,
            ScalePolicy::Items => ScalePolicy::ItemsAndView,
            ScalePolicy::ItemsAndView => ScalePolicy::View,
        }
    }
}

impl fmt::Display for ScalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScalePolicy::View => "view",
            ScalePolicy::Items => "items",
            ScalePolicy::ItemsAndView => "items and view",
        })
    }
}

/// What the current interaction scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleTarget {
    View,
    Item(usize),
}

/// Window onto the workspace: the workspace point at the window's top-left
/// corner and the zoom factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub origin: Point,
    pub scale: f32,
}

impl Default for View {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            scale: 1.0,
        }
    }
}

impl View {
    /// Workspace position shown at window position `point`.
    pub fn to_workspace(&self, point: Point) -> Point {
        self.origin + point / self.scale
    }

    /// Zooms by `factor`, keeping the workspace point under `anchor` in place.
    pub fn scale_by(&mut self, factor: f32, anchor: Point) {
        if !factor.is_finite() || factor <= 0.0 || !anchor.is_finite() {
            return;
        }
        let before = self.to_workspace(anchor);
        self.scale *= factor;
        let after = self.to_workspace(anchor);
        self.origin += before - after;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    policy: ScalePolicy,
    view: View,
    /// Item bounds in workspace coordinates, bottom-most first.
    items: Vec<Rect>,
    grabbed: Option<ScaleTarget>,
}

impl Scene {
    pub fn new(policy: ScalePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> ScalePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ScalePolicy) {
        self.policy = policy;
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn add_item(&mut self, bounds: Rect) -> usize {
        self.items.push(bounds);
        self.items.len() - 1
    }

    pub fn item(&self, index: usize) -> Option<Rect> {
        self.items.get(index).copied()
    }

    /// Top-most item under a window position.
    pub fn item_at(&self, point: Point) -> Option<usize> {
        let workspace = self.view.to_workspace(point);
        self.items
            .iter()
            .rposition(|bounds| bounds.contains(workspace.x, workspace.y))
    }

    pub fn grabbed(&self) -> Option<ScaleTarget> {
        self.grabbed
    }

    /// Chooses what the interaction starting at `point` will scale.
    pub fn grab(&mut self, point: Point) -> Option<ScaleTarget> {
        let item = self.item_at(point).map(ScaleTarget::Item);
        self.grabbed = match self.policy {
            ScalePolicy::View => Some(ScaleTarget::View),
            ScalePolicy::Items => item,
            ScalePolicy::ItemsAndView => item.or(Some(ScaleTarget::View)),
        };
        log::debug!("{} policy grabbed {:?}", self.policy, self.grabbed);
        self.grabbed
    }

    pub fn release(&mut self) {
        self.grabbed = None;
    }

    /// Applies one pinch step to whatever was grabbed. Returns `false` when
    /// nothing was scaled.
    pub fn pinch(&mut self, pinch: &PinchData) -> bool {
        match self.grabbed {
            Some(ScaleTarget::View) => {
                self.view.scale_by(pinch.change, pinch.point);
                true
            }
            Some(ScaleTarget::Item(index)) => {
                let anchor = self.view.to_workspace(pinch.point);
                let Some(bounds) = self.items.get_mut(index) else {
                    return false;
                };
                *bounds = bounds.scale_about(pinch.change, anchor.x, anchor.y);
                true
            }
            None => false,
        }
    }
}
