//! Core data models for the image viewport.
//! `Viewport` is the single owned state of one widget instance: the transform
//! plus the transient gesture bookkeeping that mutates it.

use std::rc::Rc;
use yew::Reducible;

use crate::config::GestureTuning;
use crate::state::{GestureController, PointerId, PointerSample, ZoomDirection};

/// Smallest zoom the transform will hold; keeps draw sizes positive.
pub const MIN_ZOOM: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation from the centered position, in surface pixels.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Uniform scale applied to the image's natural size.
    pub zoom: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl Transform {
    pub fn new(offset_x: f64, offset_y: f64, zoom: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            zoom: zoom.max(MIN_ZOOM),
        }
    }

    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    pub fn adjust_zoom(&mut self, delta: f64) {
        self.zoom = (self.zoom + delta).max(MIN_ZOOM);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewportAction {
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp(PointerId),
    Wheel { delta_y: f64 },
    Zoom(ZoomDirection),
    Reset,
    /// Host-provided transform, e.g. from changed props.
    Sync(Transform),
    Retune(GestureTuning),
    /// Gestures were detached: forget drag anchor and tracked pointers.
    ReleaseGestures,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    pub transform: Transform,
    pub gestures: GestureController,
}

impl Viewport {
    pub fn new(transform: Transform, tuning: GestureTuning) -> Self {
        Self {
            transform,
            gestures: GestureController::new(tuning),
        }
    }

    pub fn apply(&mut self, action: ViewportAction) {
        use ViewportAction::*;
        match action {
            PointerDown(sample) => self.gestures.pointer_down(&self.transform, sample),
            PointerMove(sample) => {
                self.gestures.pointer_move(&mut self.transform, sample);
            }
            PointerUp(id) => self.gestures.pointer_up(id),
            Wheel { delta_y } => {
                self.gestures.wheel(&mut self.transform, delta_y);
            }
            Zoom(direction) => {
                self.gestures.zoom_button(&mut self.transform, direction);
            }
            Reset => self.transform.reset(),
            Sync(t) => self.transform = Transform::new(t.offset_x, t.offset_y, t.zoom),
            Retune(tuning) => self.gestures.set_tuning(tuning),
            ReleaseGestures => self.gestures.release_all(),
        }
    }
}

impl Reducible for Viewport {
    type Action = ViewportAction;

    // Unchanged state hands back the same Rc so the component does not re-render.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        new.apply(action);
        if new == *self { self } else { Rc::new(new) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_idempotent() {
        let mut t = Transform::new(12.0, -40.0, 3.5);
        t.reset();
        assert_eq!(t, Transform::new(0.0, 0.0, 1.0));
        t.reset();
        assert_eq!(t, Transform::default());
    }

    #[test]
    fn zoom_never_drops_below_floor() {
        let mut t = Transform::default();
        t.adjust_zoom(-5.0);
        assert_eq!(t.zoom, MIN_ZOOM);
        t.adjust_zoom(-0.05);
        assert_eq!(t.zoom, MIN_ZOOM);
        assert_eq!(Transform::new(0.0, 0.0, -2.0).zoom, MIN_ZOOM);
    }

    #[test]
    fn idle_move_returns_same_rc() {
        let vp = Rc::new(Viewport::default());
        let next = vp
            .clone()
            .reduce(ViewportAction::PointerMove(PointerSample::new(1, 10.0, 10.0)));
        assert!(Rc::ptr_eq(&vp, &next));
    }

    #[test]
    fn stray_pointer_up_returns_same_rc() {
        let vp = Rc::new(Viewport::default());
        let next = vp.clone().reduce(ViewportAction::PointerUp(PointerId(3)));
        assert!(Rc::ptr_eq(&vp, &next));
    }

    #[test]
    fn drag_through_reducer() {
        let mut vp = Rc::new(Viewport::default());
        vp = vp.reduce(ViewportAction::PointerDown(PointerSample::new(1, 50.0, 50.0)));
        vp = vp.reduce(ViewportAction::PointerMove(PointerSample::new(1, 80.0, 20.0)));
        assert_eq!(vp.transform.offset_x, 30.0);
        assert_eq!(vp.transform.offset_y, -30.0);
        vp = vp.reduce(ViewportAction::PointerUp(PointerId(1)));
        assert!(vp.gestures.pointers().is_empty());
        assert!(!vp.gestures.drag().is_dragging());
    }

    #[test]
    fn release_gestures_clears_transient_state_only() {
        let mut vp = Rc::new(Viewport::new(Transform::new(5.0, 5.0, 2.0), GestureTuning::default()));
        vp = vp.reduce(ViewportAction::PointerDown(PointerSample::new(1, 0.0, 0.0)));
        vp = vp.reduce(ViewportAction::PointerDown(PointerSample::new(2, 9.0, 0.0)));
        vp = vp.reduce(ViewportAction::ReleaseGestures);
        assert!(vp.gestures.pointers().is_empty());
        assert!(!vp.gestures.drag().is_dragging());
        assert_eq!(vp.transform, Transform::new(5.0, 5.0, 2.0));
    }

    #[test]
    fn sync_clamps_zoom() {
        let vp = Rc::new(Viewport::default());
        let vp = vp.reduce(ViewportAction::Sync(Transform {
            offset_x: 1.0,
            offset_y: 2.0,
            zoom: 0.0,
        }));
        assert_eq!(vp.transform, Transform::new(1.0, 2.0, MIN_ZOOM));
    }

    #[test]
    fn reset_via_reducer() {
        let vp = Rc::new(Viewport::new(Transform::new(3.0, 4.0, 1.5), GestureTuning::default()));
        let vp = vp.reduce(ViewportAction::Reset);
        assert_eq!(vp.transform, Transform::default());
        let again = vp.clone().reduce(ViewportAction::Reset);
        assert!(Rc::ptr_eq(&vp, &again));
    }
}
