//! Pointer, wheel and button input turned into transform changes.
//!
//! Drag and pinch share one [`PointerTracker`]: every press re-anchors the
//! drag and registers the pointer, every release ends the drag. While a drag
//! is active each move both pans and, with exactly two pointers down, feeds a
//! pinch sample.

use std::cmp::Ordering;

use crate::config::GestureTuning;
use crate::model::Transform;

use super::drag::Drag;
use super::pointers::{PointerId, PointerSample, PointerTracker};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    fn signed(self, step: f64) -> f64 {
        match self {
            ZoomDirection::In => step,
            ZoomDirection::Out => -step,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureController {
    drag: Drag,
    pointers: PointerTracker,
    tuning: GestureTuning,
}

impl GestureController {
    pub fn new(tuning: GestureTuning) -> Self {
        Self {
            tuning,
            ..Default::default()
        }
    }

    pub fn set_tuning(&mut self, tuning: GestureTuning) {
        self.tuning = tuning;
    }

    pub fn drag(&self) -> Drag {
        self.drag
    }

    pub fn pointers(&self) -> &PointerTracker {
        &self.pointers
    }

    pub fn pointer_down(&mut self, transform: &Transform, sample: PointerSample) {
        self.drag = Drag::begin(sample.x, sample.y, transform.offset_x, transform.offset_y);
        if !self.pointers.press(sample) {
            log::debug!("pointer {:?} ignored, tracker full", sample.id);
        }
        log::debug!(
            "drag start at ({}, {}) with {} pointer(s)",
            sample.x,
            sample.y,
            self.pointers.len()
        );
    }

    /// Returns `true` when the transform changed.
    pub fn pointer_move(&mut self, transform: &mut Transform, sample: PointerSample) -> bool {
        let Some((x, y)) = self.drag.offset_for(sample.x, sample.y) else {
            return false;
        };
        let before = *transform;
        transform.set_offset(x, y);

        self.pointers.update(sample);
        match self.pointers.pinch_sample(self.tuning.pinch_metric) {
            Some(Ordering::Greater) => transform.adjust_zoom(self.tuning.pinch_step),
            Some(Ordering::Less) => transform.adjust_zoom(-self.tuning.pinch_step),
            _ => {}
        }
        *transform != before
    }

    pub fn pointer_up(&mut self, id: PointerId) {
        if self.drag.is_dragging() {
            log::debug!("drag end");
        }
        self.drag = Drag::Idle;
        if self.pointers.release(id).is_none() {
            log::trace!("release of untracked pointer {:?}", id);
        }
    }

    /// One discrete zoom step per wheel event; upward scroll zooms in.
    pub fn wheel(&self, transform: &mut Transform, delta_y: f64) -> bool {
        let direction = if delta_y < 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        };
        let before = transform.zoom;
        transform.adjust_zoom(direction.signed(self.tuning.wheel_step));
        transform.zoom != before
    }

    pub fn zoom_button(&self, transform: &mut Transform, direction: ZoomDirection) -> bool {
        let before = transform.zoom;
        transform.adjust_zoom(direction.signed(self.tuning.button_step));
        transform.zoom != before
    }

    /// Drop all transient gesture state.
    pub fn release_all(&mut self) {
        self.drag = Drag::Idle;
        self.pointers.clear();
    }
}
