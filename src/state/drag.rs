// Pan anchor: pointer position minus the offset at press time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Drag {
    #[default]
    Idle,
    Dragging {
        anchor_x: f64,
        anchor_y: f64,
    },
}

impl Drag {
    pub fn begin(x: f64, y: f64, offset_x: f64, offset_y: f64) -> Self {
        Drag::Dragging {
            anchor_x: x - offset_x,
            anchor_y: y - offset_y,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Drag::Dragging { .. })
    }

    /// Offset that keeps the anchor under the pointer at `(x, y)`.
    pub fn offset_for(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        match *self {
            Drag::Dragging { anchor_x, anchor_y } => Some((x - anchor_x, y - anchor_y)),
            Drag::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_pointer() {
        let d = Drag::begin(100.0, 50.0, 10.0, -5.0);
        assert!(d.is_dragging());
        assert_eq!(d.offset_for(130.0, 40.0), Some((40.0, -15.0)));
    }

    #[test]
    fn idle_has_no_offset() {
        assert_eq!(Drag::Idle.offset_for(1.0, 2.0), None);
        assert!(!Drag::default().is_dragging());
    }
}
