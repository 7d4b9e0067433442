/// Whether gesture listeners are attached. Listeners live inside the
/// `Attached` variant, so leaving it drops (and thereby detaches) them.
#[derive(Debug)]
pub enum GestureBinding<L> {
    Detached,
    Attached(L),
}

impl<L> Default for GestureBinding<L> {
    fn default() -> Self {
        GestureBinding::Detached
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingChange {
    Attached,
    Detached,
    Unchanged,
}

impl<L> GestureBinding<L> {
    pub fn is_attached(&self) -> bool {
        matches!(self, GestureBinding::Attached(_))
    }

    /// Move to the requested state. `attach` runs only on a
    /// detached-to-attached edge; a failed attach leaves the binding detached.
    pub fn transition<E>(
        &mut self,
        enabled: bool,
        attach: impl FnOnce() -> Result<L, E>,
    ) -> Result<BindingChange, E> {
        match (enabled, self.is_attached()) {
            (true, false) => {
                *self = GestureBinding::Attached(attach()?);
                Ok(BindingChange::Attached)
            }
            (false, true) => {
                *self = GestureBinding::Detached;
                Ok(BindingChange::Detached)
            }
            _ => Ok(BindingChange::Unchanged),
        }
    }

    pub fn detach(&mut self) -> BindingChange {
        match std::mem::take(self) {
            GestureBinding::Attached(_) => BindingChange::Detached,
            GestureBinding::Detached => BindingChange::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted(Rc<Cell<i32>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    fn attach(live: &Rc<Cell<i32>>) -> impl FnOnce() -> Result<Counted, ()> + '_ {
        move || {
            live.set(live.get() + 1);
            Ok(Counted(live.clone()))
        }
    }

    #[test]
    fn repeated_enable_attaches_once() {
        let live = Rc::new(Cell::new(0));
        let mut b = GestureBinding::default();
        assert_eq!(b.transition(true, attach(&live)), Ok(BindingChange::Attached));
        assert_eq!(b.transition(true, attach(&live)), Ok(BindingChange::Unchanged));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn disable_drops_listeners() {
        let live = Rc::new(Cell::new(0));
        let mut b = GestureBinding::default();
        b.transition(true, attach(&live)).unwrap();
        assert_eq!(b.transition(false, attach(&live)), Ok(BindingChange::Detached));
        assert_eq!(live.get(), 0);
        assert_eq!(b.transition(false, attach(&live)), Ok(BindingChange::Unchanged));
        assert!(!b.is_attached());
    }

    #[test]
    fn toggling_never_leaks() {
        let live = Rc::new(Cell::new(0));
        let mut b = GestureBinding::default();
        for enabled in [true, false, true, true, false, false, true] {
            b.transition(enabled, attach(&live)).unwrap();
            assert!(live.get() <= 1);
        }
        assert_eq!(b.detach(), BindingChange::Detached);
        assert_eq!(live.get(), 0);
        assert_eq!(b.detach(), BindingChange::Unchanged);
    }

    #[test]
    fn failed_attach_stays_detached() {
        let mut b: GestureBinding<Counted> = GestureBinding::default();
        let result = b.transition(true, || Err("no canvas"));
        assert_eq!(result, Err("no canvas"));
        assert!(!b.is_attached());
    }
}
