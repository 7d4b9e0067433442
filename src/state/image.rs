/// Handle for one started load. Only the ticket of the latest `begin` can
/// complete it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// The widget's image resource, replaced wholesale on every source change.
#[derive(Debug)]
pub struct ImageSlot<I> {
    generation: u64,
    pending: Option<I>,
    ready: Option<I>,
}

impl<I> Default for ImageSlot<I> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
            ready: None,
        }
    }
}

impl<I> ImageSlot<I> {
    /// Start loading into `image`. The previous image, loaded or not, is
    /// dropped; a still-pending one is handed back so its callbacks can be
    /// unhooked.
    pub fn begin(&mut self, image: I) -> (LoadTicket, Option<I>) {
        self.generation += 1;
        self.ready = None;
        let superseded = self.pending.replace(image);
        (LoadTicket(self.generation), superseded)
    }

    /// Mark the load as finished. Returns `false` for a superseded ticket.
    pub fn complete(&mut self, ticket: LoadTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match self.pending.take() {
            Some(image) => {
                self.ready = Some(image);
                true
            }
            None => false,
        }
    }

    /// Drop a failed load. Returns `false` for a superseded ticket.
    pub fn fail(&mut self, ticket: LoadTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.pending.take().is_some()
    }

    /// Forget everything, returning a pending image if one was in flight.
    pub fn discard(&mut self) -> Option<I> {
        self.generation += 1;
        self.ready = None;
        self.pending.take()
    }

    pub fn ready(&self) -> Option<&I> {
        self.ready.as_ref()
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}
