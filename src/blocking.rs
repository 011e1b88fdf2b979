//! Thread-based fan-in over crossbeam channels.

use crossbeam::channel::{self, Receiver, RecvError, Select};

use crate::fan_in::Event;

/// Blocking counterpart of [`FanIn`](crate::FanIn).
///
/// A closed slot becomes `None`. Each wait still registers one operation per
/// slot, standing in [`channel::never`] for the closed ones, so the select set
/// keeps a fixed size and a closed slot can never be chosen.
pub struct BlockingFanIn<T> {
    slots: Vec<Option<Receiver<T>>>,
    closed: usize,
}

impl<T> BlockingFanIn<T> {
    pub fn new(receivers: impl IntoIterator<Item = Receiver<T>>) -> Self {
        BlockingFanIn {
            slots: receivers.into_iter().map(Some).collect(),
            closed: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn closed(&self) -> usize {
        self.closed
    }

    pub fn is_drained(&self) -> bool {
        self.closed == self.slots.len()
    }

    pub fn is_active(&self, source: usize) -> bool {
        self.slots.get(source).is_some_and(Option::is_some)
    }

    /// Blocks until some active source has a value or closes.
    pub fn recv(&mut self) -> Option<Event<T>> {
        if self.is_drained() {
            return None;
        }

        let never = channel::never();
        let (source, result) = {
            let mut sel = Select::new();
            for slot in &self.slots {
                sel.recv(slot.as_ref().unwrap_or(&never));
            }
            let op = sel.select();
            let source = op.index();
            (source, op.recv(self.slots[source].as_ref().unwrap_or(&never)))
        };

        match result {
            Ok(value) => Some(Event::Value { source, value }),
            Err(RecvError) => {
                self.slots[source] = None;
                self.closed += 1;
                debug_assert!(self.closed <= self.slots.len());
                Some(Event::Closed { source })
            }
        }
    }
}

impl<T> Iterator for BlockingFanIn<T> {
    type Item = Event<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}
