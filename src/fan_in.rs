use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use rand::Rng;
use tokio::sync::mpsc;

/// What a single wait on the fan-in produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<T> {
    /// `value` was received from slot `source`.
    Value { source: usize, value: T },
    /// Slot `source` is closed and empty. It will not be selected again.
    Closed { source: usize },
}

impl<T> Event<T> {
    pub fn source(&self) -> usize {
        match self {
            Event::Value { source, .. } | Event::Closed { source } => *source,
        }
    }
}

/// One entry of the wait set.
#[derive(Debug)]
pub enum Slot<T> {
    Active(mpsc::Receiver<T>),
    Disabled,
}

impl<T> Slot<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, Slot::Active(_))
    }
}

/// Waits on a fixed set of receivers and yields whichever is ready first.
///
/// Closed receivers are replaced by [`Slot::Disabled`] instead of being
/// removed, so source indices stay stable for the lifetime of the fan-in.
/// Each poll starts at a random slot, so when several sources are ready the
/// one chosen is uniform among them and a busy source cannot starve the rest.
#[derive(Debug)]
pub struct FanIn<T> {
    slots: Vec<Slot<T>>,
    closed: usize,
}

impl<T> FanIn<T> {
    pub fn new(receivers: impl IntoIterator<Item = mpsc::Receiver<T>>) -> Self {
        FanIn {
            slots: receivers.into_iter().map(Slot::Active).collect(),
            closed: 0,
        }
    }

    /// Number of slots, active or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of sources that have signaled closure so far.
    pub fn closed(&self) -> usize {
        self.closed
    }

    pub fn is_drained(&self) -> bool {
        self.closed == self.slots.len()
    }

    pub fn is_active(&self, source: usize) -> bool {
        self.slots.get(source).is_some_and(Slot::is_active)
    }

    /// Polls every active slot once, starting at a random offset.
    ///
    /// Returns `Ready(None)` once all slots are disabled.
    pub fn poll_event(&mut self, cx: &mut Context<'_>) -> Poll<Option<Event<T>>> {
        if self.is_drained() {
            return Poll::Ready(None);
        }

        let n = self.slots.len();
        let start = rand::thread_rng().gen_range(0..n);

        for offset in 0..n {
            let source = (start + offset) % n;
            let Slot::Active(rx) = &mut self.slots[source] else {
                continue;
            };

            match rx.poll_recv(cx) {
                Poll::Ready(Some(value)) => {
                    return Poll::Ready(Some(Event::Value { source, value }));
                }
                Poll::Ready(None) => {
                    self.slots[source] = Slot::Disabled;
                    self.closed += 1;
                    debug_assert!(self.closed <= n);
                    return Poll::Ready(Some(Event::Closed { source }));
                }
                Poll::Pending => {}
            }
        }

        // Every active receiver registered the waker above.
        Poll::Pending
    }

    /// Waits until any active source has a value or closes.
    pub async fn recv(&mut self) -> Option<Event<T>> {
        futures::future::poll_fn(|cx| self.poll_event(cx)).await
    }
}

impl<T> Stream for FanIn<T> {
    type Item = Event<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().poll_event(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // each remaining slot yields at least its closure
        (self.slots.len() - self.closed, None)
    }
}
