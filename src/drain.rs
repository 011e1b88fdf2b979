//! The consuming loop and the glue that runs it against the producer.

use std::fmt::Display;
use std::io::Write;

use tokio_stream::StreamExt;
use tracing::{debug, info};

use crate::blocking::BlockingFanIn;
use crate::fan_in::{Event, FanIn};
use crate::{producer, Args, DrainError, Result};

/// Totals observed by one drain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub values: usize,
    pub closed: usize,
}

impl Summary {
    fn record<T: Display, W: Write>(&mut self, event: Event<T>, out: &mut W) -> Result<()> {
        match event {
            Event::Value { source, value } => {
                writeln!(out, "source {source}: {value}")?;
                self.values += 1;
            }
            // A closure prints nothing; only the counter moves.
            Event::Closed { source } => {
                self.closed += 1;
                debug!(source, closed = self.closed, "source exhausted");
            }
        }
        Ok(())
    }
}

/// Consumes `fan_in` until every source has closed, writing each value to
/// `out` as `source {index}: {value}`.
pub async fn drain<T: Display, W: Write>(fan_in: &mut FanIn<T>, out: &mut W) -> Result<Summary> {
    let mut summary = Summary::default();
    while let Some(event) = fan_in.next().await {
        summary.record(event, out)?;
    }
    debug_assert_eq!(summary.closed, fan_in.len());
    Ok(summary)
}

/// Same as [`drain`], blocking the calling thread.
pub fn drain_blocking<T: Display, W: Write>(
    fan_in: &mut BlockingFanIn<T>,
    out: &mut W,
) -> Result<Summary> {
    let mut summary = Summary::default();
    while let Some(event) = fan_in.recv() {
        summary.record(event, out)?;
    }
    debug_assert_eq!(summary.closed, fan_in.len());
    Ok(summary)
}

/// Starts the producer task and drains its channels on the current runtime.
pub async fn run<W: Write>(args: &Args, out: &mut W) -> Result<Summary> {
    let (senders, receivers) = producer::channels(args.sources, args.capacity)?;
    info!(sources = args.sources, capacity = args.capacity, "draining async sources");

    let producer = producer::spawn(senders);
    let mut fan_in = FanIn::new(receivers);
    let summary = drain(&mut fan_in, out).await?;
    producer.await??;

    info!(values = summary.values, closed = summary.closed, "all sources closed");
    Ok(summary)
}

/// Starts the producer thread and drains its channels on this thread.
pub fn run_blocking<W: Write>(args: &Args, out: &mut W) -> Result<Summary> {
    let (senders, receivers) = producer::blocking_channels(args.sources, args.capacity)?;
    info!(sources = args.sources, capacity = args.capacity, "draining blocking sources");

    let producer = producer::spawn_thread(senders);
    let mut fan_in = BlockingFanIn::new(receivers);
    let summary = drain_blocking(&mut fan_in, out)?;
    producer.join().map_err(|_| DrainError::ProducerPanicked)??;

    info!(values = summary.values, closed = summary.closed, "all sources closed");
    Ok(summary)
}
