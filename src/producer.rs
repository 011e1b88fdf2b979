//! The single background writer feeding every source.
//!
//! Source `i` receives the value `i` and is closed right after, in source
//! order.

use std::thread;

use crossbeam::channel as cb;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::{DrainError, Result};

/// Creates `count` bounded tokio channels of the given capacity.
pub fn channels<T>(
    count: usize,
    capacity: usize,
) -> Result<(Vec<mpsc::Sender<T>>, Vec<mpsc::Receiver<T>>)> {
    check(count, capacity)?;
    Ok((0..count).map(|_| mpsc::channel(capacity)).unzip())
}

/// Creates `count` bounded crossbeam channels of the given capacity.
pub fn blocking_channels<T>(
    count: usize,
    capacity: usize,
) -> Result<(Vec<cb::Sender<T>>, Vec<cb::Receiver<T>>)> {
    check(count, capacity)?;
    Ok((0..count).map(|_| cb::bounded(capacity)).unzip())
}

/// Rejects channel sets that could never carry a value.
pub fn check(count: usize, capacity: usize) -> Result<()> {
    if count == 0 {
        return Err(DrainError::NoSources);
    }
    if capacity == 0 {
        return Err(DrainError::ZeroCapacity);
    }
    Ok(())
}

/// Spawns the producer task on the current tokio runtime.
pub fn spawn(senders: Vec<mpsc::Sender<i64>>) -> JoinHandle<Result<()>> {
    tokio::spawn(async move {
        for (source, tx) in senders.into_iter().enumerate() {
            tx.send(source as i64)
                .await
                .map_err(|_| DrainError::SourceGone(source))?;
            // dropping the last sender closes the channel
            drop(tx);
            debug!(source, "closed source");
        }
        Ok(())
    })
}

/// Spawns the producer on a dedicated OS thread.
pub fn spawn_thread(senders: Vec<cb::Sender<i64>>) -> thread::JoinHandle<Result<()>> {
    thread::spawn(move || {
        for (source, tx) in senders.into_iter().enumerate() {
            tx.send(source as i64).map_err(|_| DrainError::SourceGone(source))?;
            drop(tx);
            debug!(source, "closed source");
        }
        Ok(())
    })
}
