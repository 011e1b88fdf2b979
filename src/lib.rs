//! Drain a fixed set of bounded channels from a single consumer.
//!
//! One producer writes into N queues and closes each of them. The consumer
//! waits on all of them at once, prints what arrives and counts closures
//! until every queue is exhausted. A closed queue keeps its slot in the wait
//! set but is marked disabled so it is never selected again.

pub mod blocking;
pub mod config;
pub mod drain;
pub mod error;
pub mod fan_in;
pub mod producer;

pub use config::{Args, Backend};
pub use drain::{drain, drain_blocking, run, run_blocking, Summary};
pub use error::DrainError;
pub use fan_in::{Event, FanIn, Slot};

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, DrainError>;
