use clap::{Parser, ValueEnum};

use crate::{producer, Result};

/// Drain a set of bounded channels fed by one background producer.
#[derive(Parser, Debug, Clone)]
#[command(name = "multi-channel-select")]
pub struct Args {
    /// Number of source channels
    #[arg(short, long, default_value_t = 3)]
    pub sources: usize,

    /// Capacity of each channel
    #[arg(short, long, default_value_t = 1)]
    pub capacity: usize,

    /// Which runtime drives the producer and the select loop
    #[arg(long, value_enum, default_value_t = Backend::Async)]
    pub backend: Backend,

    /// Log every closure at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// tokio task and `mpsc` channels
    Async,
    /// OS thread and crossbeam channels
    Blocking,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            sources: 3,
            capacity: 1,
            backend: Backend::Async,
            verbose: false,
        }
    }
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        producer::check(self.sources, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrainError;

    #[test]
    fn defaults_match_three_single_slot_channels() {
        let args = Args::try_parse_from(["multi-channel-select"]).unwrap();
        assert_eq!(args.sources, 3);
        assert_eq!(args.capacity, 1);
        assert_eq!(args.backend, Backend::Async);
        assert!(!args.verbose);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "multi-channel-select",
            "-s",
            "5",
            "--capacity",
            "4",
            "--backend",
            "blocking",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.sources, 5);
        assert_eq!(args.capacity, 4);
        assert_eq!(args.backend, Backend::Blocking);
        assert!(args.verbose);
    }

    #[test]
    fn rejects_zero_sources_and_capacity() {
        let args = Args::try_parse_from(["multi-channel-select", "--sources", "0"]).unwrap();
        assert!(matches!(args.validate(), Err(DrainError::NoSources)));

        let args = Args::try_parse_from(["multi-channel-select", "-c", "0"]).unwrap();
        assert!(matches!(args.validate(), Err(DrainError::ZeroCapacity)));
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Args::try_parse_from(["multi-channel-select", "--backend", "green"]).is_err());
    }
}
