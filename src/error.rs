use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrainError {
    #[error("at least one source is required")]
    NoSources,
    #[error("channel capacity must be at least 1")]
    ZeroCapacity,
    #[error("source {0} was closed by the consumer before the producer finished")]
    SourceGone(usize),
    #[error("producer task failed: {0}")]
    Producer(#[from] tokio::task::JoinError),
    #[error("producer thread panicked")]
    ProducerPanicked,
    #[error("could not write drained value: {0}")]
    Output(#[from] std::io::Error),
}
