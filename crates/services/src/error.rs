use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Duplicate notification id: {0}")]
    DuplicateId(u64),
    #[error("Notification feed has not been delivered yet")]
    NotReady,
    #[error("Notification {0} has empty text")]
    EmptyText(u64),
    #[error("Failed to read notification source: {0}")]
    SourceIo(#[from] std::io::Error),
    #[error("Invalid notification source: {0}")]
    SourceFormat(#[from] serde_json::Error),
}

pub type FeedResult<T> = Result<T, FeedError>;
