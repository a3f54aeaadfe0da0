pub mod error;
pub mod ingestion;
pub mod projection;
pub mod store;
pub mod surface;

pub use error::{FeedError, FeedResult};
pub use ingestion::{DeliverySink, IngestionSimulator, NotificationSource};
pub use projection::{CategoryFilter, FeedQuery};
pub use store::{Feed, Mutation, MutationOutcome, NotificationStore};
pub use surface::{BadgeView, ListView, OverlayTab};
