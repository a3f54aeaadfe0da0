pub mod fixtures;
mod simulator;

pub use simulator::{IngestionSimulator, NotificationSource};

use notifeed_models::Notification;

use crate::error::FeedResult;
use crate::store::NotificationStore;

/// Receiving end of a delivery channel.
pub trait DeliverySink: Send + Sync {
    fn on_delivered(&self, entries: Vec<Notification>) -> FeedResult<()>;
}

impl DeliverySink for NotificationStore {
    fn on_delivered(&self, entries: Vec<Notification>) -> FeedResult<()> {
        self.replace_all(entries)
    }
}
