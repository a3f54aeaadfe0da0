use notifeed_config::IngestionSettings;
use notifeed_models::Notification;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::{DeliverySink, fixtures};
use crate::error::FeedResult;

/// Where the simulated delivery reads its notifications from.
#[derive(Debug, Clone)]
pub enum NotificationSource {
    Fixed(Vec<Notification>),
    /// JSON array of notifications.
    File(PathBuf),
}

impl NotificationSource {
    pub fn demo() -> Self {
        NotificationSource::Fixed(fixtures::demo_feed())
    }

    pub async fn load(&self) -> FeedResult<Vec<Notification>> {
        match self {
            NotificationSource::Fixed(entries) => Ok(entries.clone()),
            NotificationSource::File(path) => {
                let bytes = tokio::fs::read(path).await?;
                Ok(serde_json::from_slice(&bytes)?)
            }
        }
    }
}

/// Stands in for a real delivery channel: waits, then delivers once.
pub struct IngestionSimulator {
    source: NotificationSource,
    delay: Duration,
}

impl IngestionSimulator {
    pub fn new(source: NotificationSource, delay: Duration) -> Self {
        Self { source, delay }
    }

    pub fn from_settings(settings: &IngestionSettings) -> Self {
        let source = match &settings.seed_path {
            Some(path) => NotificationSource::File(PathBuf::from(path)),
            None => NotificationSource::demo(),
        };
        Self::new(source, Duration::from_millis(settings.delay_ms))
    }

    /// Spawns the one-shot delivery. Not cancelled, not retried: on failure
    /// the sink is never populated and stays loading.
    pub fn spawn<S>(self, sink: Arc<S>) -> JoinHandle<()>
    where
        S: DeliverySink + 'static,
    {
        tokio::spawn(async move {
            if let Err(e) = self.run(sink.as_ref()).await {
                error!(error = %e, "Notification delivery failed");
            }
        })
    }

    /// Waits for the configured delay and delivers. Returns the entry count.
    pub async fn run<S>(&self, sink: &S) -> FeedResult<usize>
    where
        S: DeliverySink + ?Sized,
    {
        tokio::time::sleep(self.delay).await;

        let entries = self.source.load().await?;
        let count = entries.len();
        sink.on_delivered(entries)?;

        info!(count, delay = ?self.delay, "Notifications delivered");
        Ok(count)
    }
}
