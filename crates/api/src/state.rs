use notifeed_config::Settings;
use notifeed_services::NotificationStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub notifications: Arc<NotificationStore>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::with_store(settings, Arc::new(NotificationStore::new()))
    }

    pub fn with_store(settings: Settings, notifications: Arc<NotificationStore>) -> Self {
        Self {
            settings,
            notifications,
        }
    }
}
