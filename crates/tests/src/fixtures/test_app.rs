use notifeed_api::{build_router, state::AppState};
use notifeed_config::Settings;
use notifeed_models::Notification;
use notifeed_services::NotificationStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use super::seed::seeded_store;

/// A running test application with its own in-process notification store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub base_url: String,
    pub settings: Settings,
    pub store: Arc<NotificationStore>,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn a test server whose store still waits for its first delivery.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(NotificationStore::new())).await
    }

    /// Spawn a test server whose store was already populated with `entries`.
    pub async fn spawn_with_feed(entries: Vec<Notification>) -> Self {
        Self::spawn_with_store(seeded_store(entries)).await
    }

    async fn spawn_with_store(store: Arc<NotificationStore>) -> Self {
        let settings = Settings::load().unwrap_or_else(|_| test_settings());

        let app_state = AppState::with_store(settings.clone(), Arc::clone(&store));
        let app = build_router(app_state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let base_url = format!("http://{}", addr);
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            addr,
            base_url,
            settings,
            store,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path))
    }
}

fn test_settings() -> Settings {
    Settings {
        app: notifeed_config::AppSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec![],
        },
        ingestion: notifeed_config::IngestionSettings {
            delay_ms: 0,
            seed_path: None,
        },
        surface: notifeed_config::SurfaceSettings { overlay_limit: 5 },
    }
}
