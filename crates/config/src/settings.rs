use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub ingestion: IngestionSettings,
    pub surface: SurfaceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

/// Simulated delivery channel that populates the store once per session.
#[derive(Debug, Deserialize, Clone)]
pub struct IngestionSettings {
    pub delay_ms: u64,
    /// JSON array of notifications. The built-in demo feed is used when unset.
    pub seed_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SurfaceSettings {
    pub overlay_limit: usize,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix("NOTIFEED"),
            )
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 3000)?
            .set_default("app.cors_origins", Vec::<String>::new())?
            .set_default("ingestion.delay_ms", 1000)?
            .set_default("ingestion.seed_path", None::<String>)?
            .set_default("surface.overlay_limit", 5)?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::load().expect("Failed to load default settings")
    }
}
