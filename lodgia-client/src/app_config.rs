use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub backend: BackendConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Base URL of the REST backend, e.g. `http://localhost:8080/api`.
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

/// Whether booking creation carries the bearer token. The backend policy is
/// unresolved, so this stays a configuration point rather than a guess.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingAuthMode {
    /// Attach the bearer token when a live session exists.
    Bearer,
    /// Always create bookings anonymously.
    #[default]
    Anonymous,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BookingConfig {
    #[serde(default)]
    pub auth: BookingAuthMode,
}

impl ClientConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file, default 'development'
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `LODGIA__BACKEND__BASE_URL=...`
            .add_source(config::Environment::with_prefix("LODGIA").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Programmatic configuration with defaults, used by tests and embedders
    /// that already know the backend address.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            backend: BackendConfig {
                base_url: base_url.into(),
                request_timeout_secs: default_timeout_secs(),
            },
            booking: BookingConfig::default(),
        }
    }

    pub fn with_booking_auth(mut self, mode: BookingAuthMode) -> Self {
        self.booking.auth = mode;
        self
    }
}
