use actix_web::cookie::Key;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub session_key: Option<String>,
    pub seed_demo: bool,
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://data/premios.db".to_string(),
            bind_addr: "127.0.0.1:8080".to_string(),
            db_max_connections: 8,
            session_key: None,
            seed_demo: false,
            app_name: "Premios".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    log::warn!(
                        "Invalid DB_MAX_CONNECTIONS {raw:?}, using {}",
                        defaults.db_max_connections
                    );
                    defaults.db_max_connections
                }
            },
            None => defaults.db_max_connections,
        };

        let seed_demo = lookup("SEED_DEMO")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.seed_demo);

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            db_max_connections,
            session_key: lookup("SESSION_KEY"),
            seed_demo,
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
        }
    }

    /// Cookie signing key. SESSION_KEY must be at least 64 bytes to be used,
    /// otherwise a random key is generated and sessions end on restart.
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}
