use std::path::PathBuf;

use actix_web::cookie::Key;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub app_name: String,
    pub session_key: Option<String>,
    pub seed_file: Option<PathBuf>,
    /// Organizer recorded on meetings created through the form.
    pub default_organizer: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: "127.0.0.1:8080".to_string(),
            app_name: "Collaboration Hub".to_string(),
            session_key: None,
            seed_file: None,
            default_organizer: "John Smith".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        AppConfig {
            bind_addr: var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            app_name: var("APP_NAME").unwrap_or(defaults.app_name),
            session_key: var("SESSION_KEY"),
            seed_file: var("SEED_FILE").map(PathBuf::from),
            default_organizer: var("DEFAULT_ORGANIZER").unwrap_or(defaults.default_organizer),
        }
    }

    /// Cookie signing key. Needs 64+ bytes to survive restarts; otherwise a
    /// random key is generated.
    pub fn cookie_key(&self) -> Key {
        match self.session_key.as_deref() {
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
