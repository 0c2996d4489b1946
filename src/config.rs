use axum_extra::extract::cookie::Key;
use base64::Engine;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use url::Url;

/// Runtime configuration, resolved from the environment over built-in
/// defaults. Tests construct `Config::default()` and override fields
/// directly instead of going through the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub loglevel: String,
    /// Access credential for the generative-language API.
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: Url,
    /// Secret used to encrypt session cookies (base64 or raw bytes,
    /// at least 32 bytes of entropy). A random key is generated when unset,
    /// which invalidates sessions across restarts.
    pub cookie_secret: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:cognicare.db".to_string(),
            bind_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            google_api_key: String::new(),
            gemini_model: "gemini-2.5-flash".to_string(),
            gemini_base_url: Url::parse("https://generativelanguage.googleapis.com/v1beta")
                .expect("default Gemini endpoint URL is valid"),
            cookie_secret: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Env::raw().only(&[
                "DATABASE_URL",
                "BIND_ADDR",
                "LOGLEVEL",
                "GOOGLE_API_KEY",
                "GEMINI_MODEL",
                "GEMINI_BASE_URL",
                "COOKIE_SECRET",
            ]))
            .extract()
    }

    /// Derive the session-cookie encryption key from the configured secret.
    pub fn cookie_key(&self) -> Key {
        match self.cookie_secret.as_deref() {
            Some(secret) => {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(secret)
                    .unwrap_or_else(|_| secret.as_bytes().to_vec());
                Key::derive_from(&bytes)
            }
            None => Key::generate(),
        }
    }
}
