use crate::common::errors::ConfigError;

/// Site configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub static_dir: String,
    pub site_title: String,
}

impl SiteConfig {
    /// Reads configuration from the environment, falling back to defaults
    /// suitable for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "./static".to_string());
        let site_title = std::env::var("SITE_TITLE")
            .unwrap_or_else(|_| "VibeAuracle".to_string());

        Self::from_parts(bind_addr, static_dir, site_title)
    }

    pub fn from_parts(
        bind_addr: String,
        static_dir: String,
        site_title: String,
    ) -> Result<Self, ConfigError> {
        if !bind_addr.contains(':') {
            return Err(ConfigError::InvalidBindAddr(bind_addr));
        }
        if static_dir.trim().is_empty() {
            return Err(ConfigError::EmptyStaticDir(static_dir));
        }

        Ok(Self { bind_addr, static_dir, site_title })
    }
}
