pub mod config;
pub mod errors;

pub use config::SiteConfig;
pub use errors::{ConfigError, DocsError};
