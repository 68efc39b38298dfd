use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {0:?} (expected host:port)")]
    InvalidBindAddr(String),

    #[error("Static asset directory {0:?} is empty")]
    EmptyStaticDir(String),
}

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("No documentation page with slug {0:?}")]
    UnknownPage(String),
}
