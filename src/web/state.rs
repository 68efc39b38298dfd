use crate::common::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: SiteConfig,
}
