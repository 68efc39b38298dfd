pub mod docs;
pub mod public;

use actix_web::web;

/// Configure all routes EXCEPT the not-found fallback. The fallback is
/// registered as the default service so static files keep their own route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    docs::configure(cfg);
}
