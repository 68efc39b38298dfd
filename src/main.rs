use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use vibeaura_docs::common::SiteConfig;
use vibeaura_docs::web;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = SiteConfig::from_env()
        .expect("Invalid site configuration (check BIND_ADDR / STATIC_DIR)");
    let bind_addr = config.bind_addr.clone();
    let static_dir = config.static_dir.clone();
    let state = Data::new(web::AppState { config });

    log::info!("vibeaura-docs listening on http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(web::handlers::configure)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
            .default_service(actix_web::web::route().to(web::handlers::public::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
