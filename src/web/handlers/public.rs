use actix_web::http::StatusCode;
use actix_web::{get, web, HttpResponse, Responder};
use leptos::prelude::*;

use crate::frontend::pages::{HomePage, NotFound};
use crate::web::helpers::{render, render_status};
use crate::web::state::AppState;
use crate::web::templates::PageTemplate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let app_html = view! { <HomePage/> }.to_html();

    render(PageTemplate {
        title: state.config.site_title.clone(),
        description: "Distributed, system-intimate AI engineering ecosystem."
            .to_string(),
        app_html,
    })
}

/// Default service for unmatched routes.
pub async fn not_found(state: web::Data<AppState>) -> HttpResponse {
    let app_html = view! { <NotFound/> }.to_html();

    render_status(
        PageTemplate {
            title: format!("Page not found | {}", state.config.site_title),
            description: "Page not found.".to_string(),
            app_html,
        },
        StatusCode::NOT_FOUND,
    )
}
