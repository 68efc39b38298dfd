use actix_web::{get, web, HttpResponse};
use leptos::prelude::*;

use crate::frontend::components::{Footer, Nav};
use crate::models::{DocPage, DOC_PAGES};
use crate::web::handlers::public::not_found;
use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::{DocLink, DocPageTemplate};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(doc_page);
}

fn doc_links(active_slug: &str) -> Vec<DocLink> {
    DOC_PAGES
        .iter()
        .map(|page| DocLink {
            slug: page.slug,
            title: page.title,
            active: page.slug == active_slug,
        })
        .collect()
}

#[get("/docs/{slug}")]
pub async fn doc_page(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let slug = path.into_inner();

    match DocPage::by_slug(&slug) {
        Ok(page) => render(DocPageTemplate {
            title: format!("{} | {}", page.title, state.config.site_title),
            description: page.summary.to_string(),
            heading: page.title,
            body_html: page.body_html,
            nav_html: view! { <Nav/> }.to_html(),
            footer_html: view! { <Footer/> }.to_html(),
            pages: doc_links(&slug),
        }),
        Err(e) => {
            log::debug!("{e}");
            not_found(state).await
        }
    }
}
