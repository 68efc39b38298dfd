use askama::Template;

/// Document wrapper around a server-rendered page component.
#[derive(Template)]
#[template(path = "base.html")]
pub struct PageTemplate {
    pub title: String,
    pub description: String,
    pub app_html: String,
}

/// Sidebar entry on documentation pages.
pub struct DocLink {
    pub slug: &'static str,
    pub title: &'static str,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "docs/page.html")]
pub struct DocPageTemplate {
    pub title: String,
    pub description: String,
    pub heading: &'static str,
    pub body_html: &'static str,
    pub nav_html: String,
    pub footer_html: String,
    pub pages: Vec<DocLink>,
}
