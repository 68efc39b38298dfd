use leptos::prelude::*;

use crate::frontend::components::class_names;
use crate::models::{FeatureItem, FEATURES};

/// One feature card: icon, centered heading, description.
#[component]
pub fn Feature(
    item: FeatureItem,
    #[prop(optional, into)] extra_class: String,
) -> impl IntoView {
    let classes = class_names([
        ("feature-col", true),
        (extra_class.as_str(), !extra_class.is_empty()),
    ]);

    view! {
        <div class=classes id=item.slug()>
            <div class="feature-icon text-center">
                <img src=item.icon.src alt=item.icon.alt role="img"/>
            </div>
            <div class="feature-text text-center">
                <h3>{item.title}</h3>
                <p>{item.description}</p>
            </div>
        </div>
    }
}

/// Projects an ordered list of features into one row of columns. The
/// projection is 1:1 and order-preserving: no filtering, no sorting.
#[component]
pub fn FeaturesRow(items: Vec<FeatureItem>) -> impl IntoView {
    view! {
        <div class="feature-row">
            {items
                .into_iter()
                .map(|item| view! { <Feature item=item/> })
                .collect_view()}
        </div>
    }
}

/// Homepage features section: the static feature list as one row of cards.
#[component]
pub fn HomepageFeatures() -> impl IntoView {
    view! {
        <section class="features" id="features">
            <div class="container">
                <FeaturesRow items=FEATURES.to_vec()/>
            </div>
        </section>
    }
}
