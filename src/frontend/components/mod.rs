//! Reusable UI components for the vibeaura docs frontend

mod footer;
mod homepage_features;
mod nav;

pub use footer::Footer;
pub use homepage_features::{Feature, FeaturesRow, HomepageFeatures};
pub use nav::Nav;

/// Joins class fragments whose condition holds, separated by single spaces.
pub fn class_names<'a>(classes: impl IntoIterator<Item = (&'a str, bool)>) -> String {
    let mut out = String::new();
    for (class, enabled) in classes {
        if enabled && !class.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(class);
        }
    }
    out
}
