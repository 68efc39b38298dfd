pub use doc_page::*;
pub use feature::*;

mod doc_page;
mod feature;
