//! Pure projections over loaded documents.

pub mod assets;
pub mod blocks;
pub mod filter;
pub mod media;
pub mod resolve;

pub use assets::{rewrite_asset_path, Normalize};
pub use blocks::TextBlock;
pub use filter::{
    blog_categories, count_categories, derive_categories, filter_by_facet, filter_indexed, Facets,
    ALL,
};
pub use resolve::{project_href, resolve_post, resolve_project};
