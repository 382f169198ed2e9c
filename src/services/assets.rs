//! Asset path handling at the data-normalization boundary.

/// Prefix authors use for images in the JSON documents.
pub const SOURCE_IMAGE_PREFIX: &str = "assets/images";
/// Prefix the site serves images from.
pub const PUBLIC_IMAGE_PREFIX: &str = "/images";

/// Rewrites the first `assets/images` segment to `/images`. Paths without the
/// segment pass through unchanged, as do absolute URLs.
pub fn rewrite_asset_path(path: &str) -> String {
    if path.contains("://") {
        return path.to_string();
    }
    let rewritten = path.replacen(SOURCE_IMAGE_PREFIX, PUBLIC_IMAGE_PREFIX, 1);
    match rewritten.strip_prefix("//") {
        Some(rest) if path.starts_with('/') && !path.starts_with("//") => format!("/{rest}"),
        _ => rewritten,
    }
}

pub fn rewrite_opt(path: Option<String>) -> Option<String> {
    path.map(|p| rewrite_asset_path(&p))
}

/// Applied exactly once to every record when its document is loaded.
pub trait Normalize: Sized {
    fn normalize(self) -> Self;
}
