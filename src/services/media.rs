use chrono::NaiveDate;

/// Formats `2024-03-07` (optionally followed by a time part) as
/// `March 7, 2024`. Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

const YOUTUBE_ID_LEN: usize = 11;
const YOUTUBE_HOSTS: [&str; 2] = ["youtu.be/", "youtube.com/"];
const YOUTUBE_PATHS: [&str; 4] = ["watch?v=", "embed/", "v/", "shorts/"];

/// Extracts the 11-character video id from the usual YouTube URL shapes.
pub fn youtube_id(url: &str) -> Option<&str> {
    YOUTUBE_HOSTS.iter().find_map(|host| {
        let start = url.find(host)? + host.len();
        let rest = &url[start..];
        let rest = YOUTUBE_PATHS
            .iter()
            .find_map(|p| rest.strip_prefix(p))
            .unwrap_or(rest);
        let id = rest.get(..YOUTUBE_ID_LEN)?;
        id.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            .then_some(id)
    })
}

pub fn youtube_embed_url(url: &str) -> Option<String> {
    youtube_id(url).map(|id| format!("https://www.youtube.com/embed/{id}"))
}

/// Next gallery position, wrapping to the first image.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Previous gallery position, wrapping to the last image.
pub fn prev_index(current: usize, len: usize) -> usize {
    match (current, len) {
        (_, 0) => 0,
        (0, len) => len - 1,
        (current, _) => current - 1,
    }
}

/// Reading progress in percent for a content element at `content_top` with
/// `content_height`, given the window scroll offset.
pub fn reading_progress(scroll_y: f64, content_top: f64, content_height: f64) -> f64 {
    let position = scroll_y - content_top + 100.0;
    if position <= 0.0 || content_height <= 0.0 {
        return 0.0;
    }
    (position / content_height * 100.0).min(100.0)
}

/// `(shown, hidden)` split for chip rows with a `+N` overflow badge.
pub fn split_overflow<T>(items: &[T], max: usize) -> (&[T], &[T]) {
    items.split_at(items.len().min(max))
}
