mod common;

#[cfg(test)]
pub mod media_tests {
    use portfolio::services::assets::*;
    use portfolio::services::media::*;

    #[test]
    fn test_rewrite_asset_path() {
        assert_eq!(rewrite_asset_path("assets/images/a.png"), "/images/a.png");
        assert_eq!(rewrite_asset_path("/assets/images/a.png"), "/images/a.png");
        assert_eq!(rewrite_asset_path("/images/a.png"), "/images/a.png");
    }

    #[test]
    fn test_rewrite_only_first_occurrence() {
        assert_eq!(
            rewrite_asset_path("assets/images/assets/images/a.png"),
            "/images/assets/images/a.png"
        );
    }

    #[test]
    fn test_rewrite_leaves_urls_alone() {
        let url = "https://cdn.example.com/assets/images/a.png";
        assert_eq!(rewrite_asset_path(url), url);
        assert_eq!(rewrite_opt(None), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-07"), "March 7, 2024");
        assert_eq!(format_date("2024-12-25T10:00:00Z"), "December 25, 2024");
        assert_eq!(format_date("Spring 2024"), "Spring 2024");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_youtube_ids() {
        let id = Some("dQw4w9WgXcQ");
        assert_eq!(youtube_id("https://youtu.be/dQw4w9WgXcQ"), id);
        assert_eq!(youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=3"), id);
        assert_eq!(youtube_id("https://www.youtube.com/embed/dQw4w9WgXcQ"), id);
        assert_eq!(youtube_id("https://youtube.com/v/dQw4w9WgXcQ"), id);
        assert_eq!(youtube_id("https://youtube.com/shorts/dQw4w9WgXcQ"), id);
    }

    #[test]
    fn test_youtube_rejects_other_urls() {
        assert_eq!(youtube_id("https://vimeo.com/123456789"), None);
        assert_eq!(youtube_id("https://youtu.be/short"), None);
        assert_eq!(
            youtube_embed_url("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
    }

    #[test]
    fn test_gallery_wraps_around() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(2, 3), 1);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn test_reading_progress() {
        assert_eq!(reading_progress(0.0, 500.0, 1000.0), 0.0);
        assert_eq!(reading_progress(400.0, 500.0, 1000.0), 0.0);
        assert_eq!(reading_progress(900.0, 500.0, 1000.0), 50.0);
        assert_eq!(reading_progress(5000.0, 500.0, 1000.0), 100.0);
        assert_eq!(reading_progress(900.0, 500.0, 0.0), 0.0);
    }

    #[test]
    fn test_split_overflow() {
        let items = ["a", "b", "c", "d", "e", "f", "g"];
        let (shown, hidden) = split_overflow(&items, 5);
        assert_eq!(shown, &["a", "b", "c", "d", "e"]);
        assert_eq!(hidden.join(", "), "f, g");

        let (shown, hidden) = split_overflow(&items[..2], 5);
        assert_eq!(shown.len(), 2);
        assert!(hidden.is_empty());
    }
}
