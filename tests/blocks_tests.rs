mod common;

#[cfg(test)]
pub mod blocks_tests {
    use portfolio::services::TextBlock;

    fn heading(level: u8, text: &str) -> TextBlock {
        TextBlock::Heading {
            level,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_headings_by_marker_depth() {
        assert_eq!(TextBlock::parse("# Title"), heading(1, "Title"));
        assert_eq!(TextBlock::parse("## Sub"), heading(2, "Sub"));
        assert_eq!(TextBlock::parse("### Minor"), heading(3, "Minor"));
    }

    #[test]
    fn test_heading_marker_removed_once() {
        assert_eq!(TextBlock::parse("## a ## b"), heading(2, "a ## b"));
    }

    #[test]
    fn test_marker_without_space_is_a_paragraph() {
        assert_eq!(
            TextBlock::parse("#hashtag"),
            TextBlock::Paragraph("#hashtag".to_string())
        );
    }

    #[test]
    fn test_heading_tags() {
        assert_eq!(TextBlock::heading_tag(1), "h2");
        assert_eq!(TextBlock::heading_tag(2), "h3");
        assert_eq!(TextBlock::heading_tag(3), "h4");
    }

    #[test]
    fn test_fenced_code_strips_fences_and_trims() {
        assert_eq!(
            TextBlock::parse("```\nlet x = 1;\n```"),
            TextBlock::Code("let x = 1;".to_string())
        );
    }

    #[test]
    fn test_code_needs_both_fences() {
        assert!(matches!(
            TextBlock::parse("```\nunterminated"),
            TextBlock::Paragraph(_)
        ));
    }

    #[test]
    fn test_embedded_list_lines() {
        assert_eq!(
            TextBlock::parse("Steps:\n- install\n* build\n\n- run "),
            TextBlock::List(vec![
                "Steps:".to_string(),
                "install".to_string(),
                "build".to_string(),
                "run".to_string(),
            ])
        );
    }

    #[test]
    fn test_leading_bullet_alone_is_a_paragraph() {
        assert_eq!(
            TextBlock::parse("- only one"),
            TextBlock::Paragraph("- only one".to_string())
        );
    }

    #[test]
    fn test_heading_wins_over_list() {
        assert_eq!(
            TextBlock::parse("# Title\n- item"),
            heading(1, "Title\n- item")
        );
    }
}
