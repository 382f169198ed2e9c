mod common;

#[cfg(test)]
pub mod model_tests {
    use serde_json::json;

    use portfolio::models::*;
    use portfolio::services::Normalize;

    fn read<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).expect("fixture should deserialize")
    }

    #[test]
    fn test_project_tolerates_wrong_field_shapes() {
        let project: Project = read(json!({
            "title": 7,
            "technologies": "React",
            "features": ["a", null, 3],
            "playable": "yes",
            "isAcademic": 1
        }));

        assert_eq!(project.title, "7");
        assert!(project.technologies.is_empty());
        assert_eq!(project.features, vec!["a", "3"]);
        assert_eq!(project.playable, None);
        assert!(project.is_academic);
    }

    #[test]
    fn test_project_nested_fields_tolerate_null_and_wrong_shapes() {
        let project: Project = read(json!({
            "title": "A",
            "category": 5,
            "team": "x",
            "featuredImage": "oops",
            "buildInstructions": 5,
            "screenshots": [{ "src": "a.png" }, 42, { "src": "b.png" }]
        }));

        assert_eq!(project.category, Category::None);
        assert_eq!(project.team, None);
        assert_eq!(project.featured_image, None);
        assert_eq!(project.build_instructions, None);
        let srcs: Vec<_> = project.screenshots.iter().map(|s| s.src.as_str()).collect();
        assert_eq!(srcs, vec!["a.png", "b.png"]);

        let nulls: Project = read(json!({
            "category": null,
            "screenshots": null,
            "team": null
        }));
        assert_eq!(nulls.category, Category::None);
        assert!(nulls.screenshots.is_empty());
    }

    #[test]
    fn test_post_nested_fields_tolerate_null_and_wrong_shapes() {
        let post: BlogPost = read(json!({
            "id": 1,
            "sections": [
                { "title": "A", "blocks": null },
                { "blocks": [{ "text": "t", "link": "x" }, 7] }
            ]
        }));

        assert_eq!(post.sections.len(), 2);
        assert!(post.sections[0].blocks.is_empty());
        assert_eq!(post.sections[1].blocks.len(), 1);
        assert_eq!(post.sections[1].blocks[0].link, None);

        let bare: BlogPost = read(json!({ "id": 2, "sections": {} }));
        assert!(bare.sections.is_empty());
    }

    #[test]
    fn test_personal_and_skills_lists_tolerate_wrong_shapes() {
        let personal: Personal = read(json!({ "name": "A", "social": {}, "languages": null }));
        assert!(personal.social.is_empty());
        assert!(personal.languages.is_empty());

        let skills: Skills = read(json!({ "programming": null, "web": [{ "name": "Rust", "level": 80 }, "x"] }));
        assert!(skills.programming.is_empty());
        assert_eq!(skills.web.len(), 1);
    }

    #[test]
    fn test_project_date_falls_back() {
        let project: Project = read(json!({ "title": "A", "date": "" }));
        assert_eq!(project.date_label(), FALLBACK_PROJECT_DATE);
    }

    #[test]
    fn test_project_image_alt_falls_back_to_title() {
        let project: Project = read(json!({
            "title": "Alpha",
            "featuredImage": { "src": "x.png" }
        }));
        assert_eq!(project.image_alt(), "Alpha");
        assert_eq!(project.image_src(), Some("x.png"));
    }

    #[test]
    fn test_project_category_shapes() {
        let one: Project = read(json!({ "category": "web" }));
        let many: Project = read(json!({ "category": ["ai", "web"] }));
        let none: Project = read(json!({}));
        let empty_list: Project = read(json!({ "category": [] }));

        assert_eq!(one.category.primary(), Some("web"));
        assert_eq!(many.category.primary(), Some("ai"));
        assert_eq!(none.category.primary(), None);
        assert_eq!(empty_list.category.primary(), None);
    }

    #[test]
    fn test_build_instructions_steps_or_text() {
        let steps: Project = read(json!({ "buildInstructions": ["a", "b"] }));
        let text: Project = read(json!({ "buildInstructions": "cargo run" }));

        assert_eq!(
            steps.build_instructions,
            Some(BuildInstructions::Steps(vec!["a".into(), "b".into()]))
        );
        assert_eq!(
            text.build_instructions,
            Some(BuildInstructions::Text("cargo run".into()))
        );
        assert!(text.has_extra_docs());
    }

    #[test]
    fn test_project_showcase_and_team() {
        let project: Project = read(json!({
            "team": {
                "team_name": "Crew",
                "team_logo": "assets/images/crew.png",
                "team_leader": { "name": "Lead", "link": "https://x" },
                "team_members": [{ "name": "M" }]
            }
        }));

        assert!(project.has_showcase());
        let project = project.normalize();
        let team = project.team.expect("team");
        assert_eq!(team.team_logo.as_deref(), Some("/images/crew.png"));
        assert_eq!(team.team_members[0].link, "");
    }

    #[test]
    fn test_post_id_from_number_or_string() {
        let a: BlogPost = read(json!({ "id": 1 }));
        let b: BlogPost = read(json!({ "id": "1" }));
        let c: BlogPost = read(json!({ "id": 1.0 }));

        assert_eq!(a.id, b.id);
        assert_eq!(a.id, c.id);
        assert_eq!(a.href(), "/blog/1");
    }

    #[test]
    fn test_post_body_prefers_sections() {
        let sections: BlogPost = read(json!({
            "sections": [{ "blocks": [{ "text": "x" }] }],
            "content": "<p>ignored</p>"
        }));
        let markup: BlogPost = read(json!({ "content": "<p>raw</p>" }));
        let empty: BlogPost = read(json!({ "sections": [], "content": "  " }));

        assert!(matches!(sections.body(), PostBody::Sections(s) if s.len() == 1));
        assert_eq!(markup.body(), PostBody::Markup("<p>raw</p>"));
        assert_eq!(empty.body(), PostBody::Empty);
    }

    #[test]
    fn test_block_fields_are_optional() {
        let block: Block = read(json!({
            "text2": "after",
            "link": { "href": "https://x", "text": "x" },
            "image": "assets/images/b.png",
            "description": "cap"
        }));

        assert_eq!(block.text, None);
        assert_eq!(block.text2.as_deref(), Some("after"));
        assert_eq!(block.link.map(|l| l.href), Some("https://x".to_string()));
    }

    #[test]
    fn test_post_normalizes_block_images() {
        let post: BlogPost = read(json!({
            "sections": [{ "blocks": [{ "image": "assets/images/b.png" }] }]
        }));
        let post = post.normalize();
        assert_eq!(
            post.sections[0].blocks[0].image.as_deref(),
            Some("/images/b.png")
        );
    }

    #[test]
    fn test_skill_levels_read_percentages() {
        let skills: Skills = read(json!({
            "programming": [
                { "name": "A", "level": "85%" },
                { "name": "B", "level": 140 },
                { "name": "C", "level": "n/a" }
            ]
        }));

        let levels: Vec<u8> = skills.programming.iter().map(|s| s.level).collect();
        assert_eq!(levels, vec![85, 100, 0]);
        assert_eq!(skills.programming[0].bar_style(), "width: 85%");
        assert!(!skills.is_empty());
        assert!(Skills::default().is_empty());
    }

    #[test]
    fn test_strongest_skills_sorted_and_stable() {
        let skills: Skills = read(json!({
            "programming": [{ "name": "A", "level": 80 }, { "name": "B", "level": 90 }],
            "web": [{ "name": "C", "level": 80 }, { "name": "D", "level": 10 }]
        }));

        let names: Vec<&str> = skills.strongest(50).iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_social_icon_from_hint() {
        assert_eq!(SocialIcon::from_hint("fab fa-github"), SocialIcon::GitHub);
        assert_eq!(SocialIcon::from_hint("fab fa-linkedin-in"), SocialIcon::LinkedIn);
        assert_eq!(SocialIcon::from_hint("fas fa-code"), SocialIcon::Code);
        assert_eq!(SocialIcon::from_hint(""), SocialIcon::Code);
    }

    #[test]
    fn test_personal_bio_alias_and_image_rewrite() {
        let personal: Personal = read(json!({
            "bio": "Hi",
            "image": "/assets/images/me.jpg"
        }));
        let personal = personal.normalize();

        assert_eq!(personal.about, "Hi");
        assert_eq!(personal.image.as_deref(), Some("/images/me.jpg"));
    }

    #[test]
    fn test_certification_badge_rewrite() {
        let cert: Certification = read(json!({
            "title": "T",
            "badge": "assets/images/badge.png"
        }));
        assert_eq!(cert.normalize().badge.as_deref(), Some("/images/badge.png"));
    }

    #[test]
    fn test_education_grades_as_text() {
        let education: Education = read(json!({ "gpa": 5, "cgpa": null }));
        assert_eq!(education.gpa.as_deref(), Some("5"));
        assert_eq!(education.cgpa, None);
    }
}
