mod common;

#[cfg(test)]
pub mod loader_tests {
    use super::common::*;

    use portfolio::api::*;
    use portfolio::common::*;
    use portfolio::models::*;
    use portfolio::types::ViewState;

    #[tokio::test]
    async fn test_load_projects_normalizes_asset_paths() {
        let source = MockSource::seeded();
        let ViewState::Ready(projects) = load_projects(&source).await else {
            panic!("projects did not load");
        };

        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0].image_src(), Some("/images/a.png"));
        assert_eq!(projects[2].screenshots[0].src, "/images/g1.png");
    }

    #[tokio::test]
    async fn test_load_projects_http_error_is_error_state() {
        let source = MockSource::seeded().with_status(Document::Projects, 404);
        let state = load_projects(&source).await;

        assert_eq!(
            state.error(),
            Some("Failed to fetch projects data (HTTP 404)")
        );
    }

    #[tokio::test]
    async fn test_load_projects_network_error_is_error_state() {
        let source = MockSource::seeded().failing(
            Document::Projects,
            FetchError::Network(Document::Projects, "connection refused".into()),
        );
        assert!(load_projects(&source).await.is_error());
    }

    #[tokio::test]
    async fn test_malformed_document_is_error_state() {
        let source = MockSource::seeded().with(Document::Projects, "{ not json");
        let state = load_projects(&source).await;

        assert!(state
            .error()
            .is_some_and(|m| m.starts_with("Failed to read projects data")));
    }

    #[tokio::test]
    async fn test_non_array_collection_reads_as_empty() {
        let source = MockSource::seeded().with(Document::Projects, r#"{ "title": "x" }"#);
        assert_eq!(load_projects(&source).await, ViewState::Ready(Vec::new()));
    }

    #[tokio::test]
    async fn test_unreadable_entries_are_dropped() {
        let source = MockSource::seeded().with(
            Document::Projects,
            r#"[{ "title": "Kept" }, 42, { "title": "Also kept", "featuredImage": "oops" }]"#,
        );
        let ViewState::Ready(projects) = load_projects(&source).await else {
            panic!("projects did not load");
        };

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Kept");
        assert_eq!(projects[1].title, "Also kept");
        assert_eq!(projects[1].featured_image, None);
    }

    #[tokio::test]
    async fn test_null_nested_fields_keep_project_index() {
        let source = MockSource::seeded().with(
            Document::Projects,
            r#"[
                { "title": "First", "screenshots": null, "team": null, "category": null },
                { "title": "Second", "buildInstructions": 5, "category": 5 }
            ]"#,
        );

        let first = load_project(&source, "0").await;
        assert_eq!(first.ready().map(|p| p.title.as_str()), Some("First"));
        assert!(first.ready().is_some_and(|p| p.screenshots.is_empty()));

        let second = load_project(&source, "1").await;
        assert_eq!(second.ready().map(|p| p.title.as_str()), Some("Second"));
    }

    #[tokio::test]
    async fn test_null_sections_fall_back_to_content() {
        let source = MockSource::seeded().with(
            Document::Blog,
            r#"{ "posts": [{ "id": 1, "sections": null, "content": "<p>hi</p>" }] }"#,
        );
        let ViewState::Ready(post) = load_post(&source, "1").await else {
            panic!("post did not load");
        };

        assert_eq!(post.body(), PostBody::Markup("<p>hi</p>"));
    }

    #[tokio::test]
    async fn test_home_loads_with_null_lists() {
        let source = MockSource::seeded()
            .with(
                Document::Personal,
                r#"{ "name": "A", "social": null, "languages": null }"#,
            )
            .with(Document::Skills, r#"{ "programming": null, "web": "React" }"#);
        let ViewState::Ready(home) = load_home(&source).await else {
            panic!("home did not load");
        };

        assert_eq!(home.personal.name, "A");
        assert!(home.personal.social.is_empty());
        assert!(home.personal.languages.is_empty());
        assert!(home.skills.programming.is_empty());
        assert!(home.skills.web.is_empty());
    }

    #[tokio::test]
    async fn test_load_project_resolves_by_index() {
        let source = MockSource::seeded();
        let state = load_project(&source, "1").await;

        let project = state.ready().expect("project 1 should resolve");
        assert_eq!(project.title, "Beta");
        assert!(project.is_academic);
        assert_eq!(project.date_label(), "2023");
    }

    #[tokio::test]
    async fn test_load_project_unknown_index_is_not_found() {
        let source = MockSource::seeded();
        assert!(load_project(&source, "99").await.is_not_found());
        assert!(load_project(&source, "abc").await.is_not_found());
    }

    #[tokio::test]
    async fn test_load_project_fetch_failure_beats_not_found() {
        let source = MockSource::new();
        assert!(load_project(&source, "0").await.is_error());
    }

    #[tokio::test]
    async fn test_load_post_matches_numeric_and_string_ids() {
        let source = MockSource::seeded();

        let first = load_post(&source, "1").await;
        assert_eq!(first.ready().map(|p| p.title.as_str()), Some("First"));

        let second = load_post(&source, "2").await;
        assert_eq!(second.ready().map(|p| p.title.as_str()), Some("Second"));

        let third = load_post(&source, "3").await;
        assert_eq!(third.ready().map(|p| p.title.as_str()), Some("Third"));
    }

    #[tokio::test]
    async fn test_load_post_unknown_id_is_not_found() {
        let source = MockSource::seeded();
        assert_eq!(load_post(&source, "99").await, ViewState::NotFound);
    }

    #[tokio::test]
    async fn test_load_post_normalizes_images() {
        let source = MockSource::seeded();
        let state = load_post(&source, "1").await;
        assert_eq!(
            state.ready().and_then(|p| p.image.as_deref()),
            Some("/images/blog/1.png")
        );
    }

    #[tokio::test]
    async fn test_load_blog_without_categories() {
        let source = MockSource::seeded();
        let ViewState::Ready(index) = load_blog(&source).await else {
            panic!("blog did not load");
        };

        assert_eq!(index.posts.len(), 3);
        assert!(index.categories.is_empty());
    }

    #[tokio::test]
    async fn test_load_blog_missing_posts_is_empty() {
        let source = MockSource::seeded().with(Document::Blog, "{}");
        let ViewState::Ready(index) = load_blog(&source).await else {
            panic!("blog did not load");
        };
        assert!(index.posts.is_empty());
    }

    #[tokio::test]
    async fn test_load_home_features_first_projects() {
        let source = MockSource::seeded();
        let ViewState::Ready(home) = load_home(&source).await else {
            panic!("home did not load");
        };

        let featured: Vec<(usize, &str)> = home
            .featured
            .iter()
            .map(|(index, p)| (*index, p.title.as_str()))
            .collect();
        assert_eq!(featured, vec![(0, "Alpha"), (1, "Beta"), (2, "Gamma")]);
        assert_eq!(home.personal.about, "Builds web apps.");
        assert_eq!(home.personal.image.as_deref(), Some("/images/profile/b.jpg"));
        assert_eq!(home.skills.programming[1].level, 60);
    }

    #[tokio::test]
    async fn test_load_home_fails_when_any_document_fails() {
        let source = MockSource::seeded().with_status(Document::Skills, 500);
        let state = load_home(&source).await;
        assert_eq!(state.error(), Some("Failed to fetch skills data (HTTP 500)"));
    }

    #[tokio::test]
    async fn test_load_about_joins_five_documents() {
        let source = MockSource::seeded();
        let ViewState::Ready(about) = load_about(&source).await else {
            panic!("about did not load");
        };

        assert_eq!(about.education[0].cgpa.as_deref(), Some("3.72"));
        assert_eq!(about.achievements[0].year, "2023");
        assert!(about.affiliations.is_empty());
        assert!(about.certifications.is_empty());
    }

    #[tokio::test]
    async fn test_load_about_one_of_five_failing_fails_the_view() {
        for document in [
            Document::Personal,
            Document::Education,
            Document::Affiliations,
            Document::Achievements,
            Document::Certifications,
        ] {
            let source = MockSource::seeded().with_status(document, 503);
            let state = load_about(&source).await;
            assert_eq!(
                state.error().map(str::to_string),
                Some(format!("Failed to fetch {document} data (HTTP 503)"))
            );
        }
    }

    #[tokio::test]
    async fn test_load_resume() {
        let source = MockSource::seeded();
        let state = load_resume(&source).await;
        let resume = state.ready().expect("resume should load");

        assert_eq!(resume.personal.name, "Asadullah Imran");
        assert_eq!(resume.education.len(), 1);
        let strongest: Vec<&str> = resume
            .skills
            .strongest(70)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(strongest, vec!["JavaScript", "React"]);
    }

    #[tokio::test]
    async fn test_personal_must_be_an_object() {
        let source = MockSource::seeded().with(Document::Personal, "42");
        assert!(load_resume(&source).await.is_error());
    }

    #[test]
    fn test_document_urls() {
        assert_eq!(Document::Projects.url("/data"), "/data/projects.json");
        assert_eq!(Document::Blog.url("/data/"), "/data/blog.json");
        assert_eq!(Document::ALL.len(), 8);
    }

    #[test]
    fn test_http_source_keeps_data_root() {
        assert_eq!(HttpSource::new("/data").data_root(), "/data");
    }

    #[test]
    fn test_fetch_error_reports_its_document() {
        let err = FetchError::Decode(Document::Skills, "eof".into());
        assert_eq!(err.document(), Document::Skills);
        assert_eq!(err.to_string(), "Failed to read skills data: eof");
    }

    #[test]
    fn test_collection_of_null_is_empty() {
        let items: Vec<Education> = collection(Document::Education, serde_json::Value::Null);
        assert!(items.is_empty());
    }
}
