#![allow(dead_code)]

use std::collections::HashMap;

use portfolio::api::{DataSource, Document};
use portfolio::common::FetchError;
use portfolio::models::*;

/// In-memory document store. Documents that were never registered answer
/// with HTTP 404.
#[derive(Default)]
pub struct MockSource {
    documents: HashMap<Document, Result<String, FetchError>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every document the site reads, with valid fixture bodies.
    pub fn seeded() -> Self {
        Self::new()
            .with(Document::Personal, PERSONAL_JSON)
            .with(Document::Projects, PROJECTS_JSON)
            .with(Document::Skills, SKILLS_JSON)
            .with(Document::Blog, BLOG_JSON)
            .with(Document::Education, EDUCATION_JSON)
            .with(Document::Affiliations, "[]")
            .with(Document::Achievements, ACHIEVEMENTS_JSON)
            .with(Document::Certifications, "[]")
    }

    pub fn with(mut self, document: Document, body: &str) -> Self {
        self.documents.insert(document, Ok(body.to_string()));
        self
    }

    pub fn failing(mut self, document: Document, error: FetchError) -> Self {
        self.documents.insert(document, Err(error));
        self
    }

    pub fn with_status(self, document: Document, status: u16) -> Self {
        self.failing(document, FetchError::Status { document, status })
    }
}

impl DataSource for MockSource {
    async fn fetch_text(&self, document: Document) -> Result<String, FetchError> {
        self.documents
            .get(&document)
            .cloned()
            .unwrap_or(Err(FetchError::Status {
                document,
                status: 404,
            }))
    }
}

pub const PERSONAL_JSON: &str = r#"{
    "name": "Asadullah Imran",
    "title": "MERN Stack Developer",
    "bio": "Builds web apps.",
    "email": "me@example.com",
    "image": "assets/images/profile/b.jpg",
    "social": [
        { "name": "GitHub", "url": "https://github.com/x", "icon": "fab fa-github" },
        { "name": "LeetCode", "url": "https://leetcode.com/x", "icon": "fas fa-code" }
    ],
    "languages": [{ "name": "English", "level": "Fluent" }]
}"#;

/// Categories in order: web, academic, web, with the second authored as a list.
pub const PROJECTS_JSON: &str = r#"[
    { "title": "Alpha", "category": "web", "technologies": ["React", "Node"],
      "featuredImage": { "src": "assets/images/a.png" } },
    { "title": "Beta", "category": ["academic", "ai"], "isAcademic": true, "date": "2023" },
    { "title": "Gamma", "category": "web",
      "screenshots": [{ "src": "assets/images/g1.png", "caption": "Home" }] },
    { "title": "Delta", "category": " " }
]"#;

pub const SKILLS_JSON: &str = r#"{
    "programming": [{ "name": "JavaScript", "level": 90 }, { "name": "C", "level": "60%" }],
    "web": [{ "name": "React", "level": "85" }],
    "tools": ["Git"],
    "concepts": ["OOP"]
}"#;

pub const BLOG_JSON: &str = r#"{
    "posts": [
        { "id": 1, "title": "First", "date": "2024-03-07", "tags": ["Web", "JS"],
          "image": "assets/images/blog/1.png",
          "sections": [{ "title": "Intro", "blocks": [{ "text": "Hello" }] }] },
        { "id": "2", "title": "Second", "date": "2024-01-15", "tags": ["Algorithms"],
          "content": "<p>Raw</p>" },
        { "id": 3.0, "title": "Third", "date": "not a date", "tags": ["Web"] }
    ]
}"#;

pub const EDUCATION_JSON: &str = r#"[
    { "degree": "B.Sc.", "institution": "UIU", "period": "2021 - 2025", "cgpa": 3.72 }
]"#;

pub const ACHIEVEMENTS_JSON: &str = r#"[
    { "title": "Hackathon Champion", "organization": "UIU", "year": 2023 }
]"#;

pub fn project(title: &str, category: &str) -> Project {
    Project {
        title: title.to_string(),
        category: Category::One(category.to_string()),
        ..Default::default()
    }
}

pub fn post(id: &str, tags: &[&str]) -> BlogPost {
    BlogPost {
        id: PostId(id.to_string()),
        title: format!("Post {id}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

pub fn titles(projects: &[&Project]) -> Vec<String> {
    projects.iter().map(|p| p.title.clone()).collect()
}
