//! One loader per view. Each starts its fetches together and settles into a
//! single [`ViewState`]; any failed document fails the whole view.

use futures_util::future::{try_join3, try_join5};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{collection, parse_document, record, DataSource, Document};
use crate::common::FetchError;
use crate::models::{
    Achievement, Affiliation, BlogPost, CategoryCount, Certification, Education, Personal,
    Project, Skills,
};
use crate::services::{resolve_post, resolve_project, Normalize};
use crate::types::{AboutData, BlogIndex, HomeData, ResumeData, ViewState};

/// Number of projects featured on the home page.
pub const FEATURED_PROJECTS: usize = 3;

pub async fn fetch_value<S: DataSource>(source: &S, document: Document) -> Result<Value, FetchError> {
    let body = source.fetch_text(document).await?;
    parse_document(document, &body)
}

pub async fn fetch_collection<S, T>(source: &S, document: Document) -> Result<Vec<T>, FetchError>
where
    S: DataSource,
    T: DeserializeOwned + Normalize,
{
    fetch_value(source, document)
        .await
        .map(|value| collection(document, value))
}

pub async fn fetch_record<S, T>(source: &S, document: Document) -> Result<T, FetchError>
where
    S: DataSource,
    T: DeserializeOwned + Normalize,
{
    let value = fetch_value(source, document).await?;
    record(document, value)
}

/// `blog.json` is an object holding `posts` and optional `categories`.
pub async fn fetch_blog<S: DataSource>(source: &S) -> Result<BlogIndex, FetchError> {
    let mut value = fetch_value(source, Document::Blog).await?;
    let posts = collection::<BlogPost>(Document::Blog, take_field(&mut value, "posts"));
    let categories =
        collection::<CategoryCount>(Document::Blog, take_field(&mut value, "categories"));
    Ok(BlogIndex { posts, categories })
}

fn take_field(value: &mut Value, key: &str) -> Value {
    value
        .as_object_mut()
        .and_then(|obj| obj.remove(key))
        .unwrap_or(Value::Null)
}

fn settle<T>(context: &str, result: Result<T, FetchError>) -> ViewState<T> {
    if let Err(err) = &result {
        crate::log_err!(context, err);
    }
    ViewState::from_result(result)
}

fn settle_lookup<T>(context: &str, result: Result<Option<T>, FetchError>) -> ViewState<T> {
    if let Err(err) = &result {
        crate::log_err!(context, err);
    }
    ViewState::from_lookup(result)
}

pub async fn load_home<S: DataSource>(source: &S) -> ViewState<HomeData> {
    let result = try_join3(
        fetch_record::<_, Personal>(source, Document::Personal),
        fetch_collection::<_, Project>(source, Document::Projects),
        fetch_record::<_, Skills>(source, Document::Skills),
    )
    .await
    .map(|(personal, projects, skills)| HomeData {
        personal,
        featured: projects
            .into_iter()
            .take(FEATURED_PROJECTS)
            .enumerate()
            .collect(),
        skills,
    });
    settle("loading home", result)
}

pub async fn load_projects<S: DataSource>(source: &S) -> ViewState<Vec<Project>> {
    let result = fetch_collection::<_, Project>(source, Document::Projects).await;
    settle("loading projects", result)
}

pub async fn load_project<S: DataSource>(source: &S, route_id: &str) -> ViewState<Project> {
    let result = fetch_collection::<_, Project>(source, Document::Projects)
        .await
        .map(|projects| resolve_project(&projects, route_id).cloned());
    settle_lookup("loading project", result)
}

pub async fn load_blog<S: DataSource>(source: &S) -> ViewState<BlogIndex> {
    settle("loading blog", fetch_blog(source).await)
}

pub async fn load_post<S: DataSource>(source: &S, route_id: &str) -> ViewState<BlogPost> {
    let result = fetch_blog(source)
        .await
        .map(|index| resolve_post(&index.posts, route_id).cloned());
    settle_lookup("loading post", result)
}

pub async fn load_about<S: DataSource>(source: &S) -> ViewState<AboutData> {
    let result = try_join5(
        fetch_record::<_, Personal>(source, Document::Personal),
        fetch_collection::<_, Education>(source, Document::Education),
        fetch_collection::<_, Affiliation>(source, Document::Affiliations),
        fetch_collection::<_, Achievement>(source, Document::Achievements),
        fetch_collection::<_, Certification>(source, Document::Certifications),
    )
    .await
    .map(
        |(personal, education, affiliations, achievements, certifications)| AboutData {
            personal,
            education,
            affiliations,
            achievements,
            certifications,
        },
    );
    settle("loading about", result)
}

pub async fn load_resume<S: DataSource>(source: &S) -> ViewState<ResumeData> {
    let result = try_join3(
        fetch_record::<_, Personal>(source, Document::Personal),
        fetch_collection::<_, Education>(source, Document::Education),
        fetch_record::<_, Skills>(source, Document::Skills),
    )
    .await
    .map(|(personal, education, skills)| ResumeData {
        personal,
        education,
        skills,
    });
    settle("loading resume", result)
}
