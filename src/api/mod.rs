//! Access to the static JSON documents the site is built from.

mod http;
pub mod loaders;

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::common::FetchError;
use crate::services::Normalize;

pub use http::HttpSource;
pub use loaders::*;

/// The fixed set of documents under the data root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Document {
    Personal,
    Education,
    Affiliations,
    Achievements,
    Certifications,
    Blog,
    Projects,
    Skills,
}

impl Document {
    pub const ALL: [Document; 8] = [
        Self::Personal,
        Self::Education,
        Self::Affiliations,
        Self::Achievements,
        Self::Certifications,
        Self::Blog,
        Self::Projects,
        Self::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Education => "education",
            Self::Affiliations => "affiliations",
            Self::Achievements => "achievements",
            Self::Certifications => "certifications",
            Self::Blog => "blog",
            Self::Projects => "projects",
            Self::Skills => "skills",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }

    /// URL of the document below `data_root`, e.g. `/data/projects.json`.
    pub fn url(&self, data_root: &str) -> String {
        format!("{}/{}", data_root.trim_end_matches('/'), self.file_name())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where documents come from. The browser build reads them over HTTP; tests
/// substitute an in-memory source.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Raw body of `document`. Non-success statuses are errors.
    async fn fetch_text(&self, document: Document) -> Result<String, FetchError>;
}

impl<S: DataSource> DataSource for &S {
    async fn fetch_text(&self, document: Document) -> Result<String, FetchError> {
        (**self).fetch_text(document).await
    }
}

pub fn parse_document(document: Document, body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(document, e.to_string()))
}

/// Reads an array document. A payload that is not an array yields an empty
/// collection; entries that cannot be read are dropped.
pub fn collection<T>(document: Document, value: Value) -> Vec<T>
where
    T: DeserializeOwned + Normalize,
{
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return Vec::new(),
        other => {
            crate::log_warn!(
                format!("{document} is not a collection"),
                kind_of(&other)
            );
            return Vec::new();
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<T>(item) {
            Ok(record) => Some(record.normalize()),
            Err(err) => {
                crate::log_warn!(format!("dropping {document} entry {idx}"), err);
                None
            }
        })
        .collect()
}

/// Reads an object document.
pub fn record<T>(document: Document, value: Value) -> Result<T, FetchError>
where
    T: DeserializeOwned + Normalize,
{
    serde_json::from_value::<T>(value)
        .map(Normalize::normalize)
        .map_err(|e| FetchError::Decode(document, e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
