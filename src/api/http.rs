use gloo_net::http::Request;

use super::{DataSource, Document};
use crate::common::FetchError;

/// Reads documents with a plain `GET` relative to the page origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSource {
    data_root: String,
}

impl HttpSource {
    pub fn new(data_root: impl Into<String>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }

    pub fn data_root(&self) -> &str {
        &self.data_root
    }
}

impl DataSource for HttpSource {
    async fn fetch_text(&self, document: Document) -> Result<String, FetchError> {
        let url = document.url(&self.data_root);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(document, e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                document,
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(document, e.to_string()))
    }
}
