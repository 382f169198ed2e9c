use thiserror::Error;

use crate::api::Document;

/// Failure to obtain one static document. The `Display` text is what the
/// error panel shows to the visitor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Failed to fetch {0} data: {1}")]
    Network(Document, String),

    #[error("Failed to fetch {document} data (HTTP {status})")]
    Status { document: Document, status: u16 },

    #[error("Failed to read {0} data: {1}")]
    Decode(Document, String),
}

impl FetchError {
    pub fn document(&self) -> Document {
        match self {
            Self::Network(document, _) | Self::Decode(document, _) => *document,
            Self::Status { document, .. } => *document,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {0:?}: {1}")]
    BindAddr(String, std::net::AddrParseError),

    #[error("Site root {0:?} is not a directory")]
    SiteRoot(String),
}
