use crate::common::FetchError;
use crate::models::{
    Achievement, Affiliation, BlogPost, CategoryCount, Certification, Education, Personal,
    Project, Skills,
};

/// Lifecycle of a data-backed view.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Ready(T),
    Error(String),
    NotFound,
}

impl<T> ViewState<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(err) => Self::Error(err.to_string()),
        }
    }

    /// For detail views: a settled fetch that found nothing is `NotFound`.
    pub fn from_lookup(result: Result<Option<T>, FetchError>) -> Self {
        match result {
            Ok(Some(data)) => Self::Ready(data),
            Ok(None) => Self::NotFound,
            Err(err) => Self::Error(err.to_string()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            Self::Loading => ViewState::Loading,
            Self::Ready(data) => ViewState::Ready(f(data)),
            Self::Error(message) => ViewState::Error(message),
            Self::NotFound => ViewState::NotFound,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Everything the home page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct HomeData {
    pub personal: Personal,
    /// First few projects with their collection positions.
    pub featured: Vec<(usize, Project)>,
    pub skills: Skills,
}

/// The blog document after normalization.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BlogIndex {
    pub posts: Vec<BlogPost>,
    pub categories: Vec<CategoryCount>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AboutData {
    pub personal: Personal,
    pub education: Vec<Education>,
    pub affiliations: Vec<Affiliation>,
    pub achievements: Vec<Achievement>,
    pub certifications: Vec<Certification>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResumeData {
    pub personal: Personal,
    pub education: Vec<Education>,
    pub skills: Skills,
}
