use serde::{Deserialize, Serialize};

use super::lenient;
use crate::services::assets::{rewrite_opt, Normalize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient::text")]
    pub degree: String,
    #[serde(deserialize_with = "lenient::text")]
    pub institution: String,
    #[serde(deserialize_with = "lenient::text")]
    pub period: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub cgpa: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub gpa: Option<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Affiliation {
    #[serde(deserialize_with = "lenient::text")]
    pub organization: String,
    #[serde(deserialize_with = "lenient::text")]
    pub period: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub organization: String,
    #[serde(deserialize_with = "lenient::text")]
    pub year: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub issuer: String,
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub credentials: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub badge: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub alt: Option<String>,
}

impl Normalize for Education {
    fn normalize(self) -> Self {
        self
    }
}

impl Normalize for Affiliation {
    fn normalize(mut self) -> Self {
        self.image = rewrite_opt(self.image);
        self
    }
}

impl Normalize for Achievement {
    fn normalize(mut self) -> Self {
        self.image = rewrite_opt(self.image);
        self
    }
}

impl Normalize for Certification {
    fn normalize(mut self) -> Self {
        self.badge = rewrite_opt(self.badge);
        self
    }
}
