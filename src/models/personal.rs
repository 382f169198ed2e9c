use serde::{Deserialize, Serialize};

use super::lenient;
use crate::services::assets::{rewrite_opt, Normalize};

/// Owner profile from `personal.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub tagline: Option<String>,
    #[serde(alias = "bio", deserialize_with = "lenient::text")]
    pub about: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub social: Vec<SocialLink>,
    #[serde(deserialize_with = "lenient::list")]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: String,
}

impl SocialLink {
    pub fn kind(&self) -> SocialIcon {
        SocialIcon::from_hint(&self.icon)
    }
}

/// Icon family picked from a free-form icon hint such as `"fab fa-github"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Code,
}

impl SocialIcon {
    pub fn from_hint(hint: &str) -> Self {
        if hint.contains("github") {
            Self::GitHub
        } else if hint.contains("linkedin") {
            Self::LinkedIn
        } else {
            Self::Code
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::GitHub => "🐙",
            Self::LinkedIn => "💼",
            Self::Code => "💻",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub level: String,
}

impl Normalize for Personal {
    fn normalize(mut self) -> Self {
        self.image = rewrite_opt(self.image);
        self
    }
}
