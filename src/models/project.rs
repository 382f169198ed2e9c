use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;
use crate::services::assets::{rewrite_asset_path, rewrite_opt, Normalize};

/// One entry of `projects.json`. Its route identifier is its position in the
/// loaded collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub tagline: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub purpose: Option<String>,
    pub category: Category,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_academic: bool,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub features: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub challenges: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub learnings: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_record")]
    pub featured_image: Option<ImageRef>,
    #[serde(deserialize_with = "lenient::list")]
    pub screenshots: Vec<Screenshot>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub github: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub demo: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub documentation: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub database_schema: Option<String>,
    #[serde(deserialize_with = "lenient::opt_record")]
    pub build_instructions: Option<BuildInstructions>,
    #[serde(deserialize_with = "lenient::opt_record")]
    pub team: Option<Team>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub awards: Vec<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub video: Option<String>,
    #[serde(deserialize_with = "lenient::opt_bool")]
    pub playable: Option<bool>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub testimonials: Vec<String>,
}

pub const FALLBACK_PROJECT_DATE: &str = "2025";

impl Project {
    pub fn date_label(&self) -> &str {
        lenient::non_empty(&self.date).unwrap_or(FALLBACK_PROJECT_DATE)
    }

    pub fn image_src(&self) -> Option<&str> {
        self.featured_image
            .as_ref()
            .map(|img| img.src.as_str())
            .filter(|src| !src.is_empty())
    }

    pub fn image_alt(&self) -> &str {
        self.featured_image
            .as_ref()
            .and_then(|img| lenient::non_empty(&img.alt))
            .unwrap_or(&self.title)
    }

    pub fn has_extra_docs(&self) -> bool {
        self.documentation.is_some()
            || self.database_schema.is_some()
            || self.build_instructions.is_some()
    }

    pub fn has_showcase(&self) -> bool {
        self.team.is_some() || !self.awards.is_empty() || self.video.is_some()
    }
}

/// A project's category, authored either as one string or as a list whose
/// first entry is the primary category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Category {
    One(String),
    Many(Vec<String>),
    #[default]
    None,
}

/// Strings and lists keep their shape; anything else reads as no category.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Self::One(s),
            Value::Array(items) => {
                Self::Many(items.iter().filter_map(lenient::scalar_text).collect())
            }
            _ => Self::None,
        })
    }
}

impl Category {
    /// Trimmed primary category, `None` when blank or absent.
    pub fn primary(&self) -> Option<&str> {
        let raw = match self {
            Self::One(s) => Some(s.as_str()),
            Self::Many(list) => list.first().map(String::as_str),
            Self::None => None,
        };
        raw.map(str::trim).filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    #[serde(deserialize_with = "lenient::text")]
    pub src: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Screenshot {
    #[serde(deserialize_with = "lenient::text")]
    pub src: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BuildInstructions {
    Steps(Vec<String>),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub team_name: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub team_logo: Option<String>,
    #[serde(deserialize_with = "lenient::opt_record")]
    pub team_leader: Option<Member>,
    #[serde(deserialize_with = "lenient::list")]
    pub team_members: Vec<Member>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub link: String,
}

impl Normalize for Project {
    fn normalize(mut self) -> Self {
        if let Some(img) = self.featured_image.as_mut() {
            img.src = rewrite_asset_path(&img.src);
        }
        for shot in self.screenshots.iter_mut() {
            shot.src = rewrite_asset_path(&shot.src);
        }
        if let Some(team) = self.team.as_mut() {
            team.team_logo = rewrite_opt(team.team_logo.take());
        }
        self
    }
}
