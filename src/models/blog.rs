use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;
use crate::services::assets::{rewrite_opt, Normalize};

/// Post identifier. Authored as a number or a string; always compared by its
/// text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, route_id: &str) -> bool {
        self.0 == route_id
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(lenient::scalar_text(&value).unwrap_or_default()))
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    pub id: PostId,
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub read_time: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub alt: Option<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub categories: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub sections: Vec<Section>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub content: Option<String>,
}

/// What a post's body is made of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PostBody<'a> {
    Sections(&'a [Section]),
    Markup(&'a str),
    Empty,
}

impl BlogPost {
    pub fn body(&self) -> PostBody<'_> {
        if !self.sections.is_empty() {
            PostBody::Sections(&self.sections)
        } else if let Some(markup) = lenient::non_empty(&self.content) {
            PostBody::Markup(markup)
        } else {
            PostBody::Empty
        }
    }

    pub fn image_alt(&self) -> &str {
        lenient::non_empty(&self.alt).unwrap_or(&self.title)
    }

    pub fn href(&self) -> String {
        format!("/blog/{}", self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub blocks: Vec<Block>,
}

/// One unit of a post body. Every part is optional and rendered in a fixed
/// order: text, trailing text, link, image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    #[serde(deserialize_with = "lenient::opt_text")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub text2: Option<String>,
    #[serde(deserialize_with = "lenient::opt_record")]
    pub link: Option<BlockLink>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub alt: Option<String>,
    #[serde(deserialize_with = "lenient::opt_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockLink {
    #[serde(deserialize_with = "lenient::text")]
    pub href: String,
    #[serde(deserialize_with = "lenient::text")]
    pub text: String,
}

/// Category chip on the blog index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCount {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    pub count: usize,
}

impl Normalize for BlogPost {
    fn normalize(mut self) -> Self {
        self.image = rewrite_opt(self.image);
        for block in self.sections.iter_mut().flat_map(|s| s.blocks.iter_mut()) {
            block.image = rewrite_opt(block.image.take());
        }
        self
    }
}

impl Normalize for CategoryCount {
    fn normalize(self) -> Self {
        self
    }
}
