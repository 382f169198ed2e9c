use serde::{Deserialize, Serialize};

use super::lenient;
use crate::services::assets::Normalize;

/// Skill groups from `skills.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    #[serde(deserialize_with = "lenient::list")]
    pub programming: Vec<SkillLevel>,
    #[serde(deserialize_with = "lenient::list")]
    pub web: Vec<SkillLevel>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub tools: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub concepts: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.programming.is_empty()
            && self.web.is_empty()
            && self.tools.is_empty()
            && self.concepts.is_empty()
    }

    /// Skills at or above `threshold` percent across both rated groups,
    /// strongest first.
    pub fn strongest(&self, threshold: u8) -> Vec<&SkillLevel> {
        let mut rated: Vec<&SkillLevel> = self
            .programming
            .iter()
            .chain(self.web.iter())
            .filter(|s| s.level >= threshold)
            .collect();
        rated.sort_by(|a, b| b.level.cmp(&a.level));
        rated
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillLevel {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::percent")]
    pub level: u8,
}

impl SkillLevel {
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.level)
    }
}

impl Normalize for Skills {
    fn normalize(self) -> Self {
        self
    }
}
