use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hints::HintSource;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid breadcrumb config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration for building breadcrumb trails.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbConfig {
    /// The label of the first entry in every trail.
    pub home_label: String,

    /// The default content type, whose trail is built from its categories.
    pub article_type: String,

    /// The content type whose trail is built from its parent pages.
    pub page_type: String,

    /// The taxonomy holding the categories of the article type.
    pub category_taxonomy: String,

    /// The primary term integrations to consult, highest priority first.
    pub primary_term_hints: Vec<HintSource>,
}

impl Default for BreadcrumbConfig {
    fn default() -> Self {
        Self {
            home_label: "Home".to_string(),
            article_type: "article".to_string(),
            page_type: "page".to_string(),
            category_taxonomy: "category".to_string(),
            primary_term_hints: vec![HintSource::Yoast, HintSource::RankMath],
        }
    }
}

impl BreadcrumbConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}
