use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fmt, fs};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::content::{parse_front_matter, ContentItem, FrontMatterError, ItemId, TermId};
use crate::permalink::Permalink;

/// A content item backed by a Markdown file with TOML front matter.
#[derive(Debug)]
pub struct Page {
    pub meta: PageFrontMatter,
    pub file_path: PathBuf,
    pub path: PagePath,
}

/// The path of a page relative to the content directory, e.g. `/recipes/pad-thai`.
#[derive(Debug, PartialEq, Eq)]
pub struct PagePath(pub(crate) String);

impl fmt::Display for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PagePath {
    pub fn from_file_path(
        root_path: impl AsRef<Path>,
        file_path: impl AsRef<Path>,
        slug: &str,
    ) -> Option<Self> {
        let file_path = file_path.as_ref().strip_prefix(root_path).ok()?;

        let parent = file_path
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_default();

        if parent.is_empty() {
            Some(Self(format!("/{slug}")))
        } else {
            Some(Self(format!("/{parent}/{slug}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Deserialize)]
pub struct PageFrontMatter {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub title: String,
    pub parent: Option<ItemId>,
    pub slug: Option<String>,
    /// The assigned term IDs, keyed by taxonomy.
    #[serde(default)]
    pub terms: IndexMap<String, Vec<TermId>>,
    #[serde(default)]
    pub meta: toml::Table,
}

#[derive(Error, Debug)]
pub enum ParsePageError {
    #[error("failed to read page: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid front matter in '{filepath}': {source}")]
    InvalidFrontMatter {
        filepath: PathBuf,
        source: FrontMatterError,
    },

    #[error("page '{filepath}' is outside of the content directory")]
    OutsideContentDirectory { filepath: PathBuf },
}

impl Page {
    pub fn from_path(
        root_path: impl AsRef<Path>,
        path: impl AsRef<Path>,
    ) -> Result<Self, ParsePageError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        Self::parse(&contents, root_path, path)
    }

    pub fn parse(
        text: &str,
        root_path: impl AsRef<Path>,
        filepath: &Path,
    ) -> Result<Self, ParsePageError> {
        let (front_matter, _content) = parse_front_matter::<PageFrontMatter>(text).map_err(
            |source| ParsePageError::InvalidFrontMatter {
                filepath: filepath.to_owned(),
                source,
            },
        )?;

        let slug = match front_matter.slug.clone() {
            Some(slug) => slug,
            None => filepath
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_default(),
        };

        let path = PagePath::from_file_path(root_path, filepath, &slug).ok_or_else(|| {
            ParsePageError::OutsideContentDirectory {
                filepath: filepath.to_owned(),
            }
        })?;

        Ok(Self {
            meta: front_matter,
            file_path: filepath.to_owned(),
            path,
        })
    }

    pub fn id(&self) -> ItemId {
        self.meta.id
    }

    /// Returns the [`ContentItem`] described by this page.
    pub fn to_item(&self, base_url: &str) -> Result<ContentItem, url::ParseError> {
        Ok(ContentItem {
            id: self.meta.id,
            content_type: self.meta.content_type.clone(),
            parent: self.meta.parent,
            title: self.meta.title.clone(),
            permalink: Permalink::from_path(base_url, self.path.as_str())?,
        })
    }

    /// Returns the page metadata as strings.
    pub fn string_meta(&self) -> HashMap<String, String> {
        self.meta
            .meta
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(value) => value.clone(),
                    value => value.to_string(),
                };

                (key.clone(), value)
            })
            .collect()
    }
}
