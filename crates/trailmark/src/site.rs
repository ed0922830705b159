use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use crate::breadcrumbs::{BreadcrumbTrailBuilder, Trail};
use crate::config::BreadcrumbConfig;
use crate::content::{
    ContentItem, ContentRepository, ContentType, ItemId, Page, ParsePageError, TaxonomyInfo,
    TermDefinition,
};
use crate::store::ContentStore;

/// The name of the site configuration file within the site root.
pub const SITE_CONFIG_FILE: &str = "site.toml";

/// The configuration of a site, read from `site.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
    #[serde(default)]
    pub breadcrumbs: BreadcrumbConfig,
    #[serde(default)]
    pub content_types: Vec<ContentType>,
    #[serde(default)]
    pub taxonomies: Vec<TaxonomyInfo>,
    #[serde(default)]
    pub terms: Vec<TermDefinition>,
}

#[derive(Error, Debug)]
pub enum LoadSiteError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid base URL '{base_url}': {source}")]
    InvalidBaseUrl {
        base_url: String,
        source: url::ParseError,
    },

    #[error("failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to parse page: {0}")]
    ParsePage(#[from] ParsePageError),

    #[error("term {term} belongs to unknown taxonomy '{taxonomy}'")]
    UnknownTaxonomy { term: String, taxonomy: String },

    #[error("item {id} is defined by both '{first}' and '{second}'")]
    DuplicateItem {
        id: ItemId,
        first: PathBuf,
        second: PathBuf,
    },
}

pub struct Site {
    root_path: PathBuf,
    content_path: PathBuf,
    config: SiteConfig,
    repository: ContentRepository,
}

impl Site {
    /// Loads the site rooted at `root_path`.
    ///
    /// The site consists of a `site.toml` and a `content` directory of
    /// Markdown files with TOML front matter.
    #[instrument(skip_all, fields(root = %root_path.as_ref().display()))]
    pub fn load(root_path: impl AsRef<Path>) -> Result<Self, LoadSiteError> {
        let root_path = root_path.as_ref().to_owned();
        let config_path = root_path.join(SITE_CONFIG_FILE);
        let config_text = fs::read_to_string(&config_path).map_err(|source| LoadSiteError::Io {
            path: config_path.clone(),
            source,
        })?;
        let config: SiteConfig = toml::from_str(&config_text)?;

        let mut site = Self::from_config(root_path, config)?;
        site.load_pages()?;

        Ok(site)
    }

    fn from_config(root_path: PathBuf, config: SiteConfig) -> Result<Self, LoadSiteError> {
        let invalid_base_url = |source| LoadSiteError::InvalidBaseUrl {
            base_url: config.base_url.clone(),
            source,
        };

        let mut repository = ContentRepository::new(&config.base_url)
            .map_err(invalid_base_url)?
            .with_category_taxonomy(config.breadcrumbs.category_taxonomy.clone());

        for taxonomy in &config.taxonomies {
            repository.add_taxonomy(taxonomy.clone());
        }

        for content_type in &config.content_types {
            repository.add_content_type(content_type.clone());
        }

        for definition in &config.terms {
            if !repository.has_taxonomy(&definition.taxonomy) {
                return Err(LoadSiteError::UnknownTaxonomy {
                    term: definition.name.clone(),
                    taxonomy: definition.taxonomy.clone(),
                });
            }

            repository.add_term(
                definition
                    .to_term(&config.base_url)
                    .map_err(invalid_base_url)?,
            );
        }

        Ok(Self {
            content_path: root_path.join("content"),
            root_path,
            config,
            repository,
        })
    }

    fn load_pages(&mut self) -> Result<(), LoadSiteError> {
        if !self.content_path.is_dir() {
            debug!("no content directory, skipping pages");
            return Ok(());
        }

        let walker = WalkDir::new(&self.content_path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter();

        let mut page_paths = HashMap::new();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            let Some(filename) = entry.file_name().to_str() else {
                continue;
            };

            if path.is_dir() || !filename.ends_with(".md") || filename.starts_with('.') {
                continue;
            }

            let page = Page::from_path(&self.content_path, path)?;
            if let Some(first) = page_paths.insert(page.id(), page.file_path.clone()) {
                return Err(LoadSiteError::DuplicateItem {
                    id: page.id(),
                    first,
                    second: page.file_path,
                });
            }

            self.add_page(page)?;
        }

        debug!(pages = page_paths.len(), "loaded pages");

        Ok(())
    }

    fn add_page(&mut self, page: Page) -> Result<(), LoadSiteError> {
        let item = page
            .to_item(&self.config.base_url)
            .map_err(|source| LoadSiteError::InvalidBaseUrl {
                base_url: self.config.base_url.clone(),
                source,
            })?;

        for (taxonomy, terms) in &page.meta.terms {
            self.repository
                .assign_terms(item.id, taxonomy.clone(), terms.iter().copied());
        }

        for (key, value) in page.string_meta() {
            self.repository.set_meta(item.id, key, value);
        }

        self.repository.add_item(item);

        Ok(())
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn repository(&self) -> &ContentRepository {
        &self.repository
    }

    /// Returns all items, ordered by ID.
    pub fn items(&self) -> Vec<&ContentItem> {
        self.repository.items()
    }

    /// Returns the breadcrumb trail for the item with the given ID.
    pub fn breadcrumbs(&self, id: ItemId) -> Option<Trail> {
        let item = self.repository.item_by_id(id)?;

        Some(
            BreadcrumbTrailBuilder::from_config(&self.repository, self.config.breadcrumbs.clone())
                .build(&item),
        )
    }
}
