use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hierarchy::HierarchicalNode;
use crate::permalink::Permalink;

/// The identifier of a [`ContentItem`].
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single addressable piece of site content.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ContentItem {
    pub id: ItemId,
    pub content_type: String,
    pub parent: Option<ItemId>,
    /// The raw title, which may still contain HTML entities.
    pub title: String,
    pub permalink: Permalink,
}

impl HierarchicalNode for ContentItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }

    fn parent_id(&self) -> Option<ItemId> {
        self.parent
    }
}

/// What a content type exposes to breadcrumbs.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ContentTypeInfo {
    pub has_archive: bool,
    pub archive_url: Option<Permalink>,
    pub plural_label: String,
}

/// The definition of a content type.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct ContentType {
    pub name: String,
    pub plural_label: String,
    #[serde(default)]
    pub has_archive: bool,
    /// The path of the archive page, defaulting to the slugified plural label.
    pub archive_slug: Option<String>,
    /// The taxonomies registered for this type, in registration order.
    #[serde(default)]
    pub taxonomies: Vec<String>,
}
