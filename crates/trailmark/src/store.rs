use thiserror::Error;

use crate::content::{ContentItem, ContentTypeInfo, ItemId, TaxonomyInfo, Term, TermId};
use crate::permalink::Permalink;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TermLookupError {
    #[error("taxonomy not registered: '{0}'")]
    UnknownTaxonomy(String),

    #[error("failed to look up terms: {0}")]
    Other(String),
}

/// Read-only access to the content of a site.
///
/// Lookups for things that don't exist return `None` or an empty collection
/// rather than failing.
pub trait ContentStore {
    /// Returns the URL of the site root.
    fn site_root_url(&self) -> Permalink;

    fn content_type_info(&self, content_type: &str) -> Option<ContentTypeInfo>;

    /// Returns the categories assigned to the given item, in assignment order.
    fn categories_of(&self, item: ItemId) -> Vec<Term>;

    /// Returns the metadata value stored under `key` for the given item.
    fn term_metadata_hint(&self, item: ItemId, key: &str) -> Option<String>;

    fn category_by_id(&self, id: TermId) -> Option<Term>;

    /// Returns the taxonomies registered for a content type, in registration order.
    fn taxonomies_of(&self, content_type: &str) -> Vec<TaxonomyInfo>;

    /// Returns the terms of `taxonomy` assigned to the given item, in assignment order.
    fn terms_of(&self, item: ItemId, taxonomy: &str) -> Result<Vec<Term>, TermLookupError>;

    fn term_by_id(&self, id: TermId, taxonomy: &str) -> Option<Term>;

    fn term_link(&self, term: &Term) -> Permalink;

    /// Returns the ancestors of the given item, nearest parent first.
    fn ancestor_ids(&self, item: ItemId) -> Vec<ItemId>;

    fn item_by_id(&self, id: ItemId) -> Option<ContentItem>;

    fn permalink(&self, item: &ContentItem) -> Permalink;

    /// Returns the display title of the given item, with HTML entities decoded.
    fn title(&self, item: &ContentItem) -> String;
}
