use std::collections::HashMap;

use indexmap::IndexMap;

use crate::content::{
    ContentItem, ContentType, ContentTypeInfo, ItemId, TaxonomyInfo, Term, TermId,
};
use crate::hierarchy::ancestor_chain;
use crate::html::decode_html_entities;
use crate::permalink::Permalink;
use crate::store::{ContentStore, TermLookupError};

/// An in-memory repository for the content of a site.
pub struct ContentRepository {
    base_url: String,
    root_url: Permalink,
    category_taxonomy: String,
    content_types: HashMap<String, ContentType>,
    taxonomies: IndexMap<String, TaxonomyInfo>,
    terms: HashMap<TermId, Term>,
    items: HashMap<ItemId, ContentItem>,
    assignments: HashMap<ItemId, IndexMap<String, Vec<TermId>>>,
    meta: HashMap<ItemId, HashMap<String, String>>,
}

impl ContentRepository {
    /// Returns a new, empty [`ContentRepository`] for the site at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base_url: base_url.to_string(),
            root_url: Permalink::from_path(base_url, "/")?,
            category_taxonomy: "category".to_string(),
            content_types: HashMap::new(),
            taxonomies: IndexMap::new(),
            terms: HashMap::new(),
            items: HashMap::new(),
            assignments: HashMap::new(),
            meta: HashMap::new(),
        })
    }

    /// Sets the taxonomy that [`ContentStore::categories_of`] reads from.
    pub fn with_category_taxonomy(mut self, taxonomy: impl Into<String>) -> Self {
        self.category_taxonomy = taxonomy.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Adds the given [`ContentType`] to the repository.
    pub fn add_content_type(&mut self, content_type: ContentType) {
        self.content_types
            .insert(content_type.name.clone(), content_type);
    }

    /// Adds the given taxonomy to the repository.
    pub fn add_taxonomy(&mut self, taxonomy: TaxonomyInfo) {
        self.taxonomies.insert(taxonomy.name.clone(), taxonomy);
    }

    pub fn has_taxonomy(&self, name: &str) -> bool {
        self.taxonomies.contains_key(name)
    }

    /// Adds the given [`Term`] to the repository.
    pub fn add_term(&mut self, term: Term) {
        self.terms.insert(term.id, term);
    }

    /// Adds the given [`ContentItem`] to the repository, returning the item it
    /// replaced, if any.
    pub fn add_item(&mut self, item: ContentItem) -> Option<ContentItem> {
        self.items.insert(item.id, item)
    }

    /// Assigns the terms of `taxonomy` to an item, replacing any previous assignment.
    pub fn assign_terms(
        &mut self,
        item: ItemId,
        taxonomy: impl Into<String>,
        terms: impl IntoIterator<Item = TermId>,
    ) {
        self.assignments
            .entry(item)
            .or_default()
            .insert(taxonomy.into(), terms.into_iter().collect());
    }

    pub fn set_meta(&mut self, item: ItemId, key: impl Into<String>, value: impl Into<String>) {
        self.meta
            .entry(item)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Returns all items, ordered by ID.
    pub fn items(&self) -> Vec<&ContentItem> {
        let mut items = self.items.values().collect::<Vec<_>>();
        items.sort_by_key(|item| item.id);
        items
    }
}

impl ContentStore for ContentRepository {
    fn site_root_url(&self) -> Permalink {
        self.root_url.clone()
    }

    fn content_type_info(&self, content_type: &str) -> Option<ContentTypeInfo> {
        let content_type = self.content_types.get(content_type)?;

        let archive_url = if content_type.has_archive {
            let archive_slug = content_type
                .archive_slug
                .clone()
                .unwrap_or_else(|| slug::slugify(&content_type.plural_label));

            Permalink::from_path(&self.base_url, &archive_slug).ok()
        } else {
            None
        };

        Some(ContentTypeInfo {
            has_archive: content_type.has_archive,
            archive_url,
            plural_label: content_type.plural_label.clone(),
        })
    }

    fn categories_of(&self, item: ItemId) -> Vec<Term> {
        self.terms_of(item, &self.category_taxonomy)
            .unwrap_or_default()
    }

    fn term_metadata_hint(&self, item: ItemId, key: &str) -> Option<String> {
        self.meta.get(&item)?.get(key).cloned()
    }

    fn category_by_id(&self, id: TermId) -> Option<Term> {
        self.term_by_id(id, &self.category_taxonomy)
    }

    fn taxonomies_of(&self, content_type: &str) -> Vec<TaxonomyInfo> {
        let Some(content_type) = self.content_types.get(content_type) else {
            return Vec::new();
        };

        content_type
            .taxonomies
            .iter()
            .filter_map(|name| self.taxonomies.get(name))
            .cloned()
            .collect()
    }

    fn terms_of(&self, item: ItemId, taxonomy: &str) -> Result<Vec<Term>, TermLookupError> {
        if !self.has_taxonomy(taxonomy) {
            return Err(TermLookupError::UnknownTaxonomy(taxonomy.to_string()));
        }

        let Some(term_ids) = self
            .assignments
            .get(&item)
            .and_then(|assignments| assignments.get(taxonomy))
        else {
            return Ok(Vec::new());
        };

        Ok(term_ids
            .iter()
            .filter_map(|id| self.term_by_id(*id, taxonomy))
            .collect())
    }

    fn term_by_id(&self, id: TermId, taxonomy: &str) -> Option<Term> {
        self.terms
            .get(&id)
            .filter(|term| term.taxonomy == taxonomy)
            .cloned()
    }

    fn term_link(&self, term: &Term) -> Permalink {
        term.permalink.clone()
    }

    fn ancestor_ids(&self, item: ItemId) -> Vec<ItemId> {
        let Some(item) = self.items.get(&item) else {
            return Vec::new();
        };

        let mut chain = ancestor_chain(item.clone(), |id| self.items.get(&id).cloned());
        chain.pop();

        chain.into_iter().rev().map(|ancestor| ancestor.id).collect()
    }

    fn item_by_id(&self, id: ItemId) -> Option<ContentItem> {
        self.items.get(&id).cloned()
    }

    fn permalink(&self, item: &ContentItem) -> Permalink {
        item.permalink.clone()
    }

    fn title(&self, item: &ContentItem) -> String {
        decode_html_entities(&item.title).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::fixtures::*;

    use super::*;

    fn term_ids(terms: Vec<Term>) -> Vec<TermId> {
        terms.into_iter().map(|term| term.id).collect()
    }

    #[test]
    fn test_terms_of_preserves_assignment_order() {
        let mut repository = make_repository();
        repository.add_term(make_term(1, "category", "News", None));
        repository.add_term(make_term(2, "category", "Sports", None));
        repository.add_item(make_item(10, "article", None, "Match report"));
        repository.assign_terms(ItemId(10), "category", [TermId(2), TermId(1)]);

        assert_eq!(
            term_ids(repository.terms_of(ItemId(10), "category").unwrap()),
            vec![TermId(2), TermId(1)]
        );
        assert_eq!(
            term_ids(repository.categories_of(ItemId(10))),
            vec![TermId(2), TermId(1)]
        );
    }

    #[test]
    fn test_terms_of_unknown_taxonomy() {
        let repository = make_repository();

        assert_eq!(
            repository.terms_of(ItemId(10), "genre"),
            Err(TermLookupError::UnknownTaxonomy("genre".to_string()))
        );
    }

    #[test]
    fn test_terms_of_skips_terms_from_other_taxonomies() {
        let mut repository = make_repository();
        repository.add_term(make_term(1, "category", "News", None));
        repository.add_term(make_term(2, "cuisine", "Thai", None));
        repository.assign_terms(ItemId(10), "category", [TermId(1), TermId(2), TermId(99)]);

        assert_eq!(
            term_ids(repository.categories_of(ItemId(10))),
            vec![TermId(1)]
        );
        assert_eq!(repository.category_by_id(TermId(2)), None);
    }

    #[test]
    fn test_ancestor_ids_are_nearest_first() {
        let mut repository = make_repository();
        repository.add_item(make_item(1, "page", None, "Root"));
        repository.add_item(make_item(2, "page", Some(1), "Mid"));
        repository.add_item(make_item(3, "page", Some(2), "Leaf"));

        assert_eq!(repository.ancestor_ids(ItemId(3)), vec![ItemId(2), ItemId(1)]);
        assert!(repository.ancestor_ids(ItemId(1)).is_empty());
        assert!(repository.ancestor_ids(ItemId(404)).is_empty());
    }

    #[test]
    fn test_content_type_info() {
        let mut repository = make_repository();
        repository.add_content_type(ContentType {
            name: "recipe".to_string(),
            plural_label: "Tasty Recipes".to_string(),
            has_archive: true,
            archive_slug: None,
            taxonomies: Vec::new(),
        });
        repository.add_content_type(ContentType {
            name: "event".to_string(),
            plural_label: "Events".to_string(),
            has_archive: false,
            archive_slug: Some("events".to_string()),
            taxonomies: Vec::new(),
        });

        assert_eq!(
            repository.content_type_info("recipe"),
            Some(ContentTypeInfo {
                has_archive: true,
                archive_url: Some(permalink("/tasty-recipes")),
                plural_label: "Tasty Recipes".to_string(),
            })
        );
        assert_eq!(
            repository
                .content_type_info("event")
                .map(|info| info.archive_url),
            Some(None)
        );
        assert_eq!(repository.content_type_info("podcast"), None);
    }

    #[test]
    fn test_taxonomies_of_skips_unregistered() {
        let mut repository = make_repository();
        repository.add_content_type(ContentType {
            name: "recipe".to_string(),
            plural_label: "Recipes".to_string(),
            has_archive: false,
            archive_slug: None,
            taxonomies: vec!["cuisine".to_string(), "course".to_string()],
        });

        let names = repository
            .taxonomies_of("recipe")
            .into_iter()
            .map(|taxonomy| taxonomy.name)
            .collect::<Vec<_>>();

        assert_eq!(names, vec!["cuisine".to_string()]);
    }

    #[test]
    fn test_title_is_decoded() {
        let repository = make_repository();
        let item = make_item(1, "article", None, "Fish &amp; Chips");

        assert_eq!(repository.title(&item), "Fish & Chips");
    }
}
