use crate::content::{ContentItem, ContentRepository, ItemId, TaxonomyInfo, Term, TermId};
use crate::permalink::Permalink;

pub const BASE_URL: &str = "https://example.com";

pub fn permalink(path: &str) -> Permalink {
    Permalink::from_path(BASE_URL, path).unwrap()
}

pub fn make_taxonomy(name: &str, hierarchical: bool, public: bool) -> TaxonomyInfo {
    TaxonomyInfo {
        name: name.to_string(),
        hierarchical,
        public,
    }
}

/// Returns a repository with the `category`, `post_tag`, and `cuisine` taxonomies registered.
pub fn make_repository() -> ContentRepository {
    let mut repository = ContentRepository::new(BASE_URL).unwrap();
    repository.add_taxonomy(make_taxonomy("category", true, true));
    repository.add_taxonomy(make_taxonomy("post_tag", false, true));
    repository.add_taxonomy(make_taxonomy("cuisine", true, true));
    repository
}

pub fn make_term(id: u64, taxonomy: &str, name: &str, parent: Option<u64>) -> Term {
    Term {
        id: TermId(id),
        name: name.to_string(),
        parent: parent.map(TermId),
        taxonomy: taxonomy.to_string(),
        permalink: permalink(&format!("/{taxonomy}/{}", slug::slugify(name))),
    }
}

pub fn make_item(id: u64, content_type: &str, parent: Option<u64>, title: &str) -> ContentItem {
    ContentItem {
        id: ItemId(id),
        content_type: content_type.to_string(),
        parent: parent.map(ItemId),
        title: title.to_string(),
        permalink: permalink(&format!("/{}", slug::slugify(title))),
    }
}
