use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hierarchy::HierarchicalNode;
use crate::permalink::Permalink;

/// The identifier of a [`Term`].
///
/// Term identifiers are unique across all taxonomies.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TermId(pub u64);

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered taxonomy.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct TaxonomyInfo {
    pub name: String,
    #[serde(default)]
    pub hierarchical: bool,
    #[serde(default = "default_public")]
    pub public: bool,
}

fn default_public() -> bool {
    true
}

impl TaxonomyInfo {
    /// Returns whether terms of this taxonomy can form a breadcrumb chain.
    pub fn is_navigable(&self) -> bool {
        self.hierarchical && self.public
    }
}

/// A taxonomy term.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Term {
    pub id: TermId,
    pub name: String,
    pub parent: Option<TermId>,
    pub taxonomy: String,
    pub permalink: Permalink,
}

impl HierarchicalNode for Term {
    type Id = TermId;

    fn id(&self) -> TermId {
        self.id
    }

    fn parent_id(&self) -> Option<TermId> {
        self.parent
    }
}

/// The definition of a [`Term`], as written in site configuration.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct TermDefinition {
    pub id: TermId,
    pub taxonomy: String,
    pub name: String,
    pub parent: Option<TermId>,
    pub slug: Option<String>,
}

impl TermDefinition {
    /// Returns the [`Term`] for this definition, linked at `/{taxonomy}/{slug}/`.
    pub fn to_term(&self, base_url: &str) -> Result<Term, url::ParseError> {
        let slug = self
            .slug
            .clone()
            .unwrap_or_else(|| slug::slugify(&self.name));

        Ok(Term {
            id: self.id,
            name: self.name.clone(),
            parent: self.parent,
            taxonomy: self.taxonomy.clone(),
            permalink: Permalink::from_path(base_url, &format!("/{}/{slug}", self.taxonomy))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_definition(name: &str, slug: Option<&str>) -> TermDefinition {
        TermDefinition {
            id: TermId(1),
            taxonomy: "category".to_string(),
            name: name.to_string(),
            parent: None,
            slug: slug.map(str::to_string),
        }
    }

    #[test]
    fn test_term_permalink_from_name() {
        let term = make_definition("Local News", None)
            .to_term("https://example.com")
            .unwrap();

        assert_eq!(
            term.permalink.as_str(),
            "https://example.com/category/local-news/"
        );
    }

    #[test]
    fn test_term_permalink_keeps_explicit_slug() {
        let term = make_definition("Price Index", Some("price_index"))
            .to_term("https://example.com")
            .unwrap();

        assert_eq!(
            term.permalink.as_str(),
            "https://example.com/category/price_index/"
        );
    }
}
