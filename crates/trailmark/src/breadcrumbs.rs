//! Breadcrumb trails from the site root to a content item.

use derive_more::Deref;
use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::config::BreadcrumbConfig;
use crate::content::{ContentItem, Term, TermId};
use crate::hierarchy::ancestor_chain;
use crate::hints::{select_primary_term, BoxedHint, PrimaryTermHint};
use crate::permalink::Permalink;
use crate::schema::BreadcrumbList;
use crate::store::ContentStore;

/// A single step in a breadcrumb trail.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct BreadcrumbEntry {
    /// The 1-based position of the entry within its trail.
    pub position: usize,
    pub name: String,
    /// The link to the entry. The current item has no link.
    pub link: Option<Permalink>,
}

/// An ordered breadcrumb trail.
///
/// The first entry is always the site root and the last entry is always the
/// current item.
#[derive(Debug, PartialEq, Eq, Clone, Deref, Serialize)]
#[serde(transparent)]
pub struct Trail(Vec<BreadcrumbEntry>);

impl Trail {
    fn from_segments(segments: Vec<Segment>) -> Self {
        Self(
            segments
                .into_iter()
                .enumerate()
                .map(|(index, segment)| BreadcrumbEntry {
                    position: index + 1,
                    name: segment.name,
                    link: segment.link,
                })
                .collect(),
        )
    }

    /// Returns the entry names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Returns the JSON-LD `BreadcrumbList` for this trail.
    pub fn to_json_ld(&self) -> BreadcrumbList<'_> {
        BreadcrumbList::from_trail(self)
    }
}

struct Segment {
    name: String,
    link: Option<Permalink>,
}

impl Segment {
    fn linked(name: impl Into<String>, link: Permalink) -> Self {
        Self {
            name: name.into(),
            link: Some(link),
        }
    }
}

/// Builds [`Trail`]s for content items in a [`ContentStore`].
pub struct BreadcrumbTrailBuilder<'a> {
    store: &'a dyn ContentStore,
    config: BreadcrumbConfig,
    hints: Vec<BoxedHint>,
}

impl<'a> BreadcrumbTrailBuilder<'a> {
    /// Returns a new [`BreadcrumbTrailBuilder`] using the default configuration.
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self::from_config(store, BreadcrumbConfig::default())
    }

    pub fn from_config(store: &'a dyn ContentStore, config: BreadcrumbConfig) -> Self {
        let hints = config
            .primary_term_hints
            .iter()
            .map(|source| source.provider())
            .collect();

        Self {
            store,
            config,
            hints,
        }
    }

    /// Adds a primary term hint, consulted after all existing hints.
    pub fn with_hint(mut self, hint: impl PrimaryTermHint + Send + Sync + 'static) -> Self {
        self.hints.push(Box::new(hint));
        self
    }

    /// Builds the breadcrumb trail for the given item.
    #[instrument(skip_all, fields(item = %item.id, content_type = %item.content_type))]
    pub fn build(&self, item: &ContentItem) -> Trail {
        let mut segments = vec![Segment::linked(
            self.config.home_label.clone(),
            self.store.site_root_url(),
        )];

        if item.content_type != self.config.article_type {
            segments.extend(self.archive_segment(item));
        }

        if item.content_type == self.config.article_type {
            segments.extend(self.category_segments(item));
        } else if item.content_type == self.config.page_type {
            segments.extend(self.parent_page_segments(item));
        } else {
            segments.extend(self.taxonomy_segments(item));
        }

        segments.push(Segment {
            name: self.store.title(item),
            link: None,
        });

        debug!(entries = segments.len(), "built breadcrumb trail");

        Trail::from_segments(segments)
    }

    fn archive_segment(&self, item: &ContentItem) -> Option<Segment> {
        let info = self.store.content_type_info(&item.content_type)?;
        if !info.has_archive {
            return None;
        }

        let Some(archive_url) = info.archive_url else {
            debug!("content type has an archive without a link, skipping");
            return None;
        };

        Some(Segment::linked(info.plural_label, archive_url))
    }

    fn category_segments(&self, item: &ContentItem) -> Vec<Segment> {
        let categories = self.store.categories_of(item.id);
        let Some(primary) = select_primary_term(
            self.store,
            &self.hints,
            item.id,
            &self.config.category_taxonomy,
            &categories,
        ) else {
            trace!("item has no categories");
            return Vec::new();
        };

        self.term_segments(primary, |id| self.store.category_by_id(id))
    }

    fn parent_page_segments(&self, item: &ContentItem) -> Vec<Segment> {
        if item.parent.is_none() {
            return Vec::new();
        }

        self.store
            .ancestor_ids(item.id)
            .into_iter()
            .rev()
            .filter_map(|id| {
                let ancestor = self.store.item_by_id(id);
                if ancestor.is_none() {
                    debug!(ancestor = %id, "ancestor could not be resolved, omitting");
                }

                ancestor
            })
            .map(|ancestor| {
                Segment::linked(self.store.title(&ancestor), self.store.permalink(&ancestor))
            })
            .collect()
    }

    // Only the first navigable taxonomy with assigned terms contributes.
    fn taxonomy_segments(&self, item: &ContentItem) -> Vec<Segment> {
        for taxonomy in self.store.taxonomies_of(&item.content_type) {
            if !taxonomy.is_navigable() {
                continue;
            }

            let terms = match self.store.terms_of(item.id, &taxonomy.name) {
                Ok(terms) => terms,
                Err(err) => {
                    debug!(
                        taxonomy = %taxonomy.name,
                        %err,
                        "failed to look up terms, skipping taxonomy"
                    );
                    continue;
                }
            };

            let Some(primary) =
                select_primary_term(self.store, &self.hints, item.id, &taxonomy.name, &terms)
            else {
                continue;
            };

            return self.term_segments(primary, |id| self.store.term_by_id(id, &taxonomy.name));
        }

        Vec::new()
    }

    fn term_segments(
        &self,
        primary: Term,
        resolve: impl FnMut(TermId) -> Option<Term>,
    ) -> Vec<Segment> {
        ancestor_chain(primary, resolve)
            .into_iter()
            .map(|term| {
                let link = self.store.term_link(&term);
                Segment::linked(term.name, link)
            })
            .collect()
    }
}
