//! Primary term selection driven by SEO plugin metadata.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::content::{ItemId, Term, TermId};
use crate::store::ContentStore;

/// A source of "primary term" hints for content items.
pub trait PrimaryTermHint {
    /// The name of the integration providing the hint.
    fn name(&self) -> &str;

    /// The metadata key that holds the primary term for `taxonomy`.
    fn meta_key(&self, taxonomy: &str) -> String;

    /// Returns the hinted primary term of `taxonomy` for the given item.
    fn lookup_hint(
        &self,
        store: &dyn ContentStore,
        item: ItemId,
        taxonomy: &str,
    ) -> Option<TermId> {
        let value = store.term_metadata_hint(item, &self.meta_key(taxonomy))?;

        value.trim().parse::<u64>().ok().map(TermId)
    }
}

/// Primary terms set through Yoast SEO.
#[derive(Debug, Clone, Copy, Default)]
pub struct YoastSeo;

impl PrimaryTermHint for YoastSeo {
    fn name(&self) -> &str {
        "yoast"
    }

    fn meta_key(&self, taxonomy: &str) -> String {
        format!("_yoast_wpseo_primary_{taxonomy}")
    }
}

/// Primary terms set through Rank Math.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankMath;

impl PrimaryTermHint for RankMath {
    fn name(&self) -> &str {
        "rank_math"
    }

    fn meta_key(&self, taxonomy: &str) -> String {
        format!("rank_math_primary_{taxonomy}")
    }
}

/// The built-in hint integrations.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintSource {
    Yoast,
    RankMath,
}

/// A boxed [`PrimaryTermHint`].
pub type BoxedHint = Box<dyn PrimaryTermHint + Send + Sync>;

impl HintSource {
    pub fn provider(self) -> BoxedHint {
        match self {
            HintSource::Yoast => Box::new(YoastSeo),
            HintSource::RankMath => Box::new(RankMath),
        }
    }
}

/// Picks the primary term out of `terms`.
///
/// Hints are consulted in order and the first one naming a term in `terms`
/// wins. Without a usable hint the first term is picked.
pub fn select_primary_term(
    store: &dyn ContentStore,
    hints: &[BoxedHint],
    item: ItemId,
    taxonomy: &str,
    terms: &[Term],
) -> Option<Term> {
    for hint in hints {
        let Some(term_id) = hint.lookup_hint(store, item, taxonomy) else {
            continue;
        };

        if let Some(term) = terms.iter().find(|term| term.id == term_id) {
            trace!(hint = hint.name(), %term_id, taxonomy, "using hinted primary term");
            return Some(term.clone());
        }

        trace!(
            hint = hint.name(),
            %term_id,
            taxonomy,
            "hinted primary term is not assigned to the item"
        );
    }

    terms.first().cloned()
}
