//! Walking parent links in hierarchical content.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{trace, warn};

/// A node that may point at a parent of the same kind.
pub trait HierarchicalNode {
    type Id: Copy + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;

    fn parent_id(&self) -> Option<Self::Id>;
}

/// Returns the chain of ancestors leading to `node`, ordered root-first and
/// ending with `node` itself.
///
/// The walk stops at the first node without a parent, at the first parent that
/// `resolve` cannot find, or at a parent that has already been visited.
pub fn ancestor_chain<N, F>(node: N, mut resolve: F) -> Vec<N>
where
    N: HierarchicalNode,
    F: FnMut(N::Id) -> Option<N>,
{
    let mut visited = HashSet::from([node.id()]);
    let mut next_parent = node.parent_id();
    let mut chain = vec![node];

    while let Some(parent_id) = next_parent {
        if !visited.insert(parent_id) {
            warn!(?parent_id, "cycle detected in hierarchy, stopping ancestor walk");
            break;
        }

        let Some(parent) = resolve(parent_id) else {
            trace!(?parent_id, "parent could not be resolved, truncating chain");
            break;
        };

        next_parent = parent.parent_id();
        chain.push(parent);
    }

    chain.reverse();
    chain
}
