//! Evolution lineage resolution.
//!
//! Given an evolution tree and a species name, find the stage with that name
//! and split the tree around it: the path from the root down to its parent,
//! and everything that evolves from it.

use dex_model::{EvolutionNode, EvolutionSplit, EvolutionStage};

/// Result of locating a species in its evolution tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lineage {
    /// The species was found.
    Found {
        /// Root-to-parent order.
        ancestors: Vec<EvolutionNode>,
        /// Pre-order traversal of all branches below the species.
        descendants: Vec<EvolutionNode>,
    },
    /// No stage carries the requested name.
    NotFound,
}

impl Lineage {
    /// Whether the species was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Converts into a split; not-found degrades to an empty split.
    #[must_use]
    pub fn into_split(self) -> EvolutionSplit {
        match self {
            Self::Found {
                ancestors,
                descendants,
            } => EvolutionSplit {
                ancestors,
                descendants,
            },
            Self::NotFound => EvolutionSplit::default(),
        }
    }
}

/// Locates `target` in `tree` and splits the tree around it.
///
/// The search is depth-first in document order and stops at the first stage
/// whose name equals `target` exactly.
#[must_use]
pub fn resolve_lineage(tree: &EvolutionStage, target: &str) -> Lineage {
    let mut path = Vec::new();
    match find_stage(tree, target, &mut path) {
        Some(stage) => Lineage::Found {
            ancestors: path,
            descendants: descendants_of(stage),
        },
        None => {
            tracing::debug!(
                species = target,
                root = %tree.name,
                "Species not found in evolution chain"
            );
            Lineage::NotFound
        }
    }
}

/// Depth-first search. On success `path` holds the ancestors of the match.
fn find_stage<'t>(
    stage: &'t EvolutionStage,
    target: &str,
    path: &mut Vec<EvolutionNode>,
) -> Option<&'t EvolutionStage> {
    if stage.name == target {
        return Some(stage);
    }
    path.push(stage.node());
    for child in &stage.evolves_to {
        if let Some(found) = find_stage(child, target, path) {
            return Some(found);
        }
    }
    path.pop();
    None
}

/// Pre-order traversal of everything strictly below `stage`.
fn descendants_of(stage: &EvolutionStage) -> Vec<EvolutionNode> {
    let mut out = Vec::new();
    // Children are pushed in reverse so the first branch is visited first.
    let mut stack: Vec<&EvolutionStage> = stage.evolves_to.iter().rev().collect();
    while let Some(next) = stack.pop() {
        out.push(next.node());
        stack.extend(next.evolves_to.iter().rev());
    }
    out
}
