//! Evolution trees and lineage splits.

use serde::{Deserialize, Serialize};

/// Base locator for the small per-id sprites.
const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// One stage of an evolution tree.
///
/// Trees may branch: a stage can evolve into several others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStage {
    /// Species name, exactly as supplied by the service.
    pub name: String,
    /// Species id.
    pub id: u32,
    /// Child stages in document order.
    #[serde(default)]
    pub evolves_to: Vec<EvolutionStage>,
}

impl EvolutionStage {
    /// A stage without children.
    pub fn leaf(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            evolves_to: Vec::new(),
        }
    }

    /// Appends a child stage.
    #[must_use]
    pub fn with_child(mut self, child: EvolutionStage) -> Self {
        self.evolves_to.push(child);
        self
    }

    /// The node this stage contributes to a lineage split.
    #[must_use]
    pub fn node(&self) -> EvolutionNode {
        EvolutionNode {
            name: self.name.clone(),
            id: self.id,
        }
    }
}

/// A lineage entry shown next to the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvolutionNode {
    /// Species name.
    pub name: String,
    /// Species id.
    pub id: u32,
}

impl EvolutionNode {
    /// Small sprite locator for this node.
    #[must_use]
    pub fn sprite_url(&self) -> String {
        format!("{SPRITE_BASE_URL}/{}.png", self.id)
    }
}

/// Ancestors and descendants of one stage within its tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionSplit {
    /// Root-to-parent order.
    pub ancestors: Vec<EvolutionNode>,
    /// Pre-order traversal of everything below the stage.
    pub descendants: Vec<EvolutionNode>,
}

impl EvolutionSplit {
    /// Whether there is no lineage to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ancestors.is_empty() && self.descendants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_children_deserialize_as_empty() {
        let stage: EvolutionStage =
            serde_json::from_str(r#"{"name":"ditto","id":132}"#).unwrap();
        assert!(stage.evolves_to.is_empty());
    }

    #[test]
    fn test_sprite_url() {
        let node = EvolutionNode {
            name: "eevee".to_string(),
            id: 133,
        };
        assert!(node.sprite_url().ends_with("/pokemon/133.png"));
    }
}
