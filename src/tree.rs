//! Recommendation node model
//!
//! A single node type covers both roles: a node is terminal when it carries a
//! recommendation bundle, and branching when it has children keyed by the
//! answer value that leads to them. Children are owned, so the tree is
//! acyclic by construction.

use crate::types::RecommendationBundle;
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct DecisionNode {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, DecisionNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<RecommendationBundle>,
}

impl DecisionNode {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            children: BTreeMap::new(),
            recommendation: None,
        }
    }

    /// Register `node` as the child reached when the answer equals
    /// `condition`, returning it for further wiring. Re-registering a
    /// condition replaces the earlier child.
    pub fn add_child(&mut self, condition: impl Into<String>, node: DecisionNode) -> &mut DecisionNode {
        match self.children.entry(condition.into()) {
            Entry::Occupied(mut slot) => {
                slot.insert(node);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(node),
        }
    }

    /// Mark this node terminal. Last call wins.
    pub fn set_recommendation(&mut self, bundle: RecommendationBundle) {
        self.recommendation = Some(bundle);
    }

    pub fn child(&self, value: &str) -> Option<&DecisionNode> {
        self.children.get(value)
    }

    pub fn is_terminal(&self) -> bool {
        self.recommendation.is_some()
    }

    /// Number of edges on the longest path below this node
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn terminal_count(&self) -> usize {
        let own = usize::from(self.is_terminal());
        own + self.children.values().map(|c| c.terminal_count()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, TechRecommendation};

    fn bundle(name: &str) -> RecommendationBundle {
        RecommendationBundle::default().with(
            Category::Tools,
            TechRecommendation::new(&[name], "test", &[]),
        )
    }

    #[test]
    fn test_add_child_returns_child_for_chaining() {
        let mut root = DecisionNode::new("root", "Root");
        root.add_child("a", DecisionNode::new("a", "A"))
            .add_child("b", DecisionNode::new("b", "B"))
            .set_recommendation(bundle("leaf"));

        let leaf = root.child("a").and_then(|a| a.child("b")).unwrap();
        assert!(leaf.is_terminal());
        assert_eq!(root.depth(), 2);
        assert_eq!(root.terminal_count(), 1);
    }

    #[test]
    fn test_add_child_replaces_existing_condition() {
        let mut root = DecisionNode::new("root", "Root");
        root.add_child("x", DecisionNode::new("first", "First"));
        root.add_child("x", DecisionNode::new("second", "Second"));

        assert_eq!(root.children.len(), 1);
        assert_eq!(root.child("x").unwrap().name, "second");
    }

    #[test]
    fn test_set_recommendation_last_call_wins() {
        let mut node = DecisionNode::new("n", "N");
        assert!(!node.is_terminal());
        node.set_recommendation(bundle("one"));
        node.set_recommendation(bundle("two"));

        let tools = node.recommendation.as_ref().unwrap().tools.as_ref().unwrap();
        assert_eq!(tools.primary, vec!["two"]);
    }

    #[test]
    fn test_leaf_serialization_omits_children() {
        let mut node = DecisionNode::new("leaf", "Leaf");
        node.set_recommendation(bundle("x"));
        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("children").is_none());
        assert!(json.get("recommendation").is_some());
    }
}
