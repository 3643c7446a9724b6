//! Traversal Engine
//!
//! Walks the decision tree in a fixed priority order of question ids,
//! stopping at the first terminal node. The order the answers were submitted
//! in never matters; only [`PriorityOrder`] does.

use crate::builder;
use crate::bundles;
use crate::narrative;
use crate::tree::DecisionNode;
use crate::types::{answers_to_map, Answer, DecisionResult, RecommendationBundle};
use std::collections::HashMap;

/// Separator between edges in a decision path
pub const PATH_SEPARATOR: &str = " → ";

/// Decision path reported when no terminal node is reached
pub const DEFAULT_PATH: &str = "default";

/// Question ids consulted by traversal, most significant first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityOrder(Vec<String>);

impl PriorityOrder {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }
}

impl Default for PriorityOrder {
    /// App type first, then timeline, complexity/scale, and finally the
    /// budget and team-size qualifiers used by the mobile and full-stack
    /// branches.
    fn default() -> Self {
        Self::new([
            "app-type",
            "timeline",
            "complexity",
            "scale",
            "budget",
            "team-size",
        ])
    }
}

/// Resolves answers to a recommendation.
///
/// The tree is built once and never mutated, so a single engine can be
/// shared across threads behind an `Arc`.
pub struct DecisionEngine {
    root: DecisionNode,
    priority: PriorityOrder,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionEngine {
    pub fn new() -> Self {
        Self::with_parts(builder::build_tree(), PriorityOrder::default())
    }

    pub fn with_parts(root: DecisionNode, priority: PriorityOrder) -> Self {
        Self { root, priority }
    }

    pub fn root(&self) -> &DecisionNode {
        &self.root
    }

    pub fn priority(&self) -> &PriorityOrder {
        &self.priority
    }

    /// Resolve a full answer set to a recommendation
    pub fn traverse(&self, answers: &[Answer]) -> DecisionResult {
        let answers = answers_to_map(answers);

        let mut current = &self.root;
        let mut path: Vec<String> = Vec::new();

        for key in self.priority.ids() {
            let Some(value) = answers.get(key.as_str()) else {
                continue;
            };

            if let Some(child) = current.child(value) {
                tracing::debug!(question = %key, value = %value, node = %child.name, "descending");
                current = child;
                path.push(format!("{}={}", key, value));
            }

            if let Some(bundle) = &current.recommendation {
                return Self::format_result(bundle, &answers, &path);
            }
        }

        tracing::debug!(edges = path.len(), "no terminal node reached, using default bundle");
        Self::default_result(&answers)
    }

    fn format_result(
        bundle: &RecommendationBundle,
        answers: &HashMap<&str, &str>,
        path: &[String],
    ) -> DecisionResult {
        DecisionResult {
            summary: narrative::summarize(answers),
            technologies: bundle.clone(),
            considerations: narrative::considerations(answers),
            decision_path: path.join(PATH_SEPARATOR),
        }
    }

    fn default_result(answers: &HashMap<&str, &str>) -> DecisionResult {
        DecisionResult {
            summary: narrative::default_summary(),
            technologies: bundles::default_bundle(),
            considerations: narrative::considerations(answers),
            decision_path: DEFAULT_PATH.to_string(),
        }
    }
}
