//! Core types for the stack advisor
//!
//! Everything that crosses the engine boundary lives here: the answers the
//! questionnaire collects, the per-category recommendation bundle, and the
//! result (or degraded error) handed back to the presentation layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One answered question, as submitted by the questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: String,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
        }
    }
}

/// Suggested technologies for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechRecommendation {
    pub primary: Vec<String>,
    pub reasoning: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl TechRecommendation {
    pub fn new(primary: &[&str], reasoning: &str, alternatives: &[&str]) -> Self {
        Self {
            primary: primary.iter().map(|s| s.to_string()).collect(),
            reasoning: reasoning.to_string(),
            alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Recommendation categories, in the order they are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Infrastructure,
    Tools,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Frontend,
        Category::Backend,
        Category::Infrastructure,
        Category::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Infrastructure => "infrastructure",
            Category::Tools => "tools",
        }
    }
}

/// Per-category recommendations attached to a terminal tree node.
///
/// Any subset of categories may be populated; empty slots are left off the
/// wire entirely rather than serialized as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontend: Option<TechRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<TechRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<TechRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<TechRecommendation>,
}

impl RecommendationBundle {
    pub fn get(&self, category: Category) -> Option<&TechRecommendation> {
        match category {
            Category::Frontend => self.frontend.as_ref(),
            Category::Backend => self.backend.as_ref(),
            Category::Infrastructure => self.infrastructure.as_ref(),
            Category::Tools => self.tools.as_ref(),
        }
    }

    pub fn set(&mut self, category: Category, recommendation: TechRecommendation) {
        let slot = match category {
            Category::Frontend => &mut self.frontend,
            Category::Backend => &mut self.backend,
            Category::Infrastructure => &mut self.infrastructure,
            Category::Tools => &mut self.tools,
        };
        *slot = Some(recommendation);
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, category: Category, recommendation: TechRecommendation) -> Self {
        self.set(category, recommendation);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.populated().next().is_none()
    }

    /// Populated categories, in presentation order
    pub fn populated(&self) -> impl Iterator<Item = (Category, &TechRecommendation)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(move |c| self.get(c).map(|r| (c, r)))
    }
}

/// Outcome of one traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub summary: String,
    pub technologies: RecommendationBundle,
    pub considerations: Vec<String>,
    pub decision_path: String,
}

/// Degraded response returned when a request could not be processed.
///
/// Callers detect failure by the presence of `error` together with an empty
/// `technologies` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub summary: String,
    pub technologies: RecommendationBundle,
    pub considerations: Vec<String>,
}

/// Collapse answers into an id -> value lookup. Later duplicates overwrite
/// earlier ones.
pub fn answers_to_map(answers: &[Answer]) -> HashMap<&str, &str> {
    answers
        .iter()
        .map(|a| (a.question_id.as_str(), a.value.as_str()))
        .collect()
}
