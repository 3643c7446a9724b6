//! Stack Advisor - guided technology-stack recommendations
//!
//! A short questionnaire (application type, audience, scale, budget, team
//! size, timeline, complexity) is resolved through a fixed decision tree to a
//! curated bundle of frontend, backend, infrastructure and tooling
//! suggestions, plus a summary sentence and a list of caveats.
//!
//! # Quick Start
//!
//! ```rust
//! use stack_advisor::{Answer, DecisionEngine};
//!
//! let engine = DecisionEngine::new();
//! let result = engine.traverse(&[
//!     Answer::new("app-type", "mobile"),
//!     Answer::new("budget", "minimal"),
//! ]);
//!
//! assert_eq!(result.decision_path, "app-type=mobile → budget=minimal");
//! ```
//!
//! # Architecture
//!
//! ```text
//! questions ──► answers ──► DecisionEngine::traverse ──► DecisionResult
//!                               │        │
//!                     builder/tree    narrative
//!                     (bundles)       (summary, considerations)
//! ```
//!
//! The engine performs no I/O. The [`service`] boundary adds payload parsing
//! and fault capture, and [`http`] exposes it over axum.

pub mod builder;
pub mod bundles;
pub mod config;
pub mod engine;
pub mod http;
pub mod narrative;
pub mod questions;
pub mod service;
pub mod tree;
pub mod types;

pub use engine::{DecisionEngine, PriorityOrder};
pub use questions::{get_questions, Question};
pub use service::{recommend, recommend_json, RecommendError};
pub use tree::DecisionNode;
pub use types::*;
