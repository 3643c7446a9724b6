//! Request/response boundary around the engine
//!
//! Turns a raw answer payload into a [`DecisionResult`], or into the
//! degraded [`ErrorResponse`] shape when anything goes wrong. Faults are
//! scoped to one call; nothing here retries.

use crate::engine::DecisionEngine;
use crate::questions;
use crate::types::{Answer, DecisionResult, ErrorResponse, RecommendationBundle};
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Summary sent alongside every degraded response
pub const APOLOGY_SUMMARY: &str = "An error occurred while processing your request";

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Malformed answer payload: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("Failed to generate recommendations: {0}")]
    Fault(String),
}

impl RecommendError {
    /// The degraded response for this failure
    pub fn into_degraded(self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            summary: APOLOGY_SUMMARY.to_string(),
            technologies: RecommendationBundle::default(),
            considerations: Vec::new(),
        }
    }
}

/// Parse a JSON answer list and resolve it
pub fn recommend_json(engine: &DecisionEngine, body: &[u8]) -> Result<DecisionResult, RecommendError> {
    let answers: Vec<Answer> = serde_json::from_slice(body)?;
    recommend(engine, &answers)
}

/// Resolve answers, converting a panic during traversal into
/// [`RecommendError::Fault`]
pub fn recommend(engine: &DecisionEngine, answers: &[Answer]) -> Result<DecisionResult, RecommendError> {
    for answer in questions::unrecognized_answers(answers) {
        tracing::warn!(
            question = %answer.question_id,
            value = %answer.value,
            "answer outside the question catalog, it will not match any branch"
        );
    }

    run_guarded(|| engine.traverse(answers))
}

fn run_guarded<F>(f: F) -> Result<DecisionResult, RecommendError>
where
    F: FnOnce() -> DecisionResult,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown fault".to_string());
        tracing::error!(error = %message, "traversal panicked");
        RecommendError::Fault(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_json_success() {
        let engine = DecisionEngine::new();
        let body = br#"[{"questionId":"app-type","value":"fullstack"},{"questionId":"team-size","value":"solo"}]"#;
        let result = recommend_json(&engine, body).unwrap();
        assert_eq!(result.decision_path, "app-type=fullstack → team-size=solo");
    }

    #[test]
    fn test_recommend_json_malformed() {
        let engine = DecisionEngine::new();
        let err = recommend_json(&engine, b"{not json").unwrap_err();
        assert!(matches!(err, RecommendError::MalformedRequest(_)));
    }

    #[test]
    fn test_recommend_json_wrong_shape() {
        let engine = DecisionEngine::new();
        let err = recommend_json(&engine, br#"{"app-type":"web"}"#).unwrap_err();
        assert!(matches!(err, RecommendError::MalformedRequest(_)));
    }

    #[test]
    fn test_unknown_answers_still_resolve() {
        let engine = DecisionEngine::new();
        let result = recommend(&engine, &[Answer::new("app-type", "kiosk")]).unwrap();
        assert_eq!(result.decision_path, "default");
    }

    #[test]
    fn test_panic_becomes_fault() {
        let err = run_guarded(|| panic!("tree exploded")).unwrap_err();
        match err {
            RecommendError::Fault(message) => assert_eq!(message, "tree exploded"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_degraded_shape() {
        let degraded = RecommendError::Fault("boom".to_string()).into_degraded();
        assert_eq!(degraded.summary, APOLOGY_SUMMARY);
        assert!(degraded.technologies.is_empty());
        assert!(degraded.considerations.is_empty());
        assert!(degraded.error.contains("boom"));

        let json = serde_json::to_value(&degraded).unwrap();
        assert_eq!(json["technologies"], serde_json::json!({}));
        assert_eq!(json["considerations"], serde_json::json!([]));
    }
}
