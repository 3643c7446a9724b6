//! Narrative Synthesizer
//!
//! Summary and considerations are derived from the raw answers alone, never
//! from the node traversal landed on.

use std::collections::HashMap;

const SUMMARY_PREFIX: &str = "Based on your answers, we recommend a stack for";
const SUMMARY_SUFFIX: &str =
    "The selected technologies balance performance, productivity and maintainability.";

/// Fixed summary for the fallback path
pub fn default_summary() -> String {
    "General recommendations based on your answers.".to_string()
}

/// One templated sentence from app-type, scale and timeline, in that order
pub fn summarize(answers: &HashMap<&str, &str>) -> String {
    let app_type = answers.get("app-type").copied().unwrap_or_default();
    let scale = answers.get("scale").copied().unwrap_or_default();
    let timeline = answers.get("timeline").copied().unwrap_or_default();

    let mut parts = vec![app_type_phrase(app_type)];

    match scale {
        "large" | "xlarge" => parts.push("with high scalability"),
        "small" => parts.push("at small scale"),
        _ => {}
    }

    if timeline == "fast" {
        parts.push("and rapid development");
    }

    format!("{} {}. {}", SUMMARY_PREFIX, parts.join(", "), SUMMARY_SUFFIX)
}

fn app_type_phrase(app_type: &str) -> &'static str {
    match app_type {
        "web" => "a modern web application",
        "mobile" => "a mobile application",
        "api" => "a backend service/API",
        "desktop" => "a desktop application",
        "fullstack" => "a full-stack application",
        _ => "an application",
    }
}

/// Advisory notes gated by independent predicates over the answers.
///
/// Every matching predicate contributes, in a fixed order; nothing is
/// deduplicated.
pub fn considerations(answers: &HashMap<&str, &str>) -> Vec<String> {
    let audience = answers.get("audience").copied();
    let scale = answers.get("scale").copied();
    let complexity = answers.get("complexity").copied();
    let team_size = answers.get("team-size").copied();
    let app_type = answers.get("app-type").copied();

    let mut notes: Vec<&str> = Vec::new();

    if audience == Some("public") {
        notes.push("Implement robust security measures (rate limiting, input validation, HTTPS)");
        notes.push("Plan for SEO and accessibility from the start");
    }

    if audience == Some("internal") {
        notes.push("Integrate with corporate authentication systems (SSO, LDAP)");
    }

    if matches!(scale, Some("large" | "xlarge")) {
        notes.push("Plan a caching and CDN strategy from the start");
        notes.push("Implement comprehensive monitoring and observability");
        notes.push("Consider a multi-region architecture for global latency");
    }

    if matches!(complexity, Some("complex" | "very-complex")) {
        notes.push("Document the architecture and technical decisions thoroughly");
        notes.push("Implement comprehensive testing (unit, integration, e2e)");
        notes.push("Establish code review and CI/CD practices from the start");
    }

    if team_size == Some("large") {
        notes.push("Define clear coding conventions and style guides");
        notes.push("Adopt a monorepo if you have several related projects");
    }

    if app_type == Some("mobile") {
        notes.push("Plan an app update and versioning strategy");
        notes.push("Consider an offline-first architecture for a better UX");
    }

    notes.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map<'a>(pairs: &[(&'a str, &'a str)]) -> HashMap<&'a str, &'a str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_summary_all_fragments_in_order() {
        let summary = summarize(&map(&[
            ("timeline", "fast"),
            ("scale", "xlarge"),
            ("app-type", "api"),
        ]));
        assert_eq!(
            summary,
            "Based on your answers, we recommend a stack for a backend service/API, \
             with high scalability, and rapid development. The selected technologies \
             balance performance, productivity and maintainability."
        );
    }

    #[test]
    fn test_summary_small_scale() {
        let summary = summarize(&map(&[("app-type", "web"), ("scale", "small")]));
        assert!(summary.contains("a modern web application, at small scale."));
    }

    #[test]
    fn test_summary_ignores_medium_scale_and_slow_timelines() {
        let summary = summarize(&map(&[
            ("app-type", "desktop"),
            ("scale", "medium"),
            ("timeline", "long"),
        ]));
        assert!(summary.contains("for a desktop application. The selected"));
    }

    #[test]
    fn test_summary_unknown_app_type_falls_back() {
        assert!(summarize(&map(&[("app-type", "game")])).contains("for an application."));
        assert!(summarize(&HashMap::new()).contains("for an application."));
    }

    #[test]
    fn test_no_considerations_for_empty_answers() {
        assert!(considerations(&HashMap::new()).is_empty());
    }

    #[test]
    fn test_public_audience_adds_two() {
        let notes = considerations(&map(&[("audience", "public")]));
        assert_eq!(notes.len(), 2);
        assert!(notes[0].contains("security"));
        assert!(notes[1].contains("SEO"));
    }

    #[test]
    fn test_internal_audience_adds_sso() {
        let notes = considerations(&map(&[("audience", "internal")]));
        assert_eq!(notes, vec!["Integrate with corporate authentication systems (SSO, LDAP)"]);
    }

    #[test]
    fn test_all_predicates_fire_in_fixed_order() {
        let notes = considerations(&map(&[
            ("app-type", "mobile"),
            ("team-size", "large"),
            ("complexity", "very-complex"),
            ("scale", "large"),
            ("audience", "public"),
        ]));
        assert_eq!(notes.len(), 2 + 3 + 3 + 2 + 2);
        assert!(notes[0].contains("security"));
        assert!(notes[2].contains("caching"));
        assert!(notes[5].contains("Document"));
        assert!(notes[8].contains("conventions"));
        assert!(notes[10].contains("versioning"));
    }

    #[test]
    fn test_moderate_complexity_adds_nothing() {
        assert!(considerations(&map(&[("complexity", "moderate")])).is_empty());
    }
}
