//! Question Catalog: the fixed, ordered questionnaire
//!
//! Each question's `id` is the key the engine's priority order refers to.
//! The catalog only declares what values are permitted; it never enforces
//! them on the engine's behalf.

use crate::types::Answer;
use serde::{Deserialize, Serialize};

/// A question shown to the user, one at a time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub category: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Question {
    /// Whether `value` is one of this question's declared options
    pub fn permits(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// Get the full catalog, in the order it is asked
pub fn get_questions() -> Vec<Question> {
    vec![
        app_type(),
        audience(),
        scale(),
        budget(),
        team_size(),
        timeline(),
        complexity(),
    ]
}

pub fn find_question(id: &str) -> Option<Question> {
    get_questions().into_iter().find(|q| q.id == id)
}

/// Answers whose question id or value falls outside the catalog.
///
/// Advisory only: traversal simply never matches them.
pub fn unrecognized_answers(answers: &[Answer]) -> Vec<&Answer> {
    let catalog = get_questions();
    answers
        .iter()
        .filter(|a| {
            !catalog
                .iter()
                .any(|q| q.id == a.question_id && q.permits(&a.value))
        })
        .collect()
}

fn question(
    id: &str,
    category: &str,
    text: &str,
    description: &str,
    options: Vec<QuestionOption>,
) -> Question {
    Question {
        id: id.to_string(),
        category: category.to_string(),
        text: text.to_string(),
        description: Some(description.to_string()),
        options,
    }
}

fn opt(label: &str, value: &str, description: &str) -> QuestionOption {
    QuestionOption {
        label: label.to_string(),
        value: value.to_string(),
        description: Some(description.to_string()),
    }
}

// ============================================================================
// QUESTION DEFINITIONS
// ============================================================================

fn app_type() -> Question {
    question(
        "app-type",
        "Application Type",
        "What kind of application do you want to build?",
        "This determines which technologies fit your project best.",
        vec![
            opt("Web Application", "web", "Website or web app accessed from a browser"),
            opt("Mobile Application", "mobile", "Native or hybrid app for iOS and/or Android"),
            opt("API / Backend", "api", "Backend service, REST or GraphQL API"),
            opt("Desktop Application", "desktop", "Software for Windows, macOS or Linux"),
            opt("Full-Stack", "fullstack", "Complete application with integrated frontend and backend"),
        ],
    )
}

fn audience() -> Question {
    question(
        "audience",
        "Audience",
        "Who is the target audience?",
        "The kind of users shapes architecture and security decisions.",
        vec![
            opt("General Public", "public", "External users, customers, web visitors"),
            opt("Internal / Enterprise", "internal", "Employees, internal tools, corporate systems"),
            opt("B2B / Partners", "b2b", "Other companies, integrations, enterprise services"),
            opt("Developers", "developers", "Public API, SDK, developer platform"),
        ],
    )
}

fn scale() -> Question {
    question(
        "scale",
        "Scale",
        "What user scale do you expect?",
        "Expected scale drives the architecture and infrastructure you need.",
        vec![
            opt("Small (< 1,000 users)", "small", "Personal project, MVP, early startup"),
            opt("Medium (1,000 - 100,000 users)", "medium", "Growing startup, established product"),
            opt("Large (100,000 - 1M users)", "large", "Established company, high traffic"),
            opt("Very Large (> 1M users)", "xlarge", "Massive scale, global distribution"),
        ],
    )
}

fn budget() -> Question {
    question(
        "budget",
        "Budget",
        "What is your infrastructure budget?",
        "Budget constrains hosting and cloud service options.",
        vec![
            opt("Minimal / Free", "minimal", "Free or very low cost services"),
            opt("Low ($0 - $100/month)", "low", "Limited budget, optimize costs"),
            opt("Medium ($100 - $1,000/month)", "medium", "Moderate budget, managed services"),
            opt("High (> $1,000/month)", "high", "Flexible budget, premium services"),
        ],
    )
}

fn team_size() -> Question {
    question(
        "team-size",
        "Team",
        "How large is your development team?",
        "Team size affects the complexity of tooling and process.",
        vec![
            opt("Solo / 1-2 people", "solo", "Individual developer or very small team"),
            opt("Small (3-5 people)", "small", "Small team, direct communication"),
            opt("Medium (6-15 people)", "medium", "Established team that needs coordination"),
            opt("Large (> 15 people)", "large", "Multiple teams, formal processes"),
        ],
    )
}

fn timeline() -> Question {
    question(
        "timeline",
        "Timeline",
        "What is your development timeline?",
        "Available time influences the choice of frameworks and tools.",
        vec![
            opt("Fast (< 1 month)", "fast", "Quick MVP, prototype, proof of concept"),
            opt("Normal (1-3 months)", "normal", "Standard development, initial product"),
            opt("Long (3-6 months)", "long", "Complex project, multiple phases"),
            opt("Very Long (> 6 months)", "extended", "Enterprise project, continuous development"),
        ],
    )
}

fn complexity() -> Question {
    question(
        "complexity",
        "Complexity",
        "How technically complex is your project?",
        "Complexity determines the most appropriate technologies and architectures.",
        vec![
            opt("Simple", "simple", "Basic CRUD, informational site, landing page"),
            opt("Moderate", "moderate", "Business logic, authentication, basic integrations"),
            opt("Complex", "complex", "Multiple services, real-time processing, ML/AI"),
            opt("Very Complex", "very-complex", "Microservices, big data, distributed systems"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = get_questions().into_iter().map(|q| q.id).collect();
        assert_eq!(
            ids,
            vec![
                "app-type",
                "audience",
                "scale",
                "budget",
                "team-size",
                "timeline",
                "complexity"
            ]
        );
    }

    #[test]
    fn test_questions_have_required_fields() {
        for q in get_questions() {
            assert!(!q.text.is_empty(), "{} should have text", q.id);
            assert!(!q.category.is_empty(), "{} should have a category", q.id);
            assert!(!q.options.is_empty(), "{} should have options", q.id);

            let mut values: Vec<_> = q.options.iter().map(|o| &o.value).collect();
            let total = values.len();
            values.sort();
            values.dedup();
            assert_eq!(values.len(), total, "{} option values should be unique", q.id);
        }
    }

    #[test]
    fn test_permits() {
        let q = find_question("app-type").unwrap();
        assert!(q.permits("desktop"));
        assert!(!q.permits("embedded"));
        assert_eq!(q.option("api").unwrap().label, "API / Backend");
    }

    #[test]
    fn test_find_unknown_question() {
        assert!(find_question("favorite-color").is_none());
    }

    #[test]
    fn test_unrecognized_answers() {
        let answers = vec![
            Answer::new("app-type", "web"),
            Answer::new("app-type", "smartwatch"),
            Answer::new("mood", "happy"),
        ];
        let bad = unrecognized_answers(&answers);
        assert_eq!(bad.len(), 2);
        assert_eq!(bad[0].value, "smartwatch");
        assert_eq!(bad[1].question_id, "mood");
    }

    #[test]
    fn test_catalog_serialization_keeps_order() {
        let json = serde_json::to_value(get_questions()).unwrap();
        assert_eq!(json[0]["id"], "app-type");
        assert_eq!(json[6]["options"][3]["value"], "very-complex");
    }
}
