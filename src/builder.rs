//! Tree Builder: wires the fixed decision hierarchy
//!
//! ```text
//! root ─┬─ web ───────┬─ fast ───┬─ simple      (complexity)
//!       │  (app-type) │(timeline)└─ complex
//!       │             ├─ normal ──── medium      (scale)
//!       │             └─ long ────── large       (scale)
//!       ├─ mobile ────┬─ minimal                 (budget)
//!       │             └─ high
//!       ├─ api ───────┬─ small                   (scale)
//!       │             └─ xlarge
//!       ├─ desktop ───┬─ simple                  (complexity)
//!       │             └─ complex
//!       └─ fullstack ─┬─ solo                    (team-size)
//!                     └─ large
//! ```
//!
//! Web needs one more level than the other application types; its stack
//! depends on timeline before complexity or scale.

use crate::bundles;
use crate::tree::DecisionNode;

/// Build the canonical decision tree
pub fn build_tree() -> DecisionNode {
    let mut root = DecisionNode::new("root", "Start of the decision tree");

    build_web_branch(root.add_child("web", DecisionNode::new("web", "Web application")));
    build_mobile_branch(root.add_child("mobile", DecisionNode::new("mobile", "Mobile application")));
    build_api_branch(root.add_child("api", DecisionNode::new("api", "API / Backend")));
    build_desktop_branch(root.add_child("desktop", DecisionNode::new("desktop", "Desktop application")));
    build_fullstack_branch(root.add_child("fullstack", DecisionNode::new("fullstack", "Full-stack")));

    root
}

fn build_web_branch(node: &mut DecisionNode) {
    let fast = node.add_child("fast", DecisionNode::new("fast", "Rapid development"));
    fast.add_child("simple", DecisionNode::new("simple", "Simple complexity"))
        .set_recommendation(bundles::web_fast_simple());
    fast.add_child("complex", DecisionNode::new("complex", "High complexity"))
        .set_recommendation(bundles::web_fast_complex());

    node.add_child("normal", DecisionNode::new("normal", "Normal timeline"))
        .add_child("medium", DecisionNode::new("medium", "Medium scale"))
        .set_recommendation(bundles::web_normal_medium());

    node.add_child("long", DecisionNode::new("long", "Long timeline"))
        .add_child("large", DecisionNode::new("large", "Large scale"))
        .set_recommendation(bundles::web_long_large());
}

fn build_mobile_branch(node: &mut DecisionNode) {
    node.add_child("minimal", DecisionNode::new("minimal", "Minimal budget"))
        .set_recommendation(bundles::mobile_minimal_budget());
    node.add_child("high", DecisionNode::new("high", "High budget"))
        .set_recommendation(bundles::mobile_high_budget());
}

fn build_api_branch(node: &mut DecisionNode) {
    node.add_child("small", DecisionNode::new("small", "Small scale"))
        .set_recommendation(bundles::api_small_scale());
    node.add_child("xlarge", DecisionNode::new("xlarge", "Very large scale"))
        .set_recommendation(bundles::api_xlarge_scale());
}

fn build_desktop_branch(node: &mut DecisionNode) {
    node.add_child("simple", DecisionNode::new("simple", "Simple app"))
        .set_recommendation(bundles::desktop_simple());
    node.add_child("complex", DecisionNode::new("complex", "Complex app"))
        .set_recommendation(bundles::desktop_complex());
}

fn build_fullstack_branch(node: &mut DecisionNode) {
    node.add_child("solo", DecisionNode::new("solo", "Solo developer"))
        .set_recommendation(bundles::fullstack_solo());
    node.add_child("large", DecisionNode::new("large", "Large team"))
        .set_recommendation(bundles::fullstack_large_team());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk<'a>(root: &'a DecisionNode, path: &[&str]) -> Option<&'a DecisionNode> {
        path.iter().try_fold(root, |node, value| node.child(value))
    }

    #[test]
    fn test_top_level_app_types() {
        let root = build_tree();
        let types: Vec<_> = root.children.keys().map(String::as_str).collect();
        assert_eq!(types, vec!["api", "desktop", "fullstack", "mobile", "web"]);
        assert!(!root.is_terminal());
    }

    #[test]
    fn test_tree_shape() {
        let root = build_tree();
        assert_eq!(root.depth(), 3);
        assert_eq!(root.terminal_count(), 12);
    }

    #[test]
    fn test_web_terminals_at_third_level() {
        let root = build_tree();
        for path in [
            ["web", "fast", "simple"],
            ["web", "fast", "complex"],
            ["web", "normal", "medium"],
            ["web", "long", "large"],
        ] {
            let node = walk(&root, &path).unwrap();
            assert!(node.is_terminal(), "{:?} should be terminal", path);
        }
        assert!(!walk(&root, &["web", "fast"]).unwrap().is_terminal());
    }

    #[test]
    fn test_other_terminals_at_second_level() {
        let root = build_tree();
        for path in [
            ["mobile", "minimal"],
            ["mobile", "high"],
            ["api", "small"],
            ["api", "xlarge"],
            ["desktop", "simple"],
            ["desktop", "complex"],
            ["fullstack", "solo"],
            ["fullstack", "large"],
        ] {
            let node = walk(&root, &path).unwrap();
            assert!(node.is_terminal(), "{:?} should be terminal", path);
            assert!(node.children.is_empty());
        }
    }

    #[test]
    fn test_terminal_bundles_are_non_empty() {
        fn check(node: &DecisionNode) {
            if let Some(bundle) = &node.recommendation {
                assert!(!bundle.is_empty(), "{} has an empty bundle", node.name);
            }
            node.children.values().for_each(check);
        }
        check(&build_tree());
    }

    #[test]
    fn test_unsupported_values_have_no_branch() {
        let root = build_tree();
        assert!(walk(&root, &["web", "extended"]).is_none());
        assert!(walk(&root, &["api", "medium"]).is_none());
        assert!(walk(&root, &["mobile", "low"]).is_none());
    }
}
