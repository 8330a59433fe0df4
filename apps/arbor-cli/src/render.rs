//! Text and JSON renderings of a built tree.

use arbor_tree::{BuildOutcome, Tree};

/// Indented outline, one id per line, two spaces per level.
///
/// Nodes deeper than `max_depth` are left out.
pub fn outline(tree: &Tree, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    for (id, depth) in tree.pre_order().with_depth() {
        if max_depth.is_some_and(|max| depth > max) {
            continue;
        }
        out.push_str(&"  ".repeat(depth));
        out.push_str(&id.to_string());
        out.push('\n');
    }
    out
}

/// Arena form as pretty JSON; an empty outcome has no nodes.
pub fn tree_json(outcome: &BuildOutcome) -> serde_json::Result<String> {
    match outcome {
        BuildOutcome::Tree(tree) => serde_json::to_string_pretty(tree),
        BuildOutcome::Empty => serde_json::to_string_pretty(&serde_json::json!({ "nodes": [] })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::Record;
    use arbor_tree::build;

    fn sample() -> BuildOutcome {
        build(&[
            Record::new(0, 0),
            Record::new(2, 0),
            Record::new(1, 0),
            Record::new(3, 1),
        ])
        .unwrap()
    }

    #[test]
    fn outline_indents_by_depth() {
        let outcome = sample();
        let tree = outcome.tree().unwrap();
        assert_eq!(outline(tree, None), "0\n  1\n    3\n  2\n");
    }

    #[test]
    fn outline_respects_max_depth() {
        let outcome = sample();
        let tree = outcome.tree().unwrap();
        assert_eq!(outline(tree, Some(1)), "0\n  1\n  2\n");
        assert_eq!(outline(tree, Some(0)), "0\n");
    }

    #[test]
    fn json_lists_arena_slots() {
        let json: serde_json::Value = serde_json::from_str(&tree_json(&sample()).unwrap()).unwrap();
        let nodes = json["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0]["id"], 0);
        assert!(nodes[0]["parent"].is_null());
        assert_eq!(nodes[0]["children"], serde_json::json!([1, 2]));
        assert_eq!(nodes[3]["parent"], 1);
    }

    #[test]
    fn json_for_empty_outcome() {
        let json: serde_json::Value =
            serde_json::from_str(&tree_json(&BuildOutcome::Empty).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({ "nodes": [] }));
    }
}
