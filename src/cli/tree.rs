//! Text tree rendering of collected disc information

use crate::utils::humanize_key;
use serde_json::Value;
use termtree::Tree;

/// Tree of a JSON object: keys sorted and humanized, list entries
/// labelled by the singular key and a 1-based index
pub fn from_value(label: impl Into<String>, value: &Value) -> Tree<String> {
    let mut tree = Tree::new(label.into());
    if let Value::Object(map) = value {
        walk_object(map, &mut tree);
    }
    tree
}

fn walk_object(map: &serde_json::Map<String, Value>, parent: &mut Tree<String>) {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (key, value) in entries {
        let key = humanize_key(key);
        match value {
            Value::Array(items) => {
                let mut child = Tree::new(key.clone());
                let singular = key.strip_suffix('s').unwrap_or(&key);
                walk_array(items, &mut child, singular);
                parent.push(child);
            }
            Value::Object(inner) => {
                let mut child = Tree::new(key);
                walk_object(inner, &mut child);
                parent.push(child);
            }
            Value::Null => {}
            scalar => {
                parent.push(Tree::new(format!("{key}: {}", scalar_text(scalar))));
            }
        }
    }
}

fn walk_array(items: &[Value], parent: &mut Tree<String>, label: &str) {
    let mut items: Vec<&Value> = items.iter().collect();
    if items.iter().all(|v| v.is_string()) {
        items.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
    }

    for (i, value) in items.into_iter().enumerate() {
        match value {
            Value::String(s) => {
                parent.push(Tree::new(humanize_key(s)));
            }
            Value::Array(inner) => {
                let mut child = Tree::new(format!("{label} {}", i + 1));
                walk_array(inner, &mut child, "");
                parent.push(child);
            }
            Value::Object(map) => {
                let mut child = Tree::new(format!("{label} {}", i + 1));
                walk_object(map, &mut child);
                parent.push(child);
            }
            Value::Null => {}
            scalar => {
                parent.push(Tree::new(scalar_text(scalar)));
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_sorted_and_humanized() {
        let tree = from_value("Disc Info", &json!({"title_count": 2, "disc": {"name": "Foo"}}));
        let labels: Vec<&str> = tree.leaves.iter().map(|c| c.root.as_str()).collect();
        assert_eq!(labels, ["Disc", "Title count: 2"]);
        assert_eq!(tree.leaves[0].leaves[0].root, "Name: Foo");
    }

    #[test]
    fn test_list_items_numbered() {
        let tree = from_value(
            "Disc Info",
            &json!({"titles": [{"streams": [{"type": "audio"}, {"type": "video"}]}]}),
        );
        let titles = &tree.leaves[0];
        assert_eq!(titles.root, "Titles");
        assert_eq!(titles.leaves[0].root, "Title 1");
        let streams = &titles.leaves[0].leaves[0];
        assert_eq!(streams.root, "Streams");
        assert_eq!(streams.leaves[1].root, "Stream 2");
        assert_eq!(streams.leaves[1].leaves[0].root, "Type: video");
    }

    #[test]
    fn test_render() {
        let tree = from_value(
            "Disc Info",
            &json!({"drives": [{"disc_name": "FOO"}], "title_count": 1}),
        );
        let expected = "\
Disc Info
├── Drives
│   └── Drive 1
│       └── Disc name: FOO
└── Title count: 1
";
        assert_eq!(tree.to_string().trim_end(), expected.trim_end());
    }

    #[test]
    fn test_float_and_null_values() {
        let tree = from_value("Root", &json!({"framerate": 23.976, "comment": null}));
        assert_eq!(tree.leaves.len(), 1);
        assert_eq!(tree.leaves[0].root, "Framerate: 23.976");
    }
}
