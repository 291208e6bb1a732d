//! Recognized key set of a configuration document.
//!
//! Theme categories, variant categories and future flags are open-ended;
//! only the top level and the object form of `content` have a closed key
//! set.

use serde_yaml::Value;

/// Top-level keys.
pub const TOP_LEVEL_KEYS: &[&str] = &[
    "content", "purge", "darkMode", "theme", "variants", "plugins", "future",
];

/// Keys of the object form of `content`/`purge`.
pub const CONTENT_KEYS: &[&str] = &["enabled", "content", "safelist"];

/// Collect the dotted field path of every key outside the recognized schema.
///
/// Non-mapping documents are left to the typed parse to reject.
pub(crate) fn unknown_keys(document: &Value) -> Vec<String> {
    let mut unknown = Vec::new();

    let Value::Mapping(root) = document else {
        return unknown;
    };

    for (key, value) in root {
        let name = key_name(key);
        if !TOP_LEVEL_KEYS.contains(&name.as_str()) {
            unknown.push(name);
            continue;
        }

        if (name == "content" || name == "purge")
            && let Value::Mapping(content) = value
        {
            for inner in content.keys() {
                let inner_name = key_name(inner);
                if !CONTENT_KEYS.contains(&inner_name.as_str()) {
                    unknown.push(format!("{}.{}", name, inner_name));
                }
            }
        }
    }

    unknown
}

/// Render a mapping key for a field path.
fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "~".to_string(),
        other => format!("{:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn recognized_document_has_no_unknown_keys() {
        let doc = parse(
            r#"
purge: ["./*.fs"]
darkMode: false
theme: { extend: {} }
variants: { border: [hover] }
plugins: []
future: { purgeLayersByDefault: true }
"#,
        );
        assert!(unknown_keys(&doc).is_empty());
    }

    #[test]
    fn unknown_top_level_keys_are_reported_in_order() {
        let doc = parse("mode: jit\ncontent: []\nprefix: tw-\n");
        assert_eq!(unknown_keys(&doc), vec!["mode", "prefix"]);
    }

    #[test]
    fn unknown_content_object_keys_carry_their_path() {
        let doc = parse("purge:\n  enabled: true\n  content: []\n  layers: [utilities]\n");
        assert_eq!(unknown_keys(&doc), vec!["purge.layers"]);
    }

    #[test]
    fn open_sections_accept_any_key() {
        let doc = parse(
            r##"
theme:
  spacing: { "72": "18rem" }
  extend: { colors: { brand: "#123456" } }
variants:
  anything: [hover]
future:
  someFlagFromTheFuture: true
"##,
        );
        assert!(unknown_keys(&doc).is_empty());
    }

    #[test]
    fn non_mapping_document_is_left_to_the_parser() {
        assert!(unknown_keys(&parse("[1, 2]")).is_empty());
    }
}
