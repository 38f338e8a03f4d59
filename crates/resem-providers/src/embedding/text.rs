//! Attribute rendering helpers shared by the embedding generators

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Canonical JSON serialization: object keys sorted recursively, so two
/// attribute mappings with the same contents serialize identically
/// regardless of insertion order.
pub fn canonical_json(value: &Value) -> String {
    canonicalize(value).to_string()
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map
                .iter()
                .map(|(k, v)| (k.clone(), canonicalize(v)))
                .collect();
            Value::Object(Map::from_iter(sorted))
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Render an attribute mapping as descriptive text for a semantic encoder.
///
/// One `Key: value` line per attribute in mapping order. Null values become
/// `Unknown` and booleans `Yes`/`No`, matching how the upstream feed
/// describes flags like public-IP presence. Non-object input falls back to
/// its JSON serialization.
pub fn render_attribute_text(attributes: &Value) -> String {
    let Value::Object(map) = attributes else {
        return attributes.to_string();
    };

    let mut lines = Vec::with_capacity(map.len() + 1);
    lines.push("Resource configuration:".to_string());
    for (key, value) in map {
        lines.push(format!("{}: {}", title_case(key), render_scalar(value)));
    }
    lines.join("\n")
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => "Unknown".to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// "instance_type" -> "Instance Type"
fn title_case(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_json_is_order_insensitive() {
        let a = json!({ "b": 1, "a": { "y": 2, "x": 3 } });
        let b = json!({ "a": { "x": 3, "y": 2 }, "b": 1 });
        assert_eq!(canonical_json(&a), canonical_json(&b));
    }

    #[test]
    fn renders_descriptive_lines() {
        let attrs = json!({
            "instance_type": "t3.micro",
            "has_public_ip": true,
            "team": null,
        });
        let text = render_attribute_text(&attrs);
        assert!(text.starts_with("Resource configuration:"));
        assert!(text.contains("Instance Type: t3.micro"));
        assert!(text.contains("Has Public Ip: Yes"));
        assert!(text.contains("Team: Unknown"));
    }

    #[test]
    fn non_object_falls_back_to_json() {
        assert_eq!(render_attribute_text(&json!([1, 2])), "[1,2]");
    }
}
