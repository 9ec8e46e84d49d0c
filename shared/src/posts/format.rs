use serde_json::Value;

/// Renders a post location for display.
///
/// The server sends either an object (`province`/`state`, `city`,
/// `barangay`, `address`/`display_name`), the same object JSON-encoded in a
/// string, or free text. Blank parts are skipped.
#[must_use]
pub fn format_location(value: &Value) -> String {
    if !is_truthy(value) {
        return String::new();
    }
    match value {
        Value::Object(_) => join_parts(value),
        Value::Array(_) => String::new(),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(parsed @ (Value::Object(_) | Value::Array(_))) => format_location(&parsed),
            _ => text.clone(),
        },
        other => other.to_string(),
    }
}

/// Whether a browser script would treat `value` as set.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn join_parts(object: &Value) -> String {
    // The first set key wins even if it is blank, so `"province": " "` hides
    // `state`.
    let field = |primary: &str, fallback: Option<&str>| {
        let pick = |name: &str| object.get(name).filter(|v| is_truthy(v));
        pick(primary).or_else(|| fallback.and_then(pick))
    };

    [
        field("province", Some("state")),
        field("city", None),
        field("barangay", None),
        field("address", Some("display_name")),
    ]
    .into_iter()
    .flatten()
    .filter_map(part_text)
    .collect::<Vec<_>>()
    .join(", ")
}

fn part_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.trim().is_empty()).then_some(text)
}
