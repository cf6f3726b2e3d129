//! Scalar coercions for values of uncertain JSON type.

use serde_json::Value;

use ironlaws_core::context::Position;

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A number, or a string holding one.
pub(crate) fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// A non-empty identifier from a string or number.
pub(crate) fn as_identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `{"x": .., "y": ..}` or `[x, y]`.
pub(crate) fn as_position(value: &Value) -> Option<Position> {
    let (x, y) = match value {
        Value::Object(map) => (as_f64(map.get("x")?)?, as_f64(map.get("y")?)?),
        Value::Array(items) if items.len() >= 2 => (as_f64(&items[0])?, as_f64(&items[1])?),
        _ => return None,
    };
    let position = Position::new(x, y);
    position.is_finite().then_some(position)
}

/// Free text from a string, a scalar, or a list of strings.
pub(crate) fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join(" "))
        }
        _ => None,
    }
}
