use serde_json::Value;

/// Check whether a value counts as "not set" for mapping purposes.
///
/// Absent, `null`, `""`, numeric zero, `false`, `[]` and `{}` are zero. The
/// check is shallow: an object holding only zero fields is not zero.
///
/// # Example
///
/// ```
/// use genai_json_path::is_zero;
/// use serde_json::json;
///
/// assert!(is_zero(None));
/// assert!(is_zero(Some(&json!(""))));
/// assert!(is_zero(Some(&json!({}))));
/// assert!(!is_zero(Some(&json!({"a": 0}))));
/// ```
pub fn is_zero(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
    }
}
