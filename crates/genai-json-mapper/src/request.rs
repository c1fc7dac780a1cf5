//! Turning a converted request body into a path and a body.
//!
//! Request tables write URL parameters under `_url` and query parameters
//! under `_query`. Neither belongs in the body that goes on the wire.

use serde_json::{Map, Value};

use crate::error::MapError;

const URL_KEY: &str = "_url";
const QUERY_KEY: &str = "_query";

#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    /// Relative path, with the query string when there is one.
    pub path: String,
    pub body: Value,
}

/// Fill `template` from the body's `_url`, append its `_query` and strip
/// both from the body.
///
/// ```
/// use genai_json_mapper::prepare_request;
/// use serde_json::json;
///
/// let body = json!({"_url": {"model": "models/m"}, "_query": {"pageSize": 5}, "x": 1});
/// let request = prepare_request("{model}:batchGenerateContent", body).unwrap();
/// assert_eq!(request.path, "models/m:batchGenerateContent?pageSize=5");
/// assert_eq!(request.body, json!({"x": 1}));
/// ```
pub fn prepare_request(template: &str, body: Value) -> Result<PreparedRequest, MapError> {
    let Value::Object(mut body) = body else {
        return Err(MapError::invalid(
            "body",
            format!("expected an object, got {body}"),
        ));
    };
    let url = body.shift_remove(URL_KEY);
    let mut path = format_map(template, url.as_ref())?;
    if let Some(query) = body.shift_remove(QUERY_KEY) {
        let Value::Object(query) = query else {
            return Err(MapError::invalid(
                QUERY_KEY,
                format!("expected an object, got {query}"),
            ));
        };
        if !query.is_empty() {
            path.push('?');
            path.push_str(&format_query(&query));
        }
    }
    tracing::trace!(%path, "prepared request");
    Ok(PreparedRequest {
        path,
        body: Value::Object(body),
    })
}

/// Replace each `{name}` in `template` with `values[name]`.
///
/// Strings are inserted verbatim; resource names keep their slashes.
pub fn format_map(template: &str, values: Option<&Value>) -> Result<String, MapError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| MapError::invalid("template", format!("unclosed `{{` in {template}")))?;
        let name = &after[..close];
        let value = values
            .and_then(|v| v.get(name))
            .filter(|v| !v.is_null())
            .ok_or_else(|| MapError::invalid(name, "missing value for URL placeholder"))?;
        match value {
            Value::String(s) => out.push_str(s),
            other => out.push_str(&other.to_string()),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// `key=value` pairs joined by `&`, both sides percent-encoded.
pub fn format_query(query: &Map<String, Value>) -> String {
    query
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| {
            let value = match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!(
                "{}={}",
                urlencoding::encode(k),
                urlencoding::encode(&value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
