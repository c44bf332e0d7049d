//! Bind serde_json values onto `Any`-driver queries.

use serde_json::Value;
use sqlx::any::{Any, AnyArguments};
use sqlx::query::Query;

/// Bind one JSON value. Validation rejects objects and arrays before they
/// reach the storage layer, so anything else is stringified as a last resort.
pub fn bind_value<'q>(
    query: Query<'q, Any, AnyArguments<'q>>,
    value: &Value,
) -> Query<'q, Any, AnyArguments<'q>> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(b) => query.bind(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                query.bind(i)
            } else {
                query.bind(n.as_f64().unwrap_or(0.0))
            }
        }
        Value::String(s) => query.bind(s.clone()),
        other => query.bind(other.to_string()),
    }
}
