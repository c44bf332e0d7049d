//! Builds parameterized INSERT and SELECT statements from the schema table.
//! Placeholders are `$1..$n` in appearance order, which both PostgreSQL and
//! SQLite accept, so one builder serves either backend. Identifiers come
//! from the static schema and need no quoting.

use crate::catalog::EntitySchema;
use serde_json::Value;
use std::collections::HashMap;

/// SQL text plus positional parameters.
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

fn select_column_list(schema: &EntitySchema) -> String {
    schema
        .select_columns()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary listing: `{id, name}` rows, `name` aliased from the schema's
/// summary column.
pub fn select_summary(schema: &EntitySchema) -> String {
    if schema.summary_column == "name" {
        format!("SELECT id, name FROM {} ORDER BY id", schema.table)
    } else {
        format!(
            "SELECT id, {} AS name FROM {} ORDER BY id",
            schema.summary_column, schema.table
        )
    }
}

/// Full listing: id plus every non-sensitive column.
pub fn select_all(schema: &EntitySchema) -> String {
    format!(
        "SELECT id, {} FROM {} ORDER BY id",
        select_column_list(schema),
        schema.table
    )
}

/// One row by primary key. Caller binds the id as the sole parameter.
pub fn select_by_id(schema: &EntitySchema) -> String {
    format!(
        "SELECT id, {} FROM {} WHERE id = $1",
        select_column_list(schema),
        schema.table
    )
}

/// INSERT of the body's columns in schema order, RETURNING the generated id.
/// Columns absent from the body are left to their storage defaults.
pub fn insert(schema: &EntitySchema, body: &HashMap<String, Value>) -> QueryBuf {
    let mut columns = Vec::new();
    let mut params = Vec::new();
    for col in schema.columns {
        if let Some(v) = body.get(col.name) {
            columns.push(col.name);
            params.push(v.clone());
        }
    }
    let placeholders: Vec<String> = (1..=params.len()).map(|n| format!("${}", n)).collect();
    QueryBuf {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
            schema.table,
            columns.join(", "),
            placeholders.join(", ")
        ),
        params,
    }
}
