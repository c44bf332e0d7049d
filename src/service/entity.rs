//! Generic entity execution over the schema table.

use crate::catalog::{ColumnSpec, EntityKind, EntitySchema, FieldType};
use crate::error::AppError;
use crate::sql::{bind_value, insert, select_all, select_by_id, select_summary};
use serde_json::{Map, Value};
use sqlx::any::AnyRow;
use sqlx::{AnyPool, Row};
use std::collections::HashMap;

pub struct EntityService;

impl EntityService {
    /// Summary listing: one `{id, name}` record per row.
    pub async fn list(pool: &AnyPool, kind: EntityKind) -> Result<Vec<Value>, AppError> {
        let sql = select_summary(kind.schema());
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(pool).await?;
        rows.iter().map(summary_to_json).collect()
    }

    /// Full listing: every non-sensitive column per row.
    pub async fn list_full(pool: &AnyPool, kind: EntityKind) -> Result<Vec<Value>, AppError> {
        let schema = kind.schema();
        let sql = select_all(schema);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(pool).await?;
        rows.iter().map(|r| row_to_json(r, schema)).collect()
    }

    /// One row by id, fully serialized.
    pub async fn read(pool: &AnyPool, kind: EntityKind, id: i64) -> Result<Value, AppError> {
        let schema = kind.schema();
        let sql = select_by_id(schema);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
        match row {
            Some(r) => row_to_json(&r, schema),
            None => Err(AppError::NotFound(format!("{} not found", kind.display()))),
        }
    }

    /// Insert one row from a validated field map; returns the generated id.
    /// Unique-column collisions (user email/username) surface as Conflict.
    pub async fn create(
        pool: &AnyPool,
        kind: EntityKind,
        body: &HashMap<String, Value>,
    ) -> Result<i64, AppError> {
        let q = insert(kind.schema(), body);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = bind_value(query, p);
        }
        let row = query
            .fetch_one(pool)
            .await
            .map_err(|e| super::conflict_on_unique(e, format!("{} already exists", kind.display())))?;
        let id: i64 = row.try_get(0)?;
        Ok(id)
    }
}

fn summary_to_json(row: &AnyRow) -> Result<Value, AppError> {
    let id: i64 = row.try_get("id")?;
    let name: Option<String> = row.try_get("name")?;
    Ok(serde_json::json!({ "id": id, "name": name }))
}

/// Serialize one row per the schema: id plus every non-sensitive column.
fn row_to_json(row: &AnyRow, schema: &EntitySchema) -> Result<Value, AppError> {
    let mut map = Map::new();
    let id: i64 = row.try_get("id")?;
    map.insert("id".to_string(), Value::Number(id.into()));
    for col in schema.select_columns() {
        map.insert(col.name.to_string(), cell_to_value(row, col)?);
    }
    Ok(Value::Object(map))
}

/// Decode one cell by its declared type. Booleans tolerate integer-backed
/// storage (SQLite represents them as 0/1).
fn cell_to_value(row: &AnyRow, col: &ColumnSpec) -> Result<Value, AppError> {
    match col.ty {
        FieldType::Text => {
            let v: Option<String> = row.try_get(col.name)?;
            Ok(v.map(Value::String).unwrap_or(Value::Null))
        }
        FieldType::Boolean => {
            if let Ok(b) = row.try_get::<bool, _>(col.name) {
                return Ok(Value::Bool(b));
            }
            let n: Option<i64> = row.try_get(col.name)?;
            Ok(n.map(|n| Value::Bool(n != 0)).unwrap_or(Value::Null))
        }
    }
}
