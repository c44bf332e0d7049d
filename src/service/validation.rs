//! Create-payload validation against the schema table. Runs before any
//! insert so malformed payloads never reach the storage layer.

use crate::catalog::{ColumnSpec, EntitySchema, FieldFormat, FieldType};
use crate::error::AppError;
use serde_json::Value;
use std::collections::HashMap;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a flat field map: no unknown fields, all required fields
    /// present, JSON types matching the schema.
    pub fn validate(
        body: &HashMap<String, Value>,
        schema: &EntitySchema,
    ) -> Result<(), AppError> {
        for key in body.keys() {
            if schema.column(key).is_none() {
                return Err(AppError::Validation(format!("unexpected field '{}'", key)));
            }
        }
        for col in schema.columns {
            let val = body.get(col.name);
            if col.required && (val.is_none() || val == Some(&Value::Null)) {
                return Err(AppError::Validation(format!("{} is required", col.name)));
            }
            if let Some(v) = val {
                validate_field(col, v)?;
            }
        }
        Ok(())
    }
}

fn validate_field(col: &ColumnSpec, v: &Value) -> Result<(), AppError> {
    if v.is_null() {
        return Ok(());
    }
    match col.ty {
        FieldType::Text => match v.as_str() {
            Some(s) => {
                if col.format == Some(FieldFormat::Email) && (!s.contains('@') || s.len() < 3) {
                    return Err(AppError::Validation(format!(
                        "{} must be a valid email",
                        col.name
                    )));
                }
            }
            None => {
                return Err(AppError::Validation(format!("{} must be a string", col.name)));
            }
        },
        FieldType::Boolean => {
            if !v.is_boolean() {
                return Err(AppError::Validation(format!(
                    "{} must be a boolean",
                    col.name
                )));
            }
        }
    }
    Ok(())
}
