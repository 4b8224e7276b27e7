use crate::error::ApiError;
use serde_json::{Map, Value};

/// Fallback column mapping used when the request supplies no table schema.
pub fn default_table_schema() -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert(
        "id".to_string(),
        Value::String("INTEGER NOT NULL AUTO_INCREMENT PRIMARY KEY".to_string()),
    );
    schema.insert(
        "name".to_string(),
        Value::String("VARCHAR(255) NOT NULL".to_string()),
    );
    schema.insert("description".to_string(), Value::String("TEXT".to_string()));
    schema.insert(
        "created_at".to_string(),
        Value::String("DATETIME DEFAULT CURRENT_TIMESTAMP".to_string()),
    );
    schema
}

/// Synthesize a `CREATE TABLE IF NOT EXISTS` statement from a column
/// mapping, one clause per entry in mapping order. Every value must be a
/// string or the whole request fails before the database is touched.
///
/// The table name and column definitions are interpolated without quoting
/// or identifier escaping, matching the upstream wire contract.
pub fn build_create_table(
    table_name: &str,
    schema: &Map<String, Value>,
) -> Result<String, ApiError> {
    if schema.is_empty() {
        return Err(ApiError::Validation(
            "Table schema must contain at least one column".to_string(),
        ));
    }

    let mut columns_definition = Vec::with_capacity(schema.len());
    for (col_name, col_dtype) in schema {
        match col_dtype.as_str() {
            Some(dtype) => columns_definition.push(format!("{} {}", col_name, dtype)),
            None => {
                return Err(ApiError::Validation(format!(
                    "Invalid column format for {}: {}",
                    col_name, col_dtype
                )))
            }
        }
    }

    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {} ({});",
        table_name,
        columns_definition.join(", ")
    ))
}
