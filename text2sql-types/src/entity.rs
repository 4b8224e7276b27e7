use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entity labels the upstream NLU step may attach to a request. Labels we
/// do not recognize deserialize as `Unknown` and are skipped during merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    TableName,
    TableDescription,
    TableSchema,
    #[serde(other)]
    Unknown,
}

/// A typed key-value extraction supplied by the caller. `value` is left as
/// raw JSON because `table_schema` carries an object while the other types
/// carry strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    #[serde(default)]
    pub value: Option<Value>,
}

/// Table details accumulated from the entity list. Merge rule: last-seen
/// entity per type wins, in payload order; entities with a missing or
/// wrongly-shaped value leave the field untouched so handler-level defaults
/// apply.
#[derive(Debug, Clone, Default)]
pub struct TableDetails {
    pub table_name: Option<String>,
    pub table_description: Option<String>,
    pub table_schema: Option<Map<String, Value>>,
}

impl TableDetails {
    pub fn from_entities(entities: &[Entity]) -> Self {
        let mut details = TableDetails::default();
        for entity in entities {
            match entity.entity_type {
                EntityType::TableName => {
                    if let Some(name) = entity.value.as_ref().and_then(Value::as_str) {
                        details.table_name = Some(name.to_string());
                    }
                }
                EntityType::TableDescription => {
                    if let Some(desc) = entity.value.as_ref().and_then(Value::as_str) {
                        details.table_description = Some(desc.to_string());
                    }
                }
                EntityType::TableSchema => {
                    if let Some(schema) = entity.value.as_ref().and_then(Value::as_object) {
                        details.table_schema = Some(schema.clone());
                    }
                }
                EntityType::Unknown => {}
            }
        }
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(entity_type: EntityType, value: Value) -> Entity {
        Entity {
            entity_type,
            value: Some(value),
        }
    }

    #[test]
    fn merges_each_entity_type() {
        let entities = vec![
            entity(EntityType::TableName, json!("orders")),
            entity(EntityType::TableDescription, json!("order history")),
            entity(EntityType::TableSchema, json!({"id": "INTEGER"})),
        ];
        let details = TableDetails::from_entities(&entities);
        assert_eq!(details.table_name.as_deref(), Some("orders"));
        assert_eq!(details.table_description.as_deref(), Some("order history"));
        assert_eq!(
            details.table_schema.unwrap().get("id"),
            Some(&json!("INTEGER"))
        );
    }

    #[test]
    fn last_entity_per_type_wins() {
        let entities = vec![
            entity(EntityType::TableName, json!("orders")),
            entity(EntityType::TableName, json!("customers")),
        ];
        let details = TableDetails::from_entities(&entities);
        assert_eq!(details.table_name.as_deref(), Some("customers"));
    }

    #[test]
    fn ignores_unknown_types_and_bad_shapes() {
        let entities = vec![
            entity(EntityType::Unknown, json!("whatever")),
            entity(EntityType::TableName, json!(42)),
            Entity {
                entity_type: EntityType::TableDescription,
                value: None,
            },
        ];
        let details = TableDetails::from_entities(&entities);
        assert!(details.table_name.is_none());
        assert!(details.table_description.is_none());
        assert!(details.table_schema.is_none());
    }

    #[test]
    fn unrecognized_label_deserializes_as_unknown() {
        let entity: Entity =
            serde_json::from_value(json!({"type": "column_hint", "value": "x"})).unwrap();
        assert_eq!(entity.entity_type, EntityType::Unknown);
    }

    #[test]
    fn schema_entity_preserves_column_order() {
        let entity: Entity = serde_json::from_value(json!({
            "type": "table_schema",
            "value": {"zeta": "TEXT", "alpha": "TEXT", "mid": "TEXT"}
        }))
        .unwrap();
        let details = TableDetails::from_entities(&[entity]);
        let keys: Vec<&String> = details.table_schema.as_ref().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
