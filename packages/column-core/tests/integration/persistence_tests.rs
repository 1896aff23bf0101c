//! Persistence integration tests.
//!
//! The column only produces and consumes text; these tests store that text
//! in files the way an owning table layer would.

use ntest::timeout;
use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

use column_core::types::TypeRegistry;
use column_core::{Field, FieldConfig, FieldError, FieldKey, FieldType, IndexPolicy, Value};

fn scores() -> Field {
    let mut field =
        Field::new(FieldType::Float, FieldKey::NotNull, Some(Value::Float(0.0))).unwrap();
    for score in [9.5, 7.25, 8.0] {
        field.add(Some(Value::Float(score))).unwrap();
    }
    field.add(None).unwrap();
    field
}

/// Round trip through a file on disk
#[timeout(1000)]
#[test]
fn test_column_file_round_trip() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("scores.json");

    let field = scores();
    fs::write(&path, field.serialized().unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"NOT NULL\""));
    assert!(content.contains("\"float\""));

    let restored = Field::deserialized(&content).unwrap();
    assert_eq!(restored.get_type(), FieldType::Float);
    assert_eq!(restored.get_keys(), field.get_keys());
    assert_eq!(restored.get_default(), Some(&Value::Float(0.0)));
    assert_eq!(restored.values(), field.values());
    assert_eq!(restored.length(), 4);
}

/// Hand-edited files that break their own constraints are refused
#[timeout(1000)]
#[test]
fn test_corrupt_column_file_rejected() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("ids.json");

    let mut field =
        Field::new(FieldType::Int, [FieldKey::Primary, FieldKey::Increment], None).unwrap();
    field.add(None).unwrap();
    field.add(None).unwrap();

    let edited = field.serialized().unwrap().replace("[1,2]", "[1,1]");
    fs::write(&path, edited).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(matches!(
        Field::deserialized(&content),
        Err(FieldError::Duplicate { .. })
    ));

    fs::write(&path, "{\"key\": [\"NOT NULL\"], \"type\": \"int\", \"values\": [\"1\"]}").unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(matches!(
        Field::deserialized(&content),
        Err(FieldError::TypeMismatch { .. })
    ));

    fs::write(&path, "not json").unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(matches!(
        Field::deserialized(&content),
        Err(FieldError::Serialization(_))
    ));
}

/// Several columns persisted as one document
#[timeout(1000)]
#[test]
fn test_table_document_round_trip() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("table.json");

    let mut names = Field::new(FieldType::Varchar, FieldKey::Unique, None).unwrap();
    names.add(Some(Value::from("north"))).unwrap();
    names.add(Some(Value::from("south"))).unwrap();

    let mut columns = BTreeMap::new();
    columns.insert("name".to_string(), names);
    columns.insert("score".to_string(), scores());

    fs::write(&path, serde_json::to_string_pretty(&columns).unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let restored: BTreeMap<String, Field> = serde_json::from_str(&content).unwrap();
    assert_eq!(restored, columns);
}

/// Restoring with a non-default config keeps the rows and applies the config
#[timeout(1000)]
#[test]
fn test_deserialize_with_config() {
    let text = scores().serialized().unwrap();
    let config = FieldConfig {
        index_policy: IndexPolicy::Legacy,
        ..Default::default()
    };

    let restored =
        Field::deserialized_with(&text, config.clone(), TypeRegistry::builtin()).unwrap();
    assert_eq!(restored.config(), &config);
    assert!(restored.get(-4).is_err());
    assert_eq!(restored.get(-3).unwrap(), Some(&Value::Float(7.25)));

    let empty = Arc::new(TypeRegistry::new());
    assert_eq!(
        Field::deserialized_with(&text, FieldConfig::default(), empty).unwrap_err(),
        FieldError::UnknownType {
            ty: FieldType::Float
        }
    );
}
