//! Randomized operation sequences checked against a plain `Vec` model.

use ntest::timeout;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use column_core::{Field, FieldError, FieldKey, FieldType, Value};

/// Reference behaviour of a PRIMARY KEY int column.
#[derive(Default)]
struct Model {
    rows: Vec<i64>,
}

impl Model {
    fn add(&mut self, v: i64) -> bool {
        if self.rows.contains(&v) {
            return false;
        }
        self.rows.push(v);
        true
    }

    fn modify(&mut self, position: usize, v: i64) -> bool {
        if self.rows.contains(&v) {
            return false;
        }
        self.rows[position] = v;
        true
    }
}

fn assert_matches(field: &Field, model: &Model) {
    let expected: Vec<Option<Value>> = model.rows.iter().map(|v| Some(Value::Int(*v))).collect();
    assert_eq!(field.values(), expected.as_slice());
    assert_eq!(field.length(), model.rows.len());
}

#[timeout(5000)]
#[test]
fn test_primary_column_matches_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut field = Field::new(FieldType::Int, FieldKey::Primary, None).unwrap();
    let mut model = Model::default();

    for _ in 0..2_000 {
        let v = rng.gen_range(0..64);
        match rng.gen_range(0..4) {
            0 | 1 => {
                let accepted = model.add(v);
                let result = field.add(Some(Value::Int(v)));
                assert_eq!(result.is_ok(), accepted, "add({v})");
                if !accepted {
                    assert!(matches!(result, Err(FieldError::Duplicate { .. })));
                }
            }
            2 if !model.rows.is_empty() => {
                let position = rng.gen_range(0..model.rows.len());
                model.rows.remove(position);
                field.delete(position as isize).unwrap();
            }
            3 if !model.rows.is_empty() => {
                let position = rng.gen_range(0..model.rows.len());
                let accepted = model.modify(position, v);
                let result = field.modify(position as isize, Some(Value::Int(v)));
                assert_eq!(result.is_ok(), accepted, "modify({position}, {v})");
            }
            _ => {
                assert!(field.delete(0).is_err());
            }
        }
        assert_matches(&field, &model);
    }

    let restored = Field::deserialized(&field.serialized().unwrap()).unwrap();
    assert_eq!(restored, field);
}

#[timeout(5000)]
#[test]
fn test_rejected_values_never_change_length() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut field = Field::new(FieldType::Varchar, FieldKey::NotNull, None).unwrap();

    for i in 0..500 {
        let before = field.length();
        let candidate = match rng.gen_range(0..4) {
            0 => None,
            1 => Some(Value::Int(i)),
            2 => Some(Value::Bool(i % 2 == 0)),
            _ => Some(Value::from(format!("row-{i}"))),
        };
        let is_text = matches!(candidate, Some(Value::Str(_)));

        match field.add(candidate) {
            Ok(()) => {
                assert!(is_text);
                assert_eq!(field.length(), before + 1);
            }
            Err(_) => {
                assert!(!is_text);
                assert_eq!(field.length(), before);
            }
        }
    }
}
