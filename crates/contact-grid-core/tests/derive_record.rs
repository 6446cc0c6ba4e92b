//! Integration tests for the #[derive(Record)] macro.

use contact_grid_core::{CellValue, CoercionError, FieldValue, Record, ValueKind, ValueType};
use contact_grid_macros::Record;

// Basic record with a renamed column
#[derive(Record, Clone, Debug, Default, PartialEq)]
struct TestAddress {
    #[record(rename = "type")]
    kind: String,
    address: String,
}

// Mixed scalar types
#[derive(Record, Clone, Debug, Default, PartialEq)]
struct TestItem {
    name: String,
    quantity: u32,
    price: f64,
    in_stock: bool,
    note: Option<String>,
}

// Skipped fields do not become columns
#[derive(Record, Clone, Debug, Default, PartialEq)]
#[record(placeholder = "TestPerson::blank")]
struct TestPerson {
    first_name: String,
    #[record(skip)]
    tags: Vec<String>,
    last_name: String,
}

impl TestPerson {
    fn blank() -> Self {
        Self {
            first_name: "First".into(),
            tags: Vec::new(),
            last_name: "Last".into(),
        }
    }
}

// Raw identifiers lose their prefix in the column name
#[derive(Record, Clone, Debug, Default, PartialEq)]
struct TestRaw {
    r#type: String,
}

// ============= Tests =============

#[test]
fn test_fields_in_declaration_order() {
    let names: Vec<&str> = TestItem::fields().iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["name", "quantity", "price", "in_stock", "note"]);
}

#[test]
fn test_rename_sets_header_only() {
    let fields = TestAddress::fields();
    assert_eq!(fields[0].name, "kind");
    assert_eq!(fields[0].header, "type");
    assert_eq!(fields[1].name, "address");
    assert_eq!(fields[1].header, "address");
}

#[test]
fn test_value_types_come_from_field_types() {
    let types: Vec<ValueType> = TestItem::fields().iter().map(|f| f.value_type).collect();
    assert_eq!(
        types,
        vec![
            ValueType::TEXT,
            ValueType::INTEGER,
            ValueType::FLOAT,
            ValueType::BOOLEAN,
            ValueType::TEXT.into_optional(),
        ]
    );
    assert_eq!(<Option<String> as FieldValue>::VALUE_TYPE.kind, ValueKind::Text);
}

#[test]
fn test_record_name() {
    assert_eq!(TestAddress::record_name(), "TestAddress");
    assert_eq!(TestPerson::record_name(), "TestPerson");
}

#[test]
fn test_generated_accessors_round_trip() {
    let item = TestItem {
        name: "Widget".into(),
        quantity: 3,
        price: 2.5,
        in_stock: true,
        note: None,
    };

    let row = item.to_row();
    assert_eq!(
        row,
        vec![
            CellValue::from("Widget"),
            CellValue::Int(3),
            CellValue::Float(2.5),
            CellValue::Bool(true),
            CellValue::None,
        ]
    );
    assert_eq!(TestItem::from_row(&row).unwrap(), item);
}

#[test]
fn test_setters_coerce_text() {
    let row = vec![
        CellValue::from("Widget"),
        CellValue::from("12"),
        CellValue::from("0.5"),
        CellValue::from("false"),
        CellValue::from("fragile"),
    ];
    let item = TestItem::from_row(&row).unwrap();
    assert_eq!(item.quantity, 12);
    assert_eq!(item.price, 0.5);
    assert!(!item.in_stock);
    assert_eq!(item.note.as_deref(), Some("fragile"));
}

#[test]
fn test_setter_failure_names_field() {
    let row = vec![
        CellValue::from("Widget"),
        CellValue::from("lots"),
        CellValue::Float(1.0),
        CellValue::Bool(true),
        CellValue::None,
    ];
    let err = TestItem::from_row(&row).unwrap_err();
    assert_eq!(err.column, 1);
    assert_eq!(err.field, "quantity");
    assert_eq!(
        err.source,
        CoercionError::Parse {
            expected: ValueKind::Integer,
            input: "lots".into()
        }
    );
}

#[test]
fn test_skip_and_placeholder() {
    let fields = TestPerson::fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].name, "last_name");

    let person = TestPerson::from_row(&[CellValue::from("Ada"), CellValue::from("Lovelace")]).unwrap();
    assert!(person.tags.is_empty());
    assert_eq!(person.last_name, "Lovelace");

    assert_eq!(TestPerson::placeholder().to_row(), vec![CellValue::from("First"), CellValue::from("Last")]);
    assert_eq!(TestAddress::placeholder(), TestAddress::default());
}

#[test]
fn test_raw_identifier_column() {
    assert_eq!(TestRaw::fields()[0].name, "type");
    assert_eq!(TestRaw::fields()[0].header, "type");
}
