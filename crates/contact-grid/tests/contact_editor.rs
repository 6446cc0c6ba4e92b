//! Integration tests for the contact form state.

use std::sync::Arc;

use contact_grid::contacts::{Address, Contact, ContactEditor, Email, Phone};
use contact_grid::prelude::*;
use parking_lot::Mutex;

fn ada() -> Contact {
    Contact {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        phones: vec![Phone::new("Home", "555-0100"), Phone::new("Work", "555-0199")],
        emails: vec![Email::new("Work", "ada@example.com")],
        addresses: vec![Address::new("Home", "12 St James's Square")],
    }
}

#[test]
fn test_edit_session() {
    let mut editor = ContactEditor::from_contact(&ada()).unwrap();

    // Add a phone through the placeholder row and fill it in
    let row = editor.add_phone();
    assert_eq!(row, 2);
    editor.phones().set_value_at("Mobile", row, 0).unwrap();
    editor.phones().set_value_at("555-0142", row, 1).unwrap();

    editor.remove_phone(0).unwrap();
    editor.remove_address(0).unwrap();
    editor.set_last_name("King");

    let contact = editor.commit().unwrap();
    assert_eq!(contact.last_name, "King");
    assert_eq!(
        contact.phones,
        vec![Phone::new("Work", "555-0199"), Phone::new("Mobile", "555-0142")]
    );
    assert!(contact.addresses.is_empty());
    assert_eq!(contact.emails, ada().emails);
}

#[test]
fn test_views_follow_each_table() {
    let mut editor = ContactEditor::new("Ada", "Lovelace");
    let events = Arc::new(Mutex::new(Vec::new()));

    let sink = events.clone();
    editor
        .emails()
        .signals()
        .connect(move |event| sink.lock().push(*event));

    editor.add_email();
    editor.add_phone();
    editor.load(&ada()).unwrap();

    assert_eq!(
        *events.lock(),
        vec![
            TableEvent::RowsInserted { first: 0, last: 0 },
            TableEvent::DataChanged,
        ]
    );
    assert_eq!(editor.emails().row_count(), 1);
}

#[test]
fn test_numeric_phone_edit_is_kept_as_text() {
    let editor = ContactEditor::new("Ada", "Lovelace");
    editor.add_phone();
    editor.phones().set_value_at(5550100i64, 0, 1).unwrap();

    let contact = editor.commit().unwrap();
    assert_eq!(contact.phones[0].number, "5550100");
}

#[test]
fn test_cleared_cell_blocks_commit() {
    let editor = ContactEditor::from_contact(&ada()).unwrap();
    editor.addresses().set_value_at(CellValue::None, 0, 1).unwrap();

    match editor.commit() {
        Err(ModelError::Conversion { row, column, field, .. }) => {
            assert_eq!((row, column, field), (0, 1, "address"));
        }
        other => panic!("expected conversion error, got {other:?}"),
    }
}

#[test]
fn test_contacts_as_a_table() {
    let model = RecordTableModel::from_records(&[ada(), Contact::new("Alan", "Turing")]).unwrap();

    assert_eq!(model.column_names(), vec!["first_name", "last_name"]);
    assert_eq!(model.value_at(1, 0), Ok(CellValue::from("Alan")));

    // Collections are not columns and come back empty
    assert!(model.record_at(0).unwrap().phones.is_empty());
}
