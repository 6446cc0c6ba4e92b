//! Walks through a contact form session and prints every table event.
//!
//! Run with `RUST_LOG=contact_grid=debug` to see the model's log output.

use contact_grid::contacts::{Address, Contact, ContactEditor, Phone};
use contact_grid::prelude::*;

fn main() -> Result<(), ModelError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let contact = Contact {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        phones: vec![Phone::new("Home", "555-0100")],
        addresses: vec![Address::new("Home", "123 St")],
        ..Contact::default()
    };

    let mut editor = ContactEditor::new("", "");
    editor
        .addresses()
        .signals()
        .connect(|event| println!("addresses: {event:?}"));
    editor.load(&contact)?;

    let row = editor.add_address();
    editor.addresses().set_value_at("Work", row, 0)?;
    editor.addresses().set_value_at("456 Ave", row, 1)?;
    editor.remove_address(0)?;

    println!("{}", editor.addresses().debug_table());

    let saved = editor.commit()?;
    println!("saved {} with {} address(es)", saved.full_name(), saved.addresses.len());
    Ok(())
}
