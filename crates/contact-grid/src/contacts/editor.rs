//! Editing session for a single contact.

use contact_grid_core::logging::targets;

use super::records::{Address, Contact, Email, Phone};
use crate::model::{ModelResult, RecordTableModel};

/// The state behind a contact form.
///
/// The editor owns one table model per collection. Views bind to
/// [`phones`](Self::phones), [`emails`](Self::emails) and
/// [`addresses`](Self::addresses) and edit cells in place;
/// [`commit`](Self::commit) turns the edited tables back into a [`Contact`].
///
/// # Example
///
/// ```ignore
/// use contact_grid::contacts::ContactEditor;
///
/// let mut editor = ContactEditor::new("Ada", "Lovelace");
/// let row = editor.add_phone();
/// editor.phones().set_value_at("555-0100", row, 1)?;
///
/// let contact = editor.commit()?;
/// assert_eq!(contact.phones[0].number, "555-0100");
/// ```
#[derive(Debug)]
pub struct ContactEditor {
    first_name: String,
    last_name: String,
    phones: RecordTableModel<Phone>,
    emails: RecordTableModel<Email>,
    addresses: RecordTableModel<Address>,
}

impl Default for ContactEditor {
    fn default() -> Self {
        Self::new("", "")
    }
}

impl ContactEditor {
    /// Starts editing a blank contact.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phones: RecordTableModel::new(),
            emails: RecordTableModel::new(),
            addresses: RecordTableModel::new(),
        }
    }

    /// Starts editing an existing contact.
    pub fn from_contact(contact: &Contact) -> ModelResult<Self> {
        let mut editor = Self::default();
        editor.load(contact)?;
        Ok(editor)
    }

    /// Replaces the editor state with `contact`.
    ///
    /// All three tables are converted before any of them is replaced, so a
    /// failed load leaves the editor unchanged. On success each table emits
    /// one `DataChanged`; existing subscriptions are kept.
    pub fn load(&mut self, contact: &Contact) -> ModelResult<()> {
        let phones = self.phones.prepare_rows(&contact.phones)?;
        let emails = self.emails.prepare_rows(&contact.emails)?;
        let addresses = self.addresses.prepare_rows(&contact.addresses)?;

        self.phones.install_rows(phones);
        self.emails.install_rows(emails);
        self.addresses.install_rows(addresses);
        self.first_name.clone_from(&contact.first_name);
        self.last_name.clone_from(&contact.last_name);

        tracing::debug!(
            target: targets::CONTACTS,
            phones = contact.phones.len(),
            emails = contact.emails.len(),
            addresses = contact.addresses.len(),
            "loaded contact"
        );
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// The phone table.
    pub fn phones(&self) -> &RecordTableModel<Phone> {
        &self.phones
    }

    /// The e-mail table.
    pub fn emails(&self) -> &RecordTableModel<Email> {
        &self.emails
    }

    /// The address table.
    pub fn addresses(&self) -> &RecordTableModel<Address> {
        &self.addresses
    }

    /// Appends a placeholder phone row and returns its index.
    pub fn add_phone(&self) -> usize {
        self.phones.add_default_row()
    }

    /// Appends a placeholder e-mail row and returns its index.
    pub fn add_email(&self) -> usize {
        self.emails.add_default_row()
    }

    /// Appends a placeholder address row and returns its index.
    pub fn add_address(&self) -> usize {
        self.addresses.add_default_row()
    }

    pub fn remove_phone(&self, index: usize) -> ModelResult<()> {
        self.phones.remove_row(index).map(drop)
    }

    pub fn remove_email(&self, index: usize) -> ModelResult<()> {
        self.emails.remove_row(index).map(drop)
    }

    pub fn remove_address(&self, index: usize) -> ModelResult<()> {
        self.addresses.remove_row(index).map(drop)
    }

    /// Builds a contact from the current name and table contents.
    ///
    /// Fails if an edited cell cannot be converted back into its field.
    pub fn commit(&self) -> ModelResult<Contact> {
        let contact = Contact {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phones: self.phones.data_model()?,
            emails: self.emails.data_model()?,
            addresses: self.addresses.data_model()?,
        };
        tracing::debug!(target: targets::CONTACTS, name = %contact.full_name(), "committed contact");
        Ok(contact)
    }

    /// Empties the name and all three tables.
    pub fn clear(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
        self.phones.clear();
        self.emails.clear();
        self.addresses.clear();
    }
}
