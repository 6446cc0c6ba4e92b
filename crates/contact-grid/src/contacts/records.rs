//! Contact record types.

use contact_grid_macros::Record;

/// A phone number with its kind ("Home", "Work", ...).
#[derive(Record, Clone, Debug, Default, PartialEq, Eq)]
#[record(placeholder = "Phone::placeholder_entry")]
pub struct Phone {
    #[record(rename = "type")]
    pub kind: String,
    pub number: String,
}

impl Phone {
    /// Creates a phone entry.
    pub fn new(kind: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            number: number.into(),
        }
    }

    fn placeholder_entry() -> Self {
        Self::new("Home", "00000000")
    }
}

/// An e-mail address with its kind.
#[derive(Record, Clone, Debug, Default, PartialEq, Eq)]
#[record(placeholder = "Email::placeholder_entry")]
pub struct Email {
    #[record(rename = "type")]
    pub kind: String,
    pub address: String,
}

impl Email {
    /// Creates an e-mail entry.
    pub fn new(kind: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            address: address.into(),
        }
    }

    fn placeholder_entry() -> Self {
        Self::new("Home", "name@example.com")
    }
}

/// A postal address with its kind.
#[derive(Record, Clone, Debug, Default, PartialEq, Eq)]
#[record(placeholder = "Address::placeholder_entry")]
pub struct Address {
    #[record(rename = "type")]
    pub kind: String,
    pub address: String,
}

impl Address {
    /// Creates an address entry.
    pub fn new(kind: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            address: address.into(),
        }
    }

    fn placeholder_entry() -> Self {
        Self::new("Home", "00000000")
    }
}

/// A contact: a name plus any number of phones, e-mails and addresses.
///
/// As a table row a contact has two columns; the collections are edited
/// through their own tables.
#[derive(Record, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    #[record(skip)]
    pub phones: Vec<Phone>,
    #[record(skip)]
    pub emails: Vec<Email>,
    #[record(skip)]
    pub addresses: Vec<Address>,
}

impl Contact {
    /// Creates a contact with no phones, e-mails or addresses.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// `"first last"`, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
