//! Contact records and the contact form state.
//!
//! A contact is a name plus three collections (phones, e-mails, addresses).
//! Each collection is edited as its own table through a
//! [`RecordTableModel`](crate::model::RecordTableModel); [`ContactEditor`]
//! ties the three tables and the name together.

mod editor;
mod records;

pub use editor::ContactEditor;
pub use records::{Address, Contact, Email, Phone};

static_assertions::assert_impl_all!(ContactEditor: Send, Sync);
static_assertions::assert_impl_all!(crate::model::RecordTableModel<Address>: Send, Sync);
