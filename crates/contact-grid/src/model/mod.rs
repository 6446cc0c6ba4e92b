//! Table models backed by typed records.
//!
//! A table model exposes a list of records as rows and the record's fields as
//! columns, and tells its views what changed after every mutation.
//!
//! # Core Types
//!
//! - `RecordTableModel<T>`: The row store for records of type `T`
//! - `Column`: One derived column (field name, header, value type)
//! - `TableEvent`: The change notification kinds
//! - `TableSignals`: The notification channel views subscribe to
//! - `GridModel`: The object-safe contract a grid view consumes
//! - `ModelError`: Why a model operation was rejected
//!
//! # Example
//!
//! ```ignore
//! use contact_grid::model::{GridModel, RecordTableModel, TableEvent};
//! use contact_grid::contacts::Phone;
//!
//! let model = RecordTableModel::<Phone>::new();
//! model.signals().connect(|event| {
//!     if let TableEvent::RowsInserted { first, .. } = event {
//!         println!("row {first} added");
//!     }
//! });
//! model.add_default_row();
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────────┐  TableEvent  ┌──────────────┐
//! │ RecordTableModel │─────────────>│ TableSignals │──> views
//! └──────────────────┘              └──────────────┘
//!        ^    │
//!   records   │ rows of CellValue
//!        │    v
//!   ┌──────────────┐
//!   │ Record (T)   │  static FieldDescriptor list
//!   └──────────────┘
//! ```
//!
//! Views re-query dimensions and cells after every event.

mod error;
mod record_model;
mod traits;

pub use error::{ModelError, ModelResult};
pub use record_model::{Column, RecordTableModel, RecordTableModelBuilder};
pub use traits::{GridModel, TableEvent, TableListener, TableSignals};
