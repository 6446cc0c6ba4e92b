//! Core systems for Contact Grid.
//!
//! This crate provides the foundational pieces the table models are built on:
//!
//! - **Cell values**: [`CellValue`] and the static [`ValueType`] of a column
//! - **Record descriptors**: the [`Record`] trait and its static
//!   [`FieldDescriptor`] list, usually generated by `#[derive(Record)]`
//! - **Field coercion**: [`FieldValue`] converts scalar fields to and from cells
//! - **Signal/Slot System**: [`Signal`] for synchronous change notification
//! - **Logging**: `tracing` targets and a grid debug renderer
//!
//! # Signal/Slot Example
//!
//! ```
//! use contact_grid_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod error;
pub mod logging;
pub mod record;
pub mod signal;
pub mod value;

pub use error::{CoercionError, CoercionResult};
pub use record::{FieldDescriptor, FieldError, FieldValue, Record};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use value::{CellValue, ValueKind, ValueType};
