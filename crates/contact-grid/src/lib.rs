//! Contact Grid - Record-backed table models with change notification.
//!
//! This is the main umbrella crate that re-exports all public APIs.
//!
//! # Example
//!
//! ```ignore
//! use contact_grid::prelude::*;
//! use contact_grid::contacts::Address;
//!
//! fn main() -> Result<(), ModelError> {
//!     let model = RecordTableModel::from_records(&[Address::new("Home", "123 St")])?;
//!     model.signals().connect(|event| println!("{event:?}"));
//!
//!     model.add_row(vec!["Work".into(), "456 Ave".into()])?;
//!     model.remove_row(0)?;
//!     println!("{}", model.debug_table());
//!     Ok(())
//! }
//! ```

pub use contact_grid_core::*;
#[cfg(feature = "derive")]
pub use contact_grid_macros::*;

#[cfg(feature = "derive")]
pub mod contacts;
pub mod model;
pub mod prelude;
