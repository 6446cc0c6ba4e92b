//! Prelude module for Contact Grid.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use contact_grid::prelude::*;
//! ```
//!
//! This provides access to:
//! - Record descriptors (`Record`, `FieldValue`, and the derive macro)
//! - Cell values (`CellValue`, `ValueType`, `ValueKind`)
//! - Table models (`RecordTableModel`, `GridModel`, `TableEvent`)
//! - Errors (`ModelError`, `ModelResult`, `CoercionError`)

// ============================================================================
// Records and Values
// ============================================================================

// `Record` names both the trait and, with the `derive` feature, the derive macro.
pub use crate::{CellValue, FieldValue, Record, ValueKind, ValueType};

// ============================================================================
// Signals
// ============================================================================

pub use crate::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Table Models
// ============================================================================

pub use crate::model::{
    Column, GridModel, RecordTableModel, RecordTableModelBuilder, TableEvent, TableListener,
    TableSignals,
};

// ============================================================================
// Errors
// ============================================================================

pub use crate::CoercionError;
pub use crate::model::{ModelError, ModelResult};
