//! Core traits for the table model/view contract.
//!
//! A view needs three things from a model: its dimensions, cell access by
//! (row, column), and notifications telling it what to re-query. This module
//! defines the notification kinds ([`TableEvent`]), the notification channel
//! ([`TableSignals`]) and the read/write contract ([`GridModel`]).

use std::sync::Arc;

use contact_grid_core::logging::targets;
use contact_grid_core::{CellValue, ConnectionGuard, ConnectionId, Signal, ValueType};

/// A change notification emitted by a table model.
///
/// Row ranges are inclusive. After receiving any event, a view must re-query
/// `row_count`, `column_count` and cell data instead of relying on cached
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableEvent {
    /// The whole row store was replaced.
    DataChanged,
    /// A single cell was overwritten.
    CellUpdated { row: usize, column: usize },
    /// Rows `first..=last` were inserted.
    RowsInserted { first: usize, last: usize },
    /// Rows `first..=last` were removed.
    RowsDeleted { first: usize, last: usize },
    /// The column set was (re)derived; headers must be redrawn.
    StructureChanged,
}

/// Receiver of table notifications.
///
/// Implemented for every `Fn(&TableEvent)` closure, so both closures and
/// dedicated view types can subscribe.
pub trait TableListener: Send + Sync {
    /// Called synchronously for every event the model emits.
    fn table_changed(&self, event: &TableEvent);
}

impl<F> TableListener for F
where
    F: Fn(&TableEvent) + Send + Sync,
{
    fn table_changed(&self, event: &TableEvent) {
        self(event)
    }
}

/// The notification channel of a table model.
///
/// Views subscribe here; the model is the only emitter.
pub struct TableSignals {
    changed: Signal<TableEvent>,
}

impl Default for TableSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSignals {
    /// Creates a channel with no subscribers.
    pub fn new() -> Self {
        Self {
            changed: Signal::new(),
        }
    }

    /// Connects a closure to every table event.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&TableEvent) + Send + Sync + 'static,
    {
        self.changed.connect(slot)
    }

    /// Connects a closure that is disconnected when the guard drops.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, TableEvent>
    where
        F: Fn(&TableEvent) + Send + Sync + 'static,
    {
        self.changed.connect_scoped(slot)
    }

    /// Subscribes a listener object.
    pub fn subscribe(&self, listener: Arc<dyn TableListener>) -> ConnectionId {
        self.changed
            .connect(move |event: &TableEvent| listener.table_changed(event))
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: ConnectionId) -> bool {
        self.changed.disconnect(id)
    }

    /// Removes every subscription.
    pub fn unsubscribe_all(&self) {
        self.changed.disconnect_all();
    }

    /// Number of active subscriptions.
    pub fn listener_count(&self) -> usize {
        self.changed.connection_count()
    }

    /// Suppresses (or resumes) notification delivery.
    pub fn set_blocked(&self, blocked: bool) {
        self.changed.set_blocked(blocked);
    }

    /// Returns `true` while delivery is suppressed.
    pub fn is_blocked(&self) -> bool {
        self.changed.is_blocked()
    }

    /// The underlying signal.
    pub fn signal(&self) -> &Signal<TableEvent> {
        &self.changed
    }

    // -------------------------------------------------------------------------
    // Emission helpers (model side)
    // -------------------------------------------------------------------------

    pub(crate) fn emit(&self, event: TableEvent) {
        tracing::trace!(target: targets::MODEL, ?event, "table event");
        self.changed.emit(event);
    }

    pub(crate) fn emit_data_changed(&self) {
        self.emit(TableEvent::DataChanged);
    }

    pub(crate) fn emit_cell_updated(&self, row: usize, column: usize) {
        self.emit(TableEvent::CellUpdated { row, column });
    }

    pub(crate) fn emit_rows_inserted(&self, first: usize, last: usize) {
        self.emit(TableEvent::RowsInserted { first, last });
    }

    pub(crate) fn emit_rows_deleted(&self, first: usize, last: usize) {
        self.emit(TableEvent::RowsDeleted { first, last });
    }

    pub(crate) fn emit_structure_changed(&self) {
        self.emit(TableEvent::StructureChanged);
    }
}

static_assertions::assert_impl_all!(TableSignals: Send, Sync);

/// The row/column contract a grid view consumes.
///
/// `GridModel` is object safe, so a view can hold a `&dyn GridModel` (or an
/// `Arc<dyn GridModel>`) without knowing the record type behind it.
///
/// # Example
///
/// ```ignore
/// fn render(model: &dyn GridModel) {
///     for row in 0..model.row_count() {
///         for column in 0..model.column_count() {
///             print!("{}\t", model.data(row, column));
///         }
///         println!();
///     }
/// }
/// ```
pub trait GridModel: Send + Sync {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// The value at `(row, column)`.
    ///
    /// Returns `CellValue::None` for coordinates outside the table.
    fn data(&self, row: usize, column: usize) -> CellValue;

    /// The header label of `column`.
    fn column_name(&self, column: usize) -> Option<&str>;

    /// The static value type of `column`.
    fn column_value_type(&self, column: usize) -> Option<ValueType>;

    /// The notification channel for this model.
    fn signals(&self) -> &TableSignals;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Writes `value` into `(row, column)`.
    ///
    /// Returns `true` if the cell was written. The default is read-only.
    fn set_data(&self, _row: usize, _column: usize, _value: CellValue) -> bool {
        false
    }

    /// Returns `true` if the view may offer an editor for the cell.
    fn is_cell_editable(&self, _row: usize, _column: usize) -> bool {
        false
    }

    // -------------------------------------------------------------------------
    // Convenience methods
    // -------------------------------------------------------------------------

    /// Returns `true` if the model has no rows.
    fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Display text of a cell, or `None` when the cell is empty or invalid.
    fn display_text(&self, row: usize, column: usize) -> Option<String> {
        let value = self.data(row, column);
        value.is_some().then(|| value.to_display_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_table_signals_creation() {
        let signals = TableSignals::new();
        assert_eq!(signals.listener_count(), 0);
        assert!(!signals.is_blocked());
    }

    #[test]
    fn test_emit_reaches_closure_and_listener() {
        struct Recorder(Mutex<Vec<TableEvent>>);

        impl TableListener for Recorder {
            fn table_changed(&self, event: &TableEvent) {
                self.0.lock().push(*event);
            }
        }

        let signals = TableSignals::new();
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));
        let received = Arc::new(Mutex::new(Vec::new()));

        signals.subscribe(recorder.clone());
        let recv = received.clone();
        signals.connect(move |event| recv.lock().push(*event));

        signals.emit_rows_inserted(1, 1);
        signals.emit_cell_updated(0, 2);

        let expected = vec![
            TableEvent::RowsInserted { first: 1, last: 1 },
            TableEvent::CellUpdated { row: 0, column: 2 },
        ];
        assert_eq!(*recorder.0.lock(), expected);
        assert_eq!(*received.lock(), expected);
    }

    #[test]
    fn test_unsubscribe_and_block() {
        let signals = TableSignals::new();
        let counter = Arc::new(Mutex::new(0));

        let c = counter.clone();
        let id = signals.connect(move |_| *c.lock() += 1);

        signals.emit_data_changed();
        signals.set_blocked(true);
        signals.emit_data_changed();
        signals.set_blocked(false);
        assert!(signals.unsubscribe(id));
        signals.emit_structure_changed();

        assert_eq!(*counter.lock(), 1);
    }
}
