//! Record-backed table model.
//!
//! `RecordTableModel<T>` stores a table of cells derived from records of
//! type `T`. Columns come from `T`'s static field descriptors; rows are
//! converted from records on the way in and back into records on the way
//! out. Every mutation emits exactly one [`TableEvent`].

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;

use contact_grid_core::logging::{GridDebug, GridStyle, targets};
use contact_grid_core::{CellValue, ConnectionId, Record, ValueType};

use super::error::{ModelError, ModelResult};
use super::traits::{GridModel, TableEvent, TableListener, TableSignals};

/// One column of a record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Name of the record field behind the column.
    pub name: &'static str,
    /// Header label shown by views.
    pub header: &'static str,
    /// Static value type of the field.
    pub value_type: ValueType,
}

/// A table model whose rows are records of type `T`.
///
/// # Example
///
/// ```ignore
/// use contact_grid::prelude::*;
///
/// #[derive(Record, Clone, Debug, Default, PartialEq)]
/// struct Address {
///     #[record(rename = "type")]
///     kind: String,
///     address: String,
/// }
///
/// let model = RecordTableModel::from_records(&[Address {
///     kind: "Home".into(),
///     address: "123 St".into(),
/// }])?;
///
/// assert_eq!(model.row_count(), 1);
/// assert_eq!(model.column_count(), 2);
/// assert_eq!(model.value_at(0, 0)?, CellValue::from("Home"));
///
/// model.signals().connect(|event| println!("{event:?}"));
/// model.add_row(vec!["Work".into(), "456 Ave".into()])?;
/// ```
pub struct RecordTableModel<T: Record> {
    columns: Vec<Column>,
    rows: RwLock<Vec<Vec<CellValue>>>,
    signals: TableSignals,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RecordTableModel<T> {
    /// Creates an empty model.
    ///
    /// Columns are derived from `T` and `StructureChanged` is emitted.
    pub fn new() -> Self {
        Self::with_signals(TableSignals::new())
    }

    /// Creates a model and bulk-loads `records` into it.
    pub fn from_records(records: &[T]) -> ModelResult<Self> {
        let model = Self::new();
        model.set_data_model(records)?;
        Ok(model)
    }

    /// Returns a builder that can attach listeners before construction
    /// notifications are emitted.
    pub fn builder() -> RecordTableModelBuilder<T> {
        RecordTableModelBuilder::new()
    }

    fn with_signals(signals: TableSignals) -> Self {
        let columns: Vec<Column> = T::fields()
            .iter()
            .map(|field| Column {
                name: field.name,
                header: field.header,
                value_type: field.value_type,
            })
            .collect();

        tracing::debug!(
            target: targets::MODEL,
            record = T::record_name(),
            columns = columns.len(),
            "derived table columns"
        );

        let model = Self {
            columns,
            rows: RwLock::new(Vec::new()),
            signals,
            _record: PhantomData,
        };
        model.signals.emit_structure_changed();
        model
    }

    // -------------------------------------------------------------------------
    // Bulk conversion
    // -------------------------------------------------------------------------

    /// Replaces the whole row store with one row per record.
    ///
    /// Emits a single `DataChanged`, also for an empty slice. If any record
    /// produces a cell that does not fit its column, nothing is replaced and
    /// no event is emitted.
    pub fn set_data_model(&self, records: &[T]) -> ModelResult<()> {
        let rows = self.prepare_rows(records)?;
        self.install_rows(rows);
        Ok(())
    }

    /// Converts `records` into rows without touching the store.
    pub(crate) fn prepare_rows(&self, records: &[T]) -> ModelResult<Vec<Vec<CellValue>>> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| self.record_to_row(index, record))
            .collect()
    }

    /// Replaces the store with already validated rows and emits `DataChanged`.
    pub(crate) fn install_rows(&self, rows: Vec<Vec<CellValue>>) {
        let count = rows.len();
        *self.rows.write() = rows;

        tracing::debug!(target: targets::MODEL, record = T::record_name(), rows = count, "loaded data model");
        self.signals.emit_data_changed();
    }

    /// Rebuilds one record per row, coercing each cell into its field.
    pub fn data_model(&self) -> ModelResult<Vec<T>> {
        let rows = self.rows.read();
        rows.iter()
            .enumerate()
            .map(|(index, row)| Self::row_to_record(index, row))
            .collect()
    }

    /// Rebuilds the record stored at `index`.
    pub fn record_at(&self, index: usize) -> ModelResult<T> {
        let rows = self.rows.read();
        let row = rows.get(index).ok_or(ModelError::RowOutOfRange {
            index,
            rows: rows.len(),
        })?;
        Self::row_to_record(index, row)
    }

    fn record_to_row(&self, index: usize, record: &T) -> ModelResult<Vec<CellValue>> {
        let row = record.to_row();
        if row.len() != self.columns.len() {
            return Err(ModelError::RowShapeMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }

        for (column, (cell, descriptor)) in row.iter().zip(&self.columns).enumerate() {
            if !descriptor.value_type.accepts(cell) {
                tracing::warn!(
                    target: targets::MODEL,
                    record = T::record_name(),
                    row = index,
                    field = descriptor.name,
                    "record field produced a cell of the wrong type"
                );
                return Err(ModelError::unexpected_cell(
                    index,
                    column,
                    descriptor.name,
                    descriptor.value_type,
                    cell.kind(),
                ));
            }
        }
        Ok(row)
    }

    fn row_to_record(index: usize, row: &[CellValue]) -> ModelResult<T> {
        T::from_row(row).map_err(|err| {
            tracing::warn!(
                target: targets::MODEL,
                record = T::record_name(),
                row = index,
                field = err.field,
                error = %err.source,
                "cannot convert row to record"
            );
            ModelError::Conversion {
                row: index,
                column: err.column,
                field: err.field,
                source: err.source,
            }
        })
    }

    // -------------------------------------------------------------------------
    // Dimensions and columns
    // -------------------------------------------------------------------------

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.read().len()
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the model has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// The derived columns, in field declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header labels of all columns.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.header).collect()
    }

    /// Header label of `column`.
    pub fn column_name(&self, column: usize) -> Option<&'static str> {
        self.columns.get(column).map(|c| c.header)
    }

    /// Static value type of `column`. Works on an empty table.
    pub fn column_value_type(&self, column: usize) -> ModelResult<ValueType> {
        self.columns
            .get(column)
            .map(|c| c.value_type)
            .ok_or(ModelError::ColumnOutOfRange {
                column,
                columns: self.columns.len(),
            })
    }

    // -------------------------------------------------------------------------
    // Cell access
    // -------------------------------------------------------------------------

    /// Returns the value at `(row, column)`.
    pub fn value_at(&self, row: usize, column: usize) -> ModelResult<CellValue> {
        let rows = self.rows.read();
        rows.get(row)
            .and_then(|cells| cells.get(column))
            .cloned()
            .ok_or(ModelError::CellOutOfRange {
                row,
                column,
                rows: rows.len(),
                columns: self.columns.len(),
            })
    }

    /// Overwrites the value at `(row, column)` and emits `CellUpdated`.
    ///
    /// The value is stored as given; it is coerced to the field type only
    /// when records are rebuilt.
    pub fn set_value_at(&self, value: impl Into<CellValue>, row: usize, column: usize) -> ModelResult<()> {
        let written = {
            let mut rows = self.rows.write();
            let row_count = rows.len();
            match rows.get_mut(row).and_then(|cells| cells.get_mut(column)) {
                Some(cell) => {
                    *cell = value.into();
                    Ok(())
                }
                None => Err(row_count),
            }
        };

        if let Err(row_count) = written {
            tracing::warn!(target: targets::MODEL, row, column, "rejected write outside the table");
            return Err(ModelError::CellOutOfRange {
                row,
                column,
                rows: row_count,
                columns: self.columns.len(),
            });
        }

        self.signals.emit_cell_updated(row, column);
        Ok(())
    }

    /// Every cell is editable; editability policy belongs to the view.
    pub fn is_cell_editable(&self, _row: usize, _column: usize) -> bool {
        true
    }

    // -------------------------------------------------------------------------
    // Row access and mutation
    // -------------------------------------------------------------------------

    /// Returns a copy of the row at `index`.
    pub fn row(&self, index: usize) -> ModelResult<Vec<CellValue>> {
        let rows = self.rows.read();
        rows.get(index).cloned().ok_or(ModelError::RowOutOfRange {
            index,
            rows: rows.len(),
        })
    }

    /// Returns a snapshot of all rows.
    pub fn rows(&self) -> Vec<Vec<CellValue>> {
        self.rows.read().clone()
    }

    /// The row appended for a new, not yet edited record.
    pub fn default_row(&self) -> Vec<CellValue> {
        T::placeholder().to_row()
    }

    /// Appends `row` and emits `RowsInserted` for its index.
    ///
    /// An empty row is ignored (`Ok(None)`, no event). A row whose width
    /// differs from the column count is rejected.
    pub fn add_row(&self, row: Vec<CellValue>) -> ModelResult<Option<usize>> {
        if row.is_empty() {
            tracing::debug!(target: targets::MODEL, "ignoring empty row");
            return Ok(None);
        }
        if row.len() != self.columns.len() {
            tracing::warn!(
                target: targets::MODEL,
                expected = self.columns.len(),
                actual = row.len(),
                "rejected row with wrong width"
            );
            return Err(ModelError::RowShapeMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        Ok(Some(self.push_row(row)))
    }

    /// Converts `record` and appends it as a row.
    pub fn add_record(&self, record: &T) -> ModelResult<usize> {
        let row = self.record_to_row(self.row_count(), record)?;
        Ok(self.push_row(row))
    }

    /// Appends the placeholder row for `T`.
    pub fn add_default_row(&self) -> usize {
        self.push_row(self.default_row())
    }

    fn push_row(&self, row: Vec<CellValue>) -> usize {
        let index = {
            let mut rows = self.rows.write();
            rows.push(row);
            rows.len() - 1
        };
        tracing::debug!(target: targets::MODEL, record = T::record_name(), index, "row inserted");
        self.signals.emit_rows_inserted(index, index);
        index
    }

    /// Removes the row at `index`, shifting later rows up, and emits
    /// `RowsDeleted`. Returns the removed cells.
    pub fn remove_row(&self, index: usize) -> ModelResult<Vec<CellValue>> {
        let mut rows = self.rows.write();
        if index >= rows.len() {
            let row_count = rows.len();
            drop(rows);
            tracing::warn!(target: targets::MODEL, index, rows = row_count, "rejected removal outside the table");
            return Err(ModelError::RowOutOfRange {
                index,
                rows: row_count,
            });
        }
        let removed = rows.remove(index);
        drop(rows);

        tracing::debug!(target: targets::MODEL, record = T::record_name(), index, "row removed");
        self.signals.emit_rows_deleted(index, index);
        Ok(removed)
    }

    /// Removes all rows and emits `DataChanged`.
    pub fn clear(&self) {
        self.rows.write().clear();
        self.signals.emit_data_changed();
    }

    // -------------------------------------------------------------------------
    // Notifications and debugging
    // -------------------------------------------------------------------------

    /// The notification channel for this model.
    pub fn signals(&self) -> &TableSignals {
        &self.signals
    }

    /// Renders the table as text for debug output.
    pub fn debug_table(&self) -> String {
        let headers = self.column_names();
        GridDebug::new(GridStyle::Unicode).format(&headers, &self.rows.read())
    }
}

impl<T: Record> Default for RecordTableModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> fmt::Debug for RecordTableModel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordTableModel")
            .field("record", &T::record_name())
            .field("columns", &self.column_names())
            .field("rows", &self.row_count())
            .finish()
    }
}

impl<T: Record> GridModel for RecordTableModel<T> {
    fn row_count(&self) -> usize {
        RecordTableModel::row_count(self)
    }

    fn column_count(&self) -> usize {
        RecordTableModel::column_count(self)
    }

    fn data(&self, row: usize, column: usize) -> CellValue {
        self.value_at(row, column).unwrap_or_default()
    }

    fn column_name(&self, column: usize) -> Option<&str> {
        RecordTableModel::column_name(self, column)
    }

    fn column_value_type(&self, column: usize) -> Option<ValueType> {
        RecordTableModel::column_value_type(self, column).ok()
    }

    fn signals(&self) -> &TableSignals {
        &self.signals
    }

    fn set_data(&self, row: usize, column: usize, value: CellValue) -> bool {
        self.set_value_at(value, row, column).is_ok()
    }

    fn is_cell_editable(&self, row: usize, column: usize) -> bool {
        RecordTableModel::is_cell_editable(self, row, column)
    }
}

/// Builder for [`RecordTableModel`].
///
/// Listeners registered here are connected before the model derives its
/// columns, so they observe `StructureChanged` (and `DataChanged` when
/// initial records were given).
pub struct RecordTableModelBuilder<T: Record> {
    listeners: Vec<Arc<dyn TableListener>>,
    records: Option<Vec<T>>,
}

impl<T: Record> Default for RecordTableModelBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordTableModelBuilder<T> {
    /// Creates a builder with no listeners and no records.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            records: None,
        }
    }

    /// Adds a listener object.
    pub fn listener(mut self, listener: Arc<dyn TableListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Adds a closure listener.
    pub fn slot<F>(mut self, slot: F) -> Self
    where
        F: Fn(&TableEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(slot));
        self
    }

    /// Sets the records to bulk-load after construction.
    pub fn records(mut self, records: impl IntoIterator<Item = T>) -> Self {
        self.records = Some(records.into_iter().collect());
        self
    }

    /// Builds the model.
    ///
    /// Also returns the connection IDs of the registered listeners, in
    /// registration order, so they can be unsubscribed later.
    pub fn build(self) -> ModelResult<(RecordTableModel<T>, Vec<ConnectionId>)> {
        let signals = TableSignals::new();
        let ids = self
            .listeners
            .into_iter()
            .map(|listener| signals.subscribe(listener))
            .collect();

        let model = RecordTableModel::with_signals(signals);
        if let Some(records) = self.records {
            model.set_data_model(&records)?;
        }
        Ok((model, ids))
    }
}
