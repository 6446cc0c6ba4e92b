//! Record descriptors.
//!
//! A record is a struct whose scalar fields become table columns. Instead of
//! walking fields at runtime, each record type publishes a static list of
//! [`FieldDescriptor`]s, normally generated by `#[derive(Record)]`. The list
//! fixes the column order (declaration order), the column names, and the
//! static value type of every column.
//!
//! # Example
//!
//! ```
//! use contact_grid_core::{CellValue, FieldDescriptor, FieldValue, Record};
//!
//! #[derive(Clone, Default)]
//! struct Tag {
//!     label: String,
//! }
//!
//! fn label_get(tag: &Tag) -> CellValue {
//!     tag.label.to_cell()
//! }
//!
//! fn label_set(tag: &mut Tag, cell: &CellValue) -> contact_grid_core::CoercionResult<()> {
//!     tag.label = String::from_cell(cell)?;
//!     Ok(())
//! }
//!
//! impl Record for Tag {
//!     fn record_name() -> &'static str {
//!         "Tag"
//!     }
//!
//!     fn fields() -> &'static [FieldDescriptor<Self>] {
//!         static FIELDS: [FieldDescriptor<Tag>; 1] = [FieldDescriptor {
//!             name: "label",
//!             header: "label",
//!             value_type: <String as FieldValue>::VALUE_TYPE,
//!             get: label_get,
//!             set: label_set,
//!         }];
//!         &FIELDS
//!     }
//! }
//!
//! let row = Tag { label: "work".into() }.to_row();
//! assert_eq!(row, vec![CellValue::from("work")]);
//! ```

use std::fmt;

use crate::error::{CoercionError, CoercionResult};
use crate::value::{CellValue, ValueKind, ValueType};

/// Static description of one record field.
pub struct FieldDescriptor<T: 'static> {
    /// Field name as declared.
    pub name: &'static str,
    /// Column header label.
    pub header: &'static str,
    /// Static value type of the field.
    pub value_type: ValueType,
    /// Reads the field as a cell.
    pub get: fn(&T) -> CellValue,
    /// Coerces a cell into the field.
    pub set: fn(&mut T, &CellValue) -> CoercionResult<()>,
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("header", &self.header)
            .field("value_type", &self.value_type)
            .finish()
    }
}

/// A record field failed to accept a cell while rebuilding a record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("field '{field}' (column {column}): {source}")]
pub struct FieldError {
    /// Column index of the field.
    pub column: usize,
    /// Field name.
    pub field: &'static str,
    /// What went wrong.
    #[source]
    pub source: CoercionError,
}

/// A structured value whose fields map to table columns.
///
/// Implementations must keep [`fields`](Record::fields) stable: the same
/// descriptors in the same order on every call.
pub trait Record: Default + Clone + Send + Sync + 'static {
    /// Name of the record type, used in log output.
    fn record_name() -> &'static str;

    /// The field descriptors in declaration order.
    fn fields() -> &'static [FieldDescriptor<Self>];

    /// The record used to fill a freshly added row.
    ///
    /// Defaults to `Self::default()`.
    fn placeholder() -> Self {
        Self::default()
    }

    /// Converts the record into a row, one cell per field.
    fn to_row(&self) -> Vec<CellValue> {
        Self::fields().iter().map(|field| (field.get)(self)).collect()
    }

    /// Builds a record from a row by coercing each cell into its field.
    ///
    /// Cells missing from a short row are treated as empty.
    fn from_row(row: &[CellValue]) -> Result<Self, FieldError> {
        let mut record = Self::default();
        for (column, field) in Self::fields().iter().enumerate() {
            let cell = row.get(column).unwrap_or(&CellValue::None);
            (field.set)(&mut record, cell).map_err(|source| FieldError {
                column,
                field: field.name,
                source,
            })?;
        }
        Ok(record)
    }
}

/// A scalar type usable as a record field.
///
/// `from_cell` is the coercion applied when a row is turned back into a
/// record. Text fields accept any non-empty cell and stringify it; numeric
/// and boolean fields also parse text.
pub trait FieldValue: Sized {
    /// The static value type reported for columns of this field.
    const VALUE_TYPE: ValueType;

    /// Converts the field into a cell.
    fn to_cell(&self) -> CellValue;

    /// Coerces a cell into the field type.
    fn from_cell(cell: &CellValue) -> CoercionResult<Self>;
}

fn missing<T: FieldValue>() -> CoercionError {
    CoercionError::Missing {
        expected: T::VALUE_TYPE,
    }
}

fn mismatch(expected: ValueKind, cell: &CellValue) -> CoercionError {
    match cell.kind() {
        Some(found) => CoercionError::TypeMismatch { expected, found },
        None => CoercionError::Missing {
            expected: ValueType::required(expected),
        },
    }
}

fn coerce_integer(cell: &CellValue) -> CoercionResult<i64> {
    match cell {
        CellValue::Int(n) => Ok(*n),
        CellValue::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| CoercionError::parse(ValueKind::Integer, s.as_str())),
        other => Err(mismatch(ValueKind::Integer, other)),
    }
}

impl FieldValue for String {
    const VALUE_TYPE: ValueType = ValueType::TEXT;

    fn to_cell(&self) -> CellValue {
        CellValue::String(self.clone())
    }

    fn from_cell(cell: &CellValue) -> CoercionResult<Self> {
        match cell {
            CellValue::None => Err(missing::<Self>()),
            CellValue::String(s) => Ok(s.clone()),
            other => Ok(other.to_string()),
        }
    }
}

impl FieldValue for i64 {
    const VALUE_TYPE: ValueType = ValueType::INTEGER;

    fn to_cell(&self) -> CellValue {
        CellValue::Int(*self)
    }

    fn from_cell(cell: &CellValue) -> CoercionResult<Self> {
        coerce_integer(cell)
    }
}

impl FieldValue for i32 {
    const VALUE_TYPE: ValueType = ValueType::INTEGER;

    fn to_cell(&self) -> CellValue {
        CellValue::Int(*self as i64)
    }

    fn from_cell(cell: &CellValue) -> CoercionResult<Self> {
        let value = coerce_integer(cell)?;
        i32::try_from(value).map_err(|_| CoercionError::OutOfRange {
            expected: "i32",
            value,
        })
    }
}

impl FieldValue for u32 {
    const VALUE_TYPE: ValueType = ValueType::INTEGER;

    fn to_cell(&self) -> CellValue {
        CellValue::Int(*self as i64)
    }

    fn from_cell(cell: &CellValue) -> CoercionResult<Self> {
        let value = coerce_integer(cell)?;
        u32::try_from(value).map_err(|_| CoercionError::OutOfRange {
            expected: "u32",
            value,
        })
    }
}

impl FieldValue for f64 {
    const VALUE_TYPE: ValueType = ValueType::FLOAT;

    fn to_cell(&self) -> CellValue {
        CellValue::Float(*self)
    }

    fn from_cell(cell: &CellValue) -> CoercionResult<Self> {
        match cell {
            CellValue::Float(f) => Ok(*f),
            CellValue::Int(n) => Ok(*n as f64),
            CellValue::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| CoercionError::parse(ValueKind::Float, s.as_str())),
            other => Err(mismatch(ValueKind::Float, other)),
        }
    }
}

impl FieldValue for bool {
    const VALUE_TYPE: ValueType = ValueType::BOOLEAN;

    fn to_cell(&self) -> CellValue {
        CellValue::Bool(*self)
    }

    fn from_cell(cell: &CellValue) -> CoercionResult<Self> {
        match cell {
            CellValue::Bool(b) => Ok(*b),
            CellValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(CoercionError::parse(ValueKind::Boolean, s.as_str())),
            },
            other => Err(mismatch(ValueKind::Boolean, other)),
        }
    }
}

impl<V: FieldValue> FieldValue for Option<V> {
    const VALUE_TYPE: ValueType = V::VALUE_TYPE.into_optional();

    fn to_cell(&self) -> CellValue {
        match self {
            Some(value) => value.to_cell(),
            None => CellValue::None,
        }
    }

    fn from_cell(cell: &CellValue) -> CoercionResult<Self> {
        match cell {
            CellValue::None => Ok(None),
            other => V::from_cell(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_coercion_stringifies() {
        assert_eq!(String::from_cell(&CellValue::from("a")).unwrap(), "a");
        assert_eq!(String::from_cell(&CellValue::Int(42)).unwrap(), "42");
        assert_eq!(String::from_cell(&CellValue::Bool(true)).unwrap(), "true");
        assert_eq!(
            String::from_cell(&CellValue::None),
            Err(CoercionError::Missing {
                expected: ValueType::TEXT
            })
        );
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(i64::from_cell(&CellValue::Int(-9)).unwrap(), -9);
        assert_eq!(i64::from_cell(&CellValue::from(" 12 ")).unwrap(), 12);
        assert!(matches!(
            i64::from_cell(&CellValue::Float(3.5)),
            Err(CoercionError::TypeMismatch { .. })
        ));
        assert!(matches!(
            i64::from_cell(&CellValue::from("twelve")),
            Err(CoercionError::Parse { .. })
        ));
        assert_eq!(
            u32::from_cell(&CellValue::Int(-1)),
            Err(CoercionError::OutOfRange {
                expected: "u32",
                value: -1
            })
        );
        assert_eq!(i32::from_cell(&CellValue::Int(7)).unwrap(), 7);
    }

    #[test]
    fn test_float_cells_never_become_integers() {
        // 2^63 does not fit an i64 and must not saturate to i64::MAX
        for value in [3.0, 9_223_372_036_854_775_808.0, -9_223_372_036_854_775_808.0] {
            assert_eq!(
                i64::from_cell(&CellValue::Float(value)),
                Err(CoercionError::TypeMismatch {
                    expected: ValueKind::Integer,
                    found: ValueKind::Float,
                })
            );
        }
        assert!(i32::from_cell(&CellValue::Float(1.0)).is_err());
    }

    #[test]
    fn test_float_and_bool_coercion() {
        assert_eq!(f64::from_cell(&CellValue::Int(2)).unwrap(), 2.0);
        assert_eq!(f64::from_cell(&CellValue::from("0.25")).unwrap(), 0.25);
        assert!(bool::from_cell(&CellValue::from("TRUE")).unwrap());
        assert!(!bool::from_cell(&CellValue::from("false")).unwrap());
        assert!(matches!(
            bool::from_cell(&CellValue::Int(1)),
            Err(CoercionError::TypeMismatch {
                expected: ValueKind::Boolean,
                found: ValueKind::Integer
            })
        ));
    }

    #[test]
    fn test_optional_fields() {
        assert_eq!(<Option<String>>::VALUE_TYPE, ValueType::TEXT.into_optional());
        assert_eq!(<Option<i64>>::from_cell(&CellValue::None).unwrap(), None);
        assert_eq!(<Option<i64>>::from_cell(&CellValue::Int(4)).unwrap(), Some(4));
        assert_eq!(Some(4i64).to_cell(), CellValue::Int(4));
        assert_eq!(None::<i64>.to_cell(), CellValue::None);
    }

    #[derive(Clone, Default, Debug, PartialEq)]
    struct Pair {
        key: String,
        count: u32,
    }

    fn key_get(p: &Pair) -> CellValue {
        p.key.to_cell()
    }

    fn key_set(p: &mut Pair, cell: &CellValue) -> CoercionResult<()> {
        p.key = String::from_cell(cell)?;
        Ok(())
    }

    fn count_get(p: &Pair) -> CellValue {
        p.count.to_cell()
    }

    fn count_set(p: &mut Pair, cell: &CellValue) -> CoercionResult<()> {
        p.count = u32::from_cell(cell)?;
        Ok(())
    }

    impl Record for Pair {
        fn record_name() -> &'static str {
            "Pair"
        }

        fn fields() -> &'static [FieldDescriptor<Self>] {
            static FIELDS: [FieldDescriptor<Pair>; 2] = [
                FieldDescriptor {
                    name: "key",
                    header: "key",
                    value_type: <String as FieldValue>::VALUE_TYPE,
                    get: key_get,
                    set: key_set,
                },
                FieldDescriptor {
                    name: "count",
                    header: "count",
                    value_type: <u32 as FieldValue>::VALUE_TYPE,
                    get: count_get,
                    set: count_set,
                },
            ];
            &FIELDS
        }
    }

    #[test]
    fn test_record_row_conversion() {
        let pair = Pair {
            key: "k".into(),
            count: 3,
        };
        let row = pair.to_row();
        assert_eq!(row, vec![CellValue::from("k"), CellValue::Int(3)]);
        assert_eq!(Pair::from_row(&row).unwrap(), pair);
    }

    #[test]
    fn test_from_row_reports_failing_field() {
        let err = Pair::from_row(&[CellValue::from("k"), CellValue::from("many")]).unwrap_err();
        assert_eq!(err.column, 1);
        assert_eq!(err.field, "count");
        assert!(matches!(err.source, CoercionError::Parse { .. }));

        let err = Pair::from_row(&[CellValue::from("k")]).unwrap_err();
        assert!(matches!(err.source, CoercionError::Missing { .. }));
    }
}
