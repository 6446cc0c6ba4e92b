//! Cell values and value types.
//!
//! A table cell is an untyped slot. `CellValue` is what a row stores and
//! what views read; `ValueType` is the static type a record field declares
//! for its column.

use std::fmt;

/// The static type of a record field and therefore of its column.
///
/// Column types come from the field descriptor, never from the data in the
/// table, so they are available on an empty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueType {
    /// The scalar kind stored in the column.
    pub kind: ValueKind,
    /// Whether the field accepts `CellValue::None`.
    pub optional: bool,
}

impl ValueType {
    /// Text column.
    pub const TEXT: ValueType = ValueType::required(ValueKind::Text);
    /// Integer column.
    pub const INTEGER: ValueType = ValueType::required(ValueKind::Integer);
    /// Floating point column.
    pub const FLOAT: ValueType = ValueType::required(ValueKind::Float);
    /// Boolean column.
    pub const BOOLEAN: ValueType = ValueType::required(ValueKind::Boolean);

    /// A non-optional value type of the given kind.
    pub const fn required(kind: ValueKind) -> Self {
        Self {
            kind,
            optional: false,
        }
    }

    /// The optional variant of this value type.
    pub const fn into_optional(self) -> Self {
        Self {
            kind: self.kind,
            optional: true,
        }
    }

    /// Returns `true` if `value` can be stored in a column of this type
    /// without coercion.
    pub fn accepts(&self, value: &CellValue) -> bool {
        match value.kind() {
            None => self.optional,
            Some(kind) => kind == self.kind,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            write!(f, "optional {}", self.kind)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// Scalar kinds a cell can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// UTF-8 text.
    Text,
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit float.
    Float,
    /// Boolean.
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// The content of a single table cell.
///
/// # Example
///
/// ```
/// use contact_grid_core::CellValue;
///
/// let cell = CellValue::from("Home");
/// assert_eq!(cell.as_str(), Some("Home"));
/// assert!(cell.as_int().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value.
    #[default]
    None,
    /// Text.
    String(String),
    /// Integer.
    Int(i64),
    /// Floating point.
    Float(f64),
    /// Boolean.
    Bool(bool),
}

impl CellValue {
    /// Returns `true` if this is `CellValue::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, CellValue::None)
    }

    /// Returns `true` if this cell holds a value.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// The scalar kind held by this cell, or `None` for an empty cell.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            CellValue::None => None,
            CellValue::String(_) => Some(ValueKind::Text),
            CellValue::Int(_) => Some(ValueKind::Integer),
            CellValue::Float(_) => Some(ValueKind::Float),
            CellValue::Bool(_) => Some(ValueKind::Boolean),
        }
    }

    /// Attempts to get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Renders the cell as display text. Empty cells render as `""`.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::None => String::new(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::None => Ok(()),
            CellValue::String(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::String(s.clone())
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(opt: Option<V>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::None,
        }
    }
}
