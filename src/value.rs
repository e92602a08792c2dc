use std::fmt;
use std::sync::Arc;

use crate::data_type::DataType;

/// Represents a single cell stored in a table.
///
/// `Null` stands for "no value supplied for this column" on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// represents a missing value.
    Null,
    /// A 64-bit signed integer value.
    Int(i64),
    /// A UTF-8 string value without its quote delimiters, wrapped in an [Arc]
    /// for cheap cloning.
    Text(Arc<str>),
}

impl Value {
    /// Returns `true` if the value is [Value::Null].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the inner integer value if this is a [Value::Int].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns a reference to the inner string slice if this is a [Value::Text].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the logical [DataType] corresponding to this value.
    ///
    /// Returns `None` for [Value::Null], which is untyped until it is placed
    /// in a column.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Self::Null => None,
            Self::Int(_) => Some(DataType::Int),
            Self::Text(_) => Some(DataType::Text),
        }
    }
}

/// Renders a cell the way `select` prints it: integers as decimal digits,
/// text as its raw characters and NULL as `None`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("None"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
