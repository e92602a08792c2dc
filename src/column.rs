use std::sync::Arc;

use crate::data_type::DataType;
use crate::error::{DbError, Result};
use crate::value::Value;
use bitvec::prelude::*;

/// Physical storage for column data.
/// Each variant wraps a contiguous vector of a single type (columnar storage).
#[derive(Debug, Clone)]
pub enum ColumnData {
    /// Vector of 64-bit integers.
    Int(Vec<i64>),
    /// Vector of reference-counted strings.
    Text(Vec<Arc<str>>),
}

/// Represents a column within a table.
/// It combines metadata (name, type) with actual data and a nullability tracker.
#[derive(Debug, Clone)]
pub struct Column {
    /// The name of the column.
    pub name: String,
    /// The logical data type of the column.
    pub data_type: DataType,
    /// The actual values stored in the column.
    pub data: ColumnData,
    /// A bitmap where a `true` bit indicates that the value at that index is `NULL`.
    pub null_bitmap: BitVec,
}

impl Column {
    /// Creates a new, empty column with the specified name and data type.
    pub fn new(name: String, data_type: DataType) -> Self {
        let data = match data_type {
            DataType::Int => ColumnData::Int(vec![]),
            DataType::Text => ColumnData::Text(vec![]),
        };
        Self {
            name,
            data_type,
            data,
            null_bitmap: bitvec!(),
        }
    }

    /// Checks that `value` can be stored in this column without storing it.
    ///
    /// # Errors
    /// [DbError::InvalidNumber] for a non-integer in an `Int` column,
    /// [DbError::InvalidString] for a non-string in a `Text` column.
    pub fn check(&self, value: &Value) -> Result<()> {
        match (self.data_type, value.data_type()) {
            (_, None) => Ok(()),
            (expected, Some(found)) if expected == found => Ok(()),
            (DataType::Int, Some(_)) => Err(DbError::InvalidNumber),
            (DataType::Text, Some(_)) => Err(DbError::InvalidString),
        }
    }

    /// Appends a new value to the end of the column.
    ///
    /// # Errors
    /// Same as [Column::check]; nothing is stored on error.
    ///
    /// # Behavior
    /// - If the value is `Null`, a default "dummy" value is pushed to the data vector
    ///   to maintain index alignment with the `null_bitmap`.
    ///
    /// # Example
    /// ```
    /// # use datastore::column::Column;
    /// # use datastore::{DataType, Value};
    /// let mut col = Column::new("age".into(), DataType::Int);
    /// col.push(Value::Int(30)).unwrap();
    /// col.push(Value::Null).unwrap();
    ///
    /// assert_eq!(col.len(), 2);
    /// assert!(col.get(1).unwrap().is_null());
    /// ```
    pub fn push(&mut self, value: Value) -> Result<()> {
        self.check(&value)?;

        match (&mut self.data, value) {
            (ColumnData::Int(col), Value::Int(v)) => col.push(v),
            (ColumnData::Text(col), Value::Text(v)) => col.push(v),
            // Add default value to keep alignment between the data vector and the bitmap
            (ColumnData::Int(col), _) => {
                self.null_bitmap.push(true);
                col.push(0);
                return Ok(());
            }
            (ColumnData::Text(col), _) => {
                self.null_bitmap.push(true);
                col.push(Arc::from(""));
                return Ok(());
            }
        }

        self.null_bitmap.push(false);
        Ok(())
    }

    /// Returns the number of rows currently stored in the column.
    pub fn len(&self) -> usize {
        self.null_bitmap.len()
    }

    /// Returns true if there is no row in the column, else false.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retrieves the value at the specified row index.
    ///
    /// Returns `None` if the index is out of bounds, `Some(Value::Null)` if the
    /// bitmap marks the slot as NULL.
    pub fn get(&self, row_idx: usize) -> Option<Value> {
        if row_idx >= self.len() {
            return None;
        }
        if self.null_bitmap[row_idx] {
            return Some(Value::Null);
        }
        match &self.data {
            ColumnData::Int(col) => Some(Value::Int(col[row_idx])),
            ColumnData::Text(col) => Some(Value::Text(col[row_idx].clone())),
        }
    }
}
