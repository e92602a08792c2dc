use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::column::Column;
use crate::data_type::DataType;
use crate::error::{DbError, Result};
use crate::literal::parse_literal;
use crate::value::Value;

/// Column definition in the schema
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: DataType,
}

/// The fixed shape of a table: column definitions in creation order plus a
/// name lookup.
#[derive(Debug, Clone)]
pub struct Schema {
    pub columns: Vec<ColumnDef>,
    positions: HashMap<String, usize>,
}

impl Schema {
    /// Builds a schema from parallel lists of column names and declared types.
    ///
    /// # Errors
    /// Checked in this order:
    /// - [DbError::ColumnTypeMismatch] if the lists differ in length.
    /// - [DbError::InvalidColumnName] if a name is empty or not ASCII alphanumeric.
    /// - [DbError::InvalidColumnType] if a type is not `int` or `varchar`.
    /// - [DbError::DuplicateColumn] if a name appears twice.
    pub fn new<N, T>(col_names: &[N], col_types: &[T]) -> Result<Self>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        if col_names.len() != col_types.len() {
            return Err(DbError::ColumnTypeMismatch);
        }

        if !col_names.iter().all(|name| is_valid_column_name(name.as_ref())) {
            return Err(DbError::InvalidColumnName);
        }

        let data_types = col_types
            .iter()
            .map(|t| t.as_ref().parse::<DataType>())
            .collect::<Result<Vec<_>>>()?;

        if has_duplicates(col_names) {
            return Err(DbError::DuplicateColumn);
        }

        let columns: Vec<ColumnDef> = col_names
            .iter()
            .zip(data_types)
            .map(|(name, data_type)| ColumnDef {
                name: name.as_ref().to_string(),
                data_type,
            })
            .collect();
        let positions = columns
            .iter()
            .enumerate()
            .map(|(i, col)| (col.name.clone(), i))
            .collect();

        Ok(Self { columns, positions })
    }

    /// Returns the index of the column called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Returns column indexes ordered by column name.
    fn sorted_positions(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.columns.len()).collect();
        order.sort_by(|&a, &b| self.columns[a].name.cmp(&self.columns[b].name));
        order
    }
}

fn is_valid_column_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

fn has_duplicates<N: AsRef<str>>(names: &[N]) -> bool {
    let mut seen = HashSet::with_capacity(names.len());
    !names.iter().all(|name| seen.insert(name.as_ref()))
}

pub struct Table {
    pub name: String,
    pub schema: Schema,
    pub columns: Vec<Column>,
    pub row_count: usize,
}

/// Represents the result of a `select`.
#[derive(Debug, PartialEq)]
pub struct QueryResult {
    /// Column names, in lexicographic order.
    pub columns: Vec<String>,
    /// Matching rows in insertion order, each following the order of `columns`.
    pub rows: Vec<Vec<Value>>,
}

/// Header line of comma-joined column names, then one comma-joined line per row.
impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.columns.join(","))?;
        for row in &self.rows {
            let line: Vec<String> = row.iter().map(Value::to_string).collect();
            write!(f, "\n{}", line.join(","))?;
        }
        Ok(())
    }
}

/// The row filter of a `select`.
#[derive(Debug, PartialEq)]
enum Predicate {
    IsNull,
    Equals(Value),
}

impl Predicate {
    /// Interprets predicate text against the declared type of the filtered column.
    ///
    /// The literal `None` selects NULL cells. Otherwise `Int` columns expect a
    /// decimal integer and `Text` columns a quoted literal; anything after the
    /// closing quote is ignored.
    fn parse(text: &str, data_type: DataType) -> Result<Self> {
        let text = text.trim();
        if text == "None" {
            return Ok(Self::IsNull);
        }

        match data_type {
            DataType::Int => text
                .parse::<i64>()
                .map(|i| Self::Equals(Value::Int(i)))
                .map_err(|_| DbError::InvalidNumber),
            DataType::Text => {
                let (value, _) = parse_literal(text, DataType::Text)?;
                Ok(Self::Equals(value))
            }
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            Self::IsNull => value.is_null(),
            Self::Equals(expected) => value == expected,
        }
    }
}

impl Table {
    pub fn new(name: String, schema: Schema) -> Self {
        let columns = schema
            .columns
            .iter()
            .map(|column| Column::new(column.name.clone(), column.data_type))
            .collect();
        Self {
            name,
            schema,
            columns,
            row_count: 0,
        }
    }

    /// Inserts one row, taking values for `col_names` (in that order) from
    /// `values`. Columns not named are stored as NULL.
    ///
    /// The row is fully parsed before anything is stored, so a failed insert
    /// leaves the table untouched.
    ///
    /// # Errors
    /// - [DbError::DuplicateColumn] if `col_names` repeats a name.
    /// - [DbError::ColumnNotExist] if a name is not in the schema.
    /// - [DbError::InvalidNumber] / [DbError::InvalidString] if a literal does
    ///   not match its column's type.
    /// - [DbError::InvalidInsertValueCount] if text remains after the last literal.
    pub fn insert<N: AsRef<str>>(&mut self, col_names: &[N], values: &str) -> Result<()> {
        if has_duplicates(col_names) {
            return Err(DbError::DuplicateColumn);
        }

        let positions = col_names
            .iter()
            .map(|name| {
                self.schema
                    .position(name.as_ref())
                    .ok_or(DbError::ColumnNotExist)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut row = vec![Value::Null; self.schema.columns.len()];
        let mut remaining = values;
        for idx in positions {
            let (value, rest) = parse_literal(remaining, self.schema.columns[idx].data_type)?;
            row[idx] = value;
            remaining = rest;
        }

        if !remaining.is_empty() {
            return Err(DbError::InvalidInsertValueCount);
        }

        for (column, value) in self.columns.iter().zip(&row) {
            column.check(value)?;
        }
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(value)?;
        }
        self.row_count += 1;
        Ok(())
    }

    /// Returns the row at `row_idx` with values in schema order.
    pub fn get_row(&self, row_idx: usize) -> Option<Vec<Value>> {
        if self.row_count <= row_idx {
            return None;
        }
        self.columns
            .iter()
            .map(|col| col.get(row_idx)) // -> Option<Value>
            .collect()
    }

    pub fn get_col(&self, name: &str) -> Option<&Column> {
        self.schema.position(name).map(|idx| &self.columns[idx])
    }

    /// Selects the rows whose `col_name` cell satisfies `predicate`.
    ///
    /// Columns come out in lexicographic order of their names, rows in
    /// insertion order. The result always carries the header, even when no
    /// row matches.
    ///
    /// # Errors
    /// - [DbError::ColumnNotExist] if `col_name` is not in the schema.
    /// - [DbError::InvalidNumber] if the predicate on an `Int` column is not an integer.
    /// - [DbError::InvalidString] if the predicate on a `Text` column is not quoted.
    pub fn select(&self, col_name: &str, predicate: &str) -> Result<QueryResult> {
        let filter_col = self.get_col(col_name).ok_or(DbError::ColumnNotExist)?;
        let predicate = Predicate::parse(predicate, filter_col.data_type)?;

        let order = self.schema.sorted_positions();
        let columns: Vec<String> = order
            .iter()
            .map(|&idx| self.schema.columns[idx].name.clone())
            .collect();

        let rows: Vec<Vec<Value>> = (0..self.row_count)
            .filter(|&i| predicate.matches(&filter_col.get(i).unwrap_or(Value::Null)))
            .map(|i| {
                order
                    .iter()
                    .map(|&idx| self.columns[idx].get(i).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Ok(QueryResult { columns, rows })
    }
}
