use thiserror::Error;

/// Errors raised by the catalog and its tables.
///
/// Every variant renders as a fixed message: the dispatcher hands that text
/// back to the caller exactly like a success message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DbError {
    #[error("Database not set")]
    DatabaseNotSet,
    #[error("Invalid database")]
    InvalidDatabase,
    #[error("Database exists")]
    DatabaseExists,
    #[error("Table does not exist")]
    TableNotExist,
    #[error("Table already exists")]
    TableExists,
    #[error("Column does not exist")]
    ColumnNotExist,
    #[error("Duplicate columns")]
    DuplicateColumn,
    #[error("Invalid number")]
    InvalidNumber,
    #[error("Invalid string")]
    InvalidString,
    #[error("Column name and type mismatch")]
    ColumnTypeMismatch,
    #[error("Invalid column name")]
    InvalidColumnName,
    #[error("Invalid column type")]
    InvalidColumnType,
    #[error("Invalid number of insert values")]
    InvalidInsertValueCount,
}

pub type Result<T> = std::result::Result<T, DbError>;
