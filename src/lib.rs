pub mod ast;
pub mod catalog;
pub mod column;
pub mod data_type;
pub mod database;
pub mod error;
pub mod literal;
pub mod parser;
pub mod scanner;
pub mod table;
pub mod value;

pub use catalog::Catalog;
pub use column::Column;
pub use data_type::DataType;
pub use database::Database;
pub use error::{DbError, Result};
pub use table::{ColumnDef, QueryResult, Schema, Table};
pub use value::Value;

/// Runs one command line against `catalog` and returns the text to display.
pub fn process(catalog: &mut Catalog, command: &str) -> String {
    catalog.process(command)
}
