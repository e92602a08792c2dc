/// A command that matched one of the grammar shapes.
///
/// Names and lists are carried exactly as written; whether they make sense
/// is decided when the statement runs against the catalog.
#[derive(Debug, PartialEq)]
pub enum Statement {
    CreateDatabase(String),
    ListDatabases,
    UseDatabase(String),
    CreateTable(CreateTable),
    ListTables,
    InsertInto(InsertInto),
    Select(Select),
}

#[derive(Debug, PartialEq)]
pub struct CreateTable {
    pub name: String,
    pub columns: Vec<String>,
    /// Declared type names, not yet validated.
    pub types: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub struct InsertInto {
    pub table: String,
    pub columns: Vec<String>,
    /// Raw value list, parsed against the schema on insert.
    pub values: String,
}

#[derive(Debug, PartialEq)]
pub struct Select {
    pub table: String,
    pub column: String,
    /// Everything after `=`.
    pub predicate: String,
}
