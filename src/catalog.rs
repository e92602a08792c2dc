use crate::{
    ast::{CreateTable, InsertInto, Select, Statement},
    database::Database,
    error::{DbError, Result},
    parser,
    table::{QueryResult, Schema},
};
use std::collections::HashMap;

/// Output of a command that matches none of the grammar shapes.
pub const INVALID_COMMAND: &str = "Invalid command";

/// The main entry point of the store.
/// It owns every database and tracks the one commands currently apply to.
#[derive(Default)]
pub struct Catalog {
    /// Databases in creation order.
    databases: Vec<Database>,
    /// Database name to its index in `databases`.
    positions: HashMap<String, usize>,
    /// Index of the database selected by `use database`.
    current: Option<usize>,
}

impl Catalog {
    /// Creates a new, empty catalog with no current database.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database_exists(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Adds an empty database. The current selection is left unchanged.
    ///
    /// # Errors
    /// Returns [DbError::DatabaseExists] if the name is taken.
    pub fn create_database(&mut self, name: String) -> Result<()> {
        if self.database_exists(&name) {
            return Err(DbError::DatabaseExists);
        }
        self.positions.insert(name.clone(), self.databases.len());
        self.databases.push(Database::new(name));
        Ok(())
    }

    /// Returns all database names, in creation order.
    pub fn list_database_names(&self) -> Vec<&str> {
        self.databases.iter().map(|db| db.name.as_str()).collect()
    }

    /// Makes `name` the current database.
    ///
    /// # Errors
    /// Returns [DbError::InvalidDatabase] if there is no such database; the
    /// previous selection is kept.
    pub fn use_database(&mut self, name: &str) -> Result<()> {
        let idx = self
            .positions
            .get(name)
            .copied()
            .ok_or(DbError::InvalidDatabase)?;
        self.current = Some(idx);
        Ok(())
    }

    /// Returns the current database, if one is selected.
    pub fn current_database(&self) -> Option<&Database> {
        self.current.map(|idx| &self.databases[idx])
    }

    fn current(&self) -> Result<&Database> {
        self.current_database().ok_or(DbError::DatabaseNotSet)
    }

    fn current_mut(&mut self) -> Result<&mut Database> {
        let idx = self.current.ok_or(DbError::DatabaseNotSet)?;
        Ok(&mut self.databases[idx])
    }

    /// Creates a table in the current database.
    ///
    /// # Errors
    /// [DbError::DatabaseNotSet], [DbError::TableExists], or any schema error
    /// from [Schema::new].
    pub fn create_table<N, T>(
        &mut self,
        name: &str,
        col_names: &[N],
        col_types: &[T],
    ) -> Result<()>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        let db = self.current_mut()?;
        if db.has_table(name) {
            return Err(DbError::TableExists);
        }
        let schema = Schema::new(col_names, col_types)?;
        db.create_table(name.to_string(), schema)
    }

    /// Returns the table names of the current database, in creation order.
    ///
    /// # Errors
    /// Returns [DbError::DatabaseNotSet] if no database is selected.
    pub fn list_current_tables(&self) -> Result<Vec<&str>> {
        Ok(self.current()?.list_tables())
    }

    /// Inserts a row into `table` of the current database.
    ///
    /// # Errors
    /// [DbError::DatabaseNotSet], [DbError::TableNotExist], or any error from
    /// [crate::Table::insert].
    pub fn insert_row<N: AsRef<str>>(
        &mut self,
        table: &str,
        col_names: &[N],
        values: &str,
    ) -> Result<()> {
        self.current_mut()?
            .get_table_mut(table)
            .ok_or(DbError::TableNotExist)?
            .insert(col_names, values)
    }

    /// Selects rows from `table` of the current database.
    ///
    /// # Errors
    /// [DbError::DatabaseNotSet], [DbError::TableNotExist], or any error from
    /// [crate::Table::select].
    pub fn select_rows(&self, table: &str, column: &str, predicate: &str) -> Result<QueryResult> {
        self.current()?
            .get_table(table)
            .ok_or(DbError::TableNotExist)?
            .select(column, predicate)
    }

    /// Runs a recognized statement and returns its output text.
    ///
    /// # Errors
    /// Returns the domain error raised by the catalog or the table.
    pub fn execute(&mut self, statement: Statement) -> Result<String> {
        let output = match statement {
            Statement::CreateDatabase(name) => {
                self.create_database(name)?;
                "Database created".to_string()
            }
            Statement::ListDatabases => join_or(self.list_database_names(), "No databases"),
            Statement::UseDatabase(name) => {
                self.use_database(&name)?;
                format!("Current database {name}")
            }
            Statement::CreateTable(CreateTable {
                name,
                columns,
                types,
            }) => {
                self.create_table(&name, &columns, &types)?;
                "Table created".to_string()
            }
            Statement::ListTables => join_or(self.list_current_tables()?, "No tables"),
            Statement::InsertInto(InsertInto {
                table,
                columns,
                values,
            }) => {
                self.insert_row(&table, &columns, &values)?;
                "Inserted into table".to_string()
            }
            Statement::Select(Select {
                table,
                column,
                predicate,
            }) => self.select_rows(&table, &column, &predicate)?.to_string(),
        };
        Ok(output)
    }

    /// Processes one command line and returns the text to show for it.
    ///
    /// Never fails: a command with no recognizable shape yields
    /// [INVALID_COMMAND] and a domain error yields its message.
    ///
    /// # Example
    /// ```
    /// use datastore::Catalog;
    ///
    /// let mut catalog = Catalog::new();
    /// assert_eq!(catalog.process("create database db"), "Database created");
    /// assert_eq!(catalog.process("use database db"), "Current database db");
    /// assert_eq!(catalog.process("create table tb (a b, int int)"), "Table created");
    /// assert_eq!(catalog.process("insert into tb (a b, 4 5)"), "Inserted into table");
    /// assert_eq!(catalog.process("select * from tb where a = 4"), "a,b\n4,5");
    /// assert_eq!(catalog.process("drop table tb"), "Invalid command");
    /// ```
    pub fn process(&mut self, command: &str) -> String {
        match parser::parse(command) {
            Some(statement) => self
                .execute(statement)
                .unwrap_or_else(|err| err.to_string()),
            None => INVALID_COMMAND.to_string(),
        }
    }
}

fn join_or(names: Vec<&str>, empty: &str) -> String {
    if names.is_empty() {
        empty.to_string()
    } else {
        names.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn catalog_with_db() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.create_database("db".into()).unwrap();
        catalog.use_database("db").unwrap();
        catalog
    }

    #[test]
    fn test_create_and_list_databases() {
        let mut catalog = Catalog::new();

        assert!(catalog.list_database_names().is_empty());
        catalog.create_database("zoo".into()).unwrap();
        catalog.create_database("app".into()).unwrap();

        assert!(catalog.database_exists("zoo"));
        assert!(!catalog.database_exists("nope"));
        assert_eq!(catalog.list_database_names(), vec!["zoo", "app"]);
        assert_eq!(
            catalog.create_database("zoo".into()),
            Err(DbError::DatabaseExists)
        );
        // creating does not select
        assert!(catalog.current_database().is_none());
    }

    #[test]
    fn test_use_unknown_database_keeps_selection() {
        let mut catalog = catalog_with_db();

        assert_eq!(catalog.use_database("other"), Err(DbError::InvalidDatabase));
        assert_eq!(catalog.current_database().map(|db| db.name.as_str()), Some("db"));
    }

    #[test]
    fn test_switch_database() {
        let mut catalog = catalog_with_db();
        catalog.create_table("tb", &["a"], &["int"]).unwrap();
        catalog.create_database("other".into()).unwrap();
        catalog.use_database("other").unwrap();

        assert_eq!(catalog.list_current_tables(), Ok(vec![]));
        assert_eq!(
            catalog.insert_row("tb", &["a"], "1"),
            Err(DbError::TableNotExist)
        );

        catalog.use_database("db").unwrap();
        assert_eq!(catalog.list_current_tables(), Ok(vec!["tb"]));
    }

    #[test]
    fn test_operations_need_current_database() {
        let mut catalog = Catalog::new();

        assert_eq!(
            catalog.create_table("tb", &["a"], &["int"]),
            Err(DbError::DatabaseNotSet)
        );
        assert_eq!(catalog.list_current_tables(), Err(DbError::DatabaseNotSet));
        assert_eq!(
            catalog.insert_row("tb", &["a"], "1"),
            Err(DbError::DatabaseNotSet)
        );
        assert_eq!(
            catalog.select_rows("tb", "a", "1"),
            Err(DbError::DatabaseNotSet)
        );
    }

    #[test]
    fn test_table_exists_checked_before_schema() {
        let mut catalog = catalog_with_db();
        catalog.create_table("tb", &["a"], &["int"]).unwrap();

        assert_eq!(
            catalog.create_table("tb", &["a", "a"], &["int", "int"]),
            Err(DbError::TableExists)
        );
        assert_eq!(
            catalog.create_table("tb2", &["a", "a"], &["int", "int"]),
            Err(DbError::DuplicateColumn)
        );
        assert_eq!(catalog.list_current_tables(), Ok(vec!["tb"]));
    }

    #[test]
    fn test_insert_and_select_rows() {
        let mut catalog = catalog_with_db();
        catalog
            .create_table("tb", &["a", "b"], &["int", "varchar"])
            .unwrap();
        catalog.insert_row("tb", &["a", "b"], "4 'col b'").unwrap();

        let result = catalog.select_rows("tb", "a", " 4").unwrap();
        assert_eq!(result.columns, vec!["a", "b"]);
        assert_eq!(
            result.rows,
            vec![vec![Value::Int(4), Value::Text("col b".into())]]
        );
        assert_eq!(
            catalog.select_rows("missing", "a", "4"),
            Err(DbError::TableNotExist)
        );
    }

    #[test]
    fn test_process_renders_outputs() {
        let mut catalog = Catalog::new();

        assert_eq!(catalog.process("list databases"), "No databases");
        assert_eq!(catalog.process("create database db"), "Database created");
        assert_eq!(catalog.process("create database db2"), "Database created");
        assert_eq!(catalog.process("list databases"), "db db2");
        assert_eq!(catalog.process("use database db2"), "Current database db2");
        assert_eq!(catalog.process("list tables"), "No tables");
        assert_eq!(catalog.process("create table t1 (a, int)"), "Table created");
        assert_eq!(catalog.process("create table t2 (a, int)"), "Table created");
        assert_eq!(catalog.process("list tables"), "t1 t2");
    }

    #[test]
    fn test_process_error_stops_dispatch() {
        let mut catalog = Catalog::new();

        // the shape matches, so the domain error is the answer
        assert_eq!(catalog.process("use database nope"), "Invalid database");
        assert_eq!(catalog.process("select * from tb where a = 1"), "Database not set");
        assert_eq!(catalog.process("use databases nope"), INVALID_COMMAND);
    }
}
