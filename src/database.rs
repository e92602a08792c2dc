use std::collections::HashMap;

use crate::error::{DbError, Result};
use crate::table::{Schema, Table};

/// A named set of tables. Tables keep the order in which they were created.
pub struct Database {
    pub name: String,
    tables: Vec<Table>,
    /// Table name to its index in `tables`.
    positions: HashMap<String, usize>,
}

impl Database {
    /// Creates a new, empty database.
    pub fn new(name: String) -> Self {
        Self {
            name,
            tables: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn has_table(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Adds a table built from `schema`.
    ///
    /// # Errors
    /// Returns [DbError::TableExists] if a table with the same name already exists.
    pub fn create_table(&mut self, name: String, schema: Schema) -> Result<()> {
        if self.has_table(&name) {
            return Err(DbError::TableExists);
        }
        self.positions.insert(name.clone(), self.tables.len());
        self.tables.push(Table::new(name, schema));
        Ok(())
    }

    /// Retrieves a reference to a table by name.
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.positions.get(name).map(|&idx| &self.tables[idx])
    }

    /// Retrieves a mutable reference to a table by name.
    pub fn get_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.positions.get(name).map(|&idx| &mut self.tables[idx])
    }

    /// Returns the names of all tables, in creation order.
    pub fn list_tables(&self) -> Vec<&str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}
