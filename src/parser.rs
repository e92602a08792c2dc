//! Command recognizers.
//!
//! Each recognizer matches the whole command against one fixed shape and
//! extracts its parts. Matching is purely structural: a recognizer never
//! looks at the catalog, so `use database nope` is a valid `use` command that
//! only fails when executed.

use crate::ast::{CreateTable, InsertInto, Select, Statement};
use crate::scanner::{Scanner, is_alphanumeric, is_word_char};

/// A recognizer returns `None` when the command does not have its shape.
pub type Recognizer = fn(&str) -> Option<Statement>;

/// The grammar, in the order the shapes are tried.
pub const GRAMMAR: [Recognizer; 7] = [
    create_database,
    list_databases,
    use_database,
    create_table,
    list_tables,
    insert_into,
    select,
];

/// Matches `command` against every shape in order and returns the first match.
///
/// # Example
/// ```
/// # use datastore::parser::parse;
/// # use datastore::ast::Statement;
/// assert_eq!(parse("LIST  tables"), Some(Statement::ListTables));
/// assert_eq!(parse("list tables s"), None);
/// ```
pub fn parse(command: &str) -> Option<Statement> {
    let command = command.trim();
    GRAMMAR.iter().find_map(|recognize| recognize(command))
}

/// `create database <name>`
fn create_database(command: &str) -> Option<Statement> {
    let mut s = Scanner::new(command);
    s.keyword("create")?;
    s.spaces1()?;
    s.keyword("database")?;
    s.spaces1()?;
    let name = s.take_while1(is_word_char)?;
    s.end()?;
    Some(Statement::CreateDatabase(name))
}

/// `list databases`
fn list_databases(command: &str) -> Option<Statement> {
    let mut s = Scanner::new(command);
    s.keyword("list")?;
    s.spaces1()?;
    s.keyword("databases")?;
    s.end()?;
    Some(Statement::ListDatabases)
}

/// `use database <name>`
fn use_database(command: &str) -> Option<Statement> {
    let mut s = Scanner::new(command);
    s.keyword("use")?;
    s.spaces1()?;
    s.keyword("database")?;
    s.spaces1()?;
    let name = s.take_while1(is_word_char)?;
    s.end()?;
    Some(Statement::UseDatabase(name))
}

/// `create table <name> (<col names>, <col types>)`
fn create_table(command: &str) -> Option<Statement> {
    let mut s = Scanner::new(command);
    s.keyword("create")?;
    s.spaces1()?;
    s.keyword("table")?;
    s.spaces1()?;
    let name = s.take_while1(is_alphanumeric)?;
    let (columns, types) = parenthesized_pair(&mut s)?;
    Some(Statement::CreateTable(CreateTable {
        name,
        columns: split_list(columns),
        types: split_list(types),
    }))
}

/// `list tables`
fn list_tables(command: &str) -> Option<Statement> {
    let mut s = Scanner::new(command);
    s.keyword("list")?;
    s.spaces1()?;
    s.keyword("tables")?;
    s.end()?;
    Some(Statement::ListTables)
}

/// `insert into <name> (<col names>, <values>)`
fn insert_into(command: &str) -> Option<Statement> {
    let mut s = Scanner::new(command);
    s.keyword("insert")?;
    s.spaces1()?;
    s.keyword("into")?;
    s.spaces1()?;
    let table = s.take_while1(is_alphanumeric)?;
    let (columns, values) = parenthesized_pair(&mut s)?;
    Some(Statement::InsertInto(InsertInto {
        table,
        columns: split_list(columns),
        values: values.to_string(),
    }))
}

/// `select * from <name> where <col name> = <predicate>`
fn select(command: &str) -> Option<Statement> {
    let mut s = Scanner::new(command);
    s.keyword("select")?;
    s.spaces1()?;
    s.char('*')?;
    s.spaces1()?;
    s.keyword("from")?;
    s.spaces1()?;
    let table = s.take_while1(is_alphanumeric)?;
    s.spaces1()?;
    s.keyword("where")?;
    s.spaces1()?;
    let column = s.take_while1(is_alphanumeric)?;
    s.spaces();
    s.char('=')?;
    Some(Statement::Select(Select {
        table,
        column,
        predicate: s.rest(),
    }))
}

/// Matches `(<left>, <right>)` closing the command and returns both sides.
///
/// The body is split at the last comma that leaves two non-empty sides, so
/// the right side never contains a comma unless it has to.
fn parenthesized_pair(s: &mut Scanner) -> Option<(String, String)> {
    s.spaces();
    s.char('(')?;
    let rest = s.rest();
    let body = rest.trim_end_matches(' ').strip_suffix(')')?;

    body.rmatch_indices(',').find_map(|(comma, _)| {
        let left = list_group(&body[..comma])?;
        let right = list_group(&body[comma + 1..])?;
        Some((left.to_string(), right.to_string()))
    })
}

/// Drops the spaces leading a list, keeping one if the list is nothing else.
fn list_group(text: &str) -> Option<&str> {
    if text.is_empty() {
        return None;
    }
    match text.trim_start_matches(' ') {
        "" => Some(&text[text.len() - 1..]),
        trimmed => Some(trimmed),
    }
}

/// Splits a list on single spaces. Empty items are kept.
fn split_list(list: String) -> Vec<String> {
    list.split(' ').map(str::to_string).collect()
}
