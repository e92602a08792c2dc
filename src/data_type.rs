use std::str::FromStr;

use crate::error::DbError;

/// Represents the supported data types in a table schema.
/// A column's type is fixed when the table is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// A 64-bit signed integer, declared as `int`.
    Int,
    /// A UTF-8 character string, declared as `varchar`.
    Text,
}

impl FromStr for DataType {
    type Err = DbError;

    /// Parses a declared column type. Matching is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "int" => Ok(DataType::Int),
            "varchar" => Ok(DataType::Text),
            _ => Err(DbError::InvalidColumnType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_type() {
        assert_eq!("int".parse::<DataType>(), Ok(DataType::Int));
        assert_eq!("INT".parse::<DataType>(), Ok(DataType::Int));
        assert_eq!("VarChar".parse::<DataType>(), Ok(DataType::Text));
    }

    #[test]
    fn test_parse_unknown_type() {
        assert_eq!("float".parse::<DataType>(), Err(DbError::InvalidColumnType));
        assert_eq!("text".parse::<DataType>(), Err(DbError::InvalidColumnType));
        assert_eq!("".parse::<DataType>(), Err(DbError::InvalidColumnType));
    }
}
