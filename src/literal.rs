//! Parsing of literals at the head of an insert value list.

use crate::data_type::DataType;
use crate::error::{DbError, Result};
use crate::value::Value;

/// Consumes one literal of type `data_type` from the very start of `input`.
///
/// Returns the parsed value together with the rest of the buffer, trimmed of
/// surrounding whitespace so the next literal starts at its first character.
///
/// - `Int`: an optional `-` followed by one or more ASCII digits.
/// - `Text`: a single-quoted literal. The first `'` after the opening one
///   closes it; there is no escaping.
///
/// # Errors
/// [DbError::InvalidNumber] or [DbError::InvalidString] when the buffer does
/// not start with a literal of the requested type.
///
/// # Example
/// ```
/// # use datastore::{DataType, Value};
/// # use datastore::literal::parse_literal;
/// let (value, rest) = parse_literal("-45 'dog'", DataType::Int).unwrap();
/// assert_eq!(value, Value::Int(-45));
/// assert_eq!(rest, "'dog'");
/// ```
pub fn parse_literal(input: &str, data_type: DataType) -> Result<(Value, &str)> {
    match data_type {
        DataType::Int => parse_int(input),
        DataType::Text => parse_text(input).ok_or(DbError::InvalidString),
    }
}

fn parse_int(input: &str) -> Result<(Value, &str)> {
    let sign_len = usize::from(input.starts_with('-'));
    let digits = input[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return Err(DbError::InvalidNumber);
    }

    let (number, rest) = input.split_at(sign_len + digits);
    // the digit run is well formed, only overflow can fail here
    let number = number
        .parse::<i64>()
        .map_err(|_| DbError::InvalidNumber)?;

    Ok((Value::Int(number), rest.trim()))
}

/// Returns the content of the quoted literal at the start of `input` and the
/// trimmed remainder, or `None` if `input` does not start with one.
fn parse_text(input: &str) -> Option<(Value, &str)> {
    let body = input.strip_prefix('\'')?;
    let end = body.find('\'')?;

    Some((Value::Text(body[..end].into()), body[end + 1..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(
            parse_literal("4 5", DataType::Int),
            Ok((Value::Int(4), "5"))
        );
        assert_eq!(parse_literal("-12", DataType::Int), Ok((Value::Int(-12), "")));
        assert_eq!(
            parse_literal("007   'x' ", DataType::Int),
            Ok((Value::Int(7), "'x'"))
        );
    }

    #[test]
    fn test_parse_int_needs_leading_digits() {
        assert_eq!(
            parse_literal("'hello'", DataType::Int),
            Err(DbError::InvalidNumber)
        );
        assert_eq!(parse_literal(" 4", DataType::Int), Err(DbError::InvalidNumber));
        assert_eq!(parse_literal("-", DataType::Int), Err(DbError::InvalidNumber));
        assert_eq!(parse_literal("+4", DataType::Int), Err(DbError::InvalidNumber));
        assert_eq!(parse_literal("", DataType::Int), Err(DbError::InvalidNumber));
    }

    #[test]
    fn test_parse_int_overflow() {
        assert_eq!(
            parse_literal("99999999999999999999", DataType::Int),
            Err(DbError::InvalidNumber)
        );
    }

    #[test]
    fn test_parse_int_stops_at_non_digit() {
        // the rest is handed back untouched apart from trimming
        assert_eq!(
            parse_literal("45'dog'", DataType::Int),
            Ok((Value::Int(45), "'dog'"))
        );
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(
            parse_literal("'a val' 'b val'", DataType::Text),
            Ok((Value::Text("a val".into()), "'b val'"))
        );
        assert_eq!(
            parse_literal("''", DataType::Text),
            Ok((Value::Text("".into()), ""))
        );
    }

    #[test]
    fn test_parse_text_closes_on_first_quote() {
        assert_eq!(
            parse_literal("'it's'", DataType::Text),
            Ok((Value::Text("it".into()), "s'"))
        );
    }

    #[test]
    fn test_parse_text_errors() {
        assert_eq!(parse_literal("45", DataType::Text), Err(DbError::InvalidString));
        assert_eq!(
            parse_literal("'unterminated", DataType::Text),
            Err(DbError::InvalidString)
        );
        assert_eq!(
            parse_literal(" 'late'", DataType::Text),
            Err(DbError::InvalidString)
        );
    }
}
