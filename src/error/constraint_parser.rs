use std::sync::LazyLock;

use regex::Regex;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Extracts the table, column and offending value out of the constraint name
/// (`employees_email_key`) and the `Key (email)=(value)` detail line.
pub struct ConstraintParser;

/// Matches "Key (field)=(value)" in PostgreSQL messages
static KEY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").expect("key/value pattern is a valid regex")
});

/// Matches quoted table names in PostgreSQL messages
static TABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"table "([^"]+)""#).expect("table pattern is a valid regex")
});

/// Suffixes PostgreSQL appends to generated constraint names.
const CONSTRAINT_SUFFIXES: &[&str] = &["_key", "_pkey", "_fkey", "_check", "_unique"];

impl ConstraintParser {
    /// Parses a unique constraint violation into `(entity, field, value)`.
    ///
    /// The constraint name is preferred; the message and detail are searched
    /// for the `Key (..)=(..)` pair otherwise.
    pub fn parse_unique_violation(
        message: &str,
        details: Option<&str>,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let key_value = details
            .and_then(Self::extract_key_value)
            .or_else(|| Self::extract_key_value(message));

        if let Some((entity, field)) = constraint_name.and_then(Self::parse_constraint_name) {
            let value = key_value
                .map(|(_, value)| value)
                .unwrap_or_else(|| "duplicate_value".to_string());
            return Some((entity, field, value));
        }

        let (field, value) = key_value?;
        let entity = Self::extract_table(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Splits a generated constraint name such as `employees_email_key`
    /// into `("employees", "email")`.
    pub fn parse_constraint_name(constraint: &str) -> Option<(String, String)> {
        let stem = CONSTRAINT_SUFFIXES
            .iter()
            .find_map(|suffix| constraint.strip_suffix(suffix))?;
        let (table, column) = stem.split_once('_')?;
        if table.is_empty() || column.is_empty() {
            return None;
        }
        Some((table.to_string(), column.to_string()))
    }

    fn extract_key_value(text: &str) -> Option<(String, String)> {
        KEY_VALUE
            .captures(text)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
    }

    fn extract_table(text: &str) -> Option<String> {
        TABLE_NAME.captures(text).map(|caps| caps[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constraint_name() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("employees_email_key"),
            Some(("employees".to_string(), "email".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("employees_first_name_key"),
            Some(("employees".to_string(), "first_name".to_string()))
        );
        assert_eq!(ConstraintParser::parse_constraint_name("nonsense"), None);
        assert_eq!(ConstraintParser::parse_constraint_name("_key"), None);
    }

    #[test]
    fn test_unique_violation_from_detail() {
        let result = ConstraintParser::parse_unique_violation(
            "duplicate key value violates unique constraint \"employees_email_key\"",
            Some("Key (email)=(michael@gmail.com) already exists."),
            Some("employees_email_key"),
        );
        assert_eq!(
            result,
            Some((
                "employees".to_string(),
                "email".to_string(),
                "michael@gmail.com".to_string()
            ))
        );
    }

    #[test]
    fn test_unique_violation_without_constraint_name() {
        let result = ConstraintParser::parse_unique_violation(
            "duplicate key in table \"employees\"\nDETAIL: Key (email)=(a@b.c) already exists.",
            None,
            None,
        );
        assert_eq!(
            result,
            Some(("employees".to_string(), "email".to_string(), "a@b.c".to_string()))
        );
    }

    #[test]
    fn test_unique_violation_unparseable() {
        assert_eq!(
            ConstraintParser::parse_unique_violation("something went wrong", None, None),
            None
        );
    }
}
