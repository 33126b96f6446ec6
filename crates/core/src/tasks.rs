//! Coercion rules for loosely-typed task fields.
//!
//! The task form sends `assignee` as whatever the select widget holds:
//! a JSON number, a numeric string, or an empty string for "nobody".
//! `dueDate` is either a `YYYY-MM-DD` string or empty. These helpers
//! normalize both before anything touches the database.

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

/// Normalize a raw `assignee` request value to an optional member ID.
///
/// Accepts a JSON number or a string that parses as an integer; every
/// other shape (empty string, non-numeric string, absent, null, bool,
/// array, ...) means "no assignee".
pub fn normalize_assignee(raw: Option<&Value>) -> Option<DbId> {
    match raw {
        Some(Value::Number(n)) => n.as_i64().and_then(|n| DbId::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<DbId>().ok(),
        _ => None,
    }
}

/// Normalize a raw `dueDate` request value to an optional date.
///
/// An absent, empty, or whitespace-only value means "no due date".
/// A non-empty value must be a valid `YYYY-MM-DD` date.
pub fn parse_due_date(raw: Option<&str>) -> Result<Option<NaiveDate>, CoreError> {
    match raw {
        Some(s) if !s.trim().is_empty() => {
            let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
                CoreError::Validation(format!("dueDate must be a YYYY-MM-DD date, got '{s}'"))
            })?;
            Ok(Some(date))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assignee_number_and_numeric_string_agree() {
        assert_eq!(normalize_assignee(Some(&json!(5))), Some(5));
        assert_eq!(normalize_assignee(Some(&json!("5"))), Some(5));
    }

    #[test]
    fn assignee_empty_or_junk_means_unassigned() {
        assert_eq!(normalize_assignee(Some(&json!(""))), None);
        assert_eq!(normalize_assignee(Some(&json!("  "))), None);
        assert_eq!(normalize_assignee(Some(&json!("bob"))), None);
        assert_eq!(normalize_assignee(Some(&json!(null))), None);
        assert_eq!(normalize_assignee(Some(&json!(true))), None);
        assert_eq!(normalize_assignee(None), None);
    }

    #[test]
    fn assignee_string_with_whitespace_parses() {
        assert_eq!(normalize_assignee(Some(&json!(" 12 "))), Some(12));
    }

    #[test]
    fn assignee_fractional_number_means_unassigned() {
        assert_eq!(normalize_assignee(Some(&json!(2.5))), None);
    }

    #[test]
    fn due_date_valid_string_parses() {
        let parsed = parse_due_date(Some("2025-03-01")).unwrap();
        assert_eq!(parsed, Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
    }

    #[test]
    fn due_date_empty_or_absent_is_none() {
        assert_eq!(parse_due_date(Some("")).unwrap(), None);
        assert_eq!(parse_due_date(Some("   ")).unwrap(), None);
        assert_eq!(parse_due_date(None).unwrap(), None);
    }

    #[test]
    fn due_date_garbage_is_rejected() {
        assert!(parse_due_date(Some("next tuesday")).is_err());
        assert!(parse_due_date(Some("2025-13-40")).is_err());
    }
}
