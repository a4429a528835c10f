//! The identifier-safety predicate that gates every string interpolated
//! into DDL.

/// `true` iff `s` matches `^[A-Za-z0-9_]+$`.
///
/// Deliberately conservative: it rejects some strings that would in
/// fact be safe SQL identifiers (names with hyphens, for instance)
/// because the alternative -- full identifier quoting and escaping --
/// is easy to get wrong. Anything that must become part of a `CREATE
/// TABLE` or column name is checked against this before any DDL runs.
pub fn is_sql_safe(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumeric_and_underscore() {
        for s in ["Issue", "title", "a", "field_123", "___", "A1_b2"] {
            assert!(is_sql_safe(s), "expected safe: {s}");
        }
    }

    #[test]
    fn rejects_empty_and_unsafe() {
        for s in [
            "",
            "Issue; DROP TABLE objects;--",
            "has-dash",
            "has space",
            "qu\"ote",
            "semi;colon",
        ] {
            assert!(!is_sql_safe(s), "expected unsafe: {s}");
        }
    }
}
