use crate::error::{Result, SiteCheckError};
use crate::types::SqlValue;

/// A parameterized query ready for execution.
/// Literal SQL text and caller-supplied values are kept strictly separate:
/// `text` uses PostgreSQL-style placeholders (`$1`, `$2`, ...) and every
/// placeholder `$i` has a corresponding entry at `params[i - 1]`.
///
/// Statements are built fresh per call and discarded after execution.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub text: String,
    pub params: Vec<SqlValue>,
}

/// Builds a [`Statement`] from literal fragments interleaved with values.
///
/// `fragments` must contain exactly one more entry than `values`; the
/// resulting text is `fragments[0] $1 fragments[1] $2 ... $n fragments[n]`.
/// Placeholder numbering is purely positional: a value used twice must be
/// passed twice and occupies two parameter slots.
///
/// Value content never enters `text`, which is what keeps the output safe
/// from injection. That guarantee only holds as long as callers put
/// untrusted input in `values`, never in `fragments` — the builder cannot
/// check fragment content, so this is a contract on call sites.
///
/// # Example
/// ```
/// use sitecheck::statement::build;
/// use sitecheck::types::SqlValue;
///
/// let stmt = build(
///     &["SELECT * FROM photos WHERE id = ", ""],
///     vec![SqlValue::Int32(42)],
/// ).unwrap();
/// assert_eq!(stmt.text, "SELECT * FROM photos WHERE id = $1");
/// ```
pub fn build(fragments: &[&str], values: Vec<SqlValue>) -> Result<Statement> {
    if fragments.len() != values.len() + 1 {
        return Err(SiteCheckError::MalformedTemplate {
            fragments: fragments.len(),
            values: values.len(),
        });
    }

    let mut text = String::with_capacity(256);
    text.push_str(fragments[0]);
    for (i, fragment) in fragments.iter().enumerate().skip(1) {
        text.push('$');
        text.push_str(&i.to_string());
        text.push_str(fragment);
    }

    Ok(Statement {
        text,
        params: values,
    })
}

/// Serialized forms for passing a string collection as a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayFormat {
    /// PostgreSQL array literal: `{a,b,c}`
    Braces,
    /// Quoted bracket list: `['a','b','c']`
    Brackets,
    /// Quoted parenthesis list: `('a','b','c')`
    Parentheses,
}

/// Converts a string collection to a single SQL-literal parameter value.
///
/// `None` input yields `None` rather than an empty-collection literal, so
/// callers can distinguish "no array" from "empty array" — an empty slice
/// yields `{}`, `[]`, or `()` depending on the format.
pub fn array_to_sql_literal<S: AsRef<str>>(
    values: Option<&[S]>,
    format: ArrayFormat,
) -> Option<String> {
    let values = values?;
    let joined = match format {
        ArrayFormat::Braces => values
            .iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(","),
        ArrayFormat::Brackets | ArrayFormat::Parentheses => values
            .iter()
            .map(|v| format!("'{}'", v.as_ref()))
            .collect::<Vec<_>>()
            .join(","),
    };
    Some(match format {
        ArrayFormat::Braces => format!("{{{}}}", joined),
        ArrayFormat::Brackets => format!("[{}]", joined),
        ArrayFormat::Parentheses => format!("({})", joined),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_no_values() {
        let stmt = build(&["SELECT 1"], vec![]).unwrap();
        assert_eq!(stmt.text, "SELECT 1");
        assert!(stmt.params.is_empty());
    }

    #[test]
    fn test_build_single_value() {
        let stmt = build(
            &["SELECT * FROM t WHERE id = ", ""],
            vec![SqlValue::Int32(42)],
        )
        .unwrap();
        assert_eq!(stmt.text, "SELECT * FROM t WHERE id = $1");
        assert_eq!(stmt.params, vec![SqlValue::Int32(42)]);
    }

    #[test]
    fn test_build_placeholders_increase_in_order() {
        let stmt = build(
            &["UPDATE t SET a = ", ", b = ", " WHERE c = ", ""],
            vec!["x".into(), true.into(), SqlValue::Null],
        )
        .unwrap();
        assert_eq!(stmt.text, "UPDATE t SET a = $1, b = $2 WHERE c = $3");
        assert_eq!(stmt.params.len(), 3);
    }

    #[test]
    fn test_build_repeated_value_not_deduplicated() {
        let stmt = build(
            &["SELECT * FROM t WHERE a = ", " OR b = ", ""],
            vec!["dup".into(), "dup".into()],
        )
        .unwrap();
        assert_eq!(stmt.text, "SELECT * FROM t WHERE a = $1 OR b = $2");
        assert_eq!(stmt.params.len(), 2);
    }

    #[test]
    fn test_build_value_content_stays_out_of_text() {
        let stmt = build(
            &["SELECT * FROM t WHERE name = ", ""],
            vec!["'; DROP TABLE t; --".into()],
        )
        .unwrap();
        assert!(!stmt.text.contains("DROP TABLE"));
        assert_eq!(stmt.params.len(), 1);
    }

    #[test]
    fn test_build_too_few_fragments() {
        let err = build(&["SELECT "], vec![SqlValue::Int32(1)]).unwrap_err();
        match err {
            SiteCheckError::MalformedTemplate { fragments, values } => {
                assert_eq!(fragments, 1);
                assert_eq!(values, 1);
            }
            _ => panic!("Expected MalformedTemplate error"),
        }
    }

    #[test]
    fn test_build_too_many_fragments() {
        let err = build(&["a", "b", "c"], vec![SqlValue::Int32(1)]).unwrap_err();
        assert!(matches!(err, SiteCheckError::MalformedTemplate { .. }));
    }

    #[test]
    fn test_build_empty_fragments() {
        let err = build(&[], vec![]).unwrap_err();
        assert!(matches!(err, SiteCheckError::MalformedTemplate { .. }));
    }

    #[test]
    fn test_array_literal_braces() {
        let result = array_to_sql_literal(Some(&["a", "b"]), ArrayFormat::Braces);
        assert_eq!(result.as_deref(), Some("{a,b}"));
    }

    #[test]
    fn test_array_literal_brackets() {
        let result = array_to_sql_literal(Some(&["a", "b"]), ArrayFormat::Brackets);
        assert_eq!(result.as_deref(), Some("['a','b']"));
    }

    #[test]
    fn test_array_literal_parentheses() {
        let result = array_to_sql_literal(Some(&["a", "b"]), ArrayFormat::Parentheses);
        assert_eq!(result.as_deref(), Some("('a','b')"));
    }

    #[test]
    fn test_array_literal_none_input() {
        for format in [
            ArrayFormat::Braces,
            ArrayFormat::Brackets,
            ArrayFormat::Parentheses,
        ] {
            assert_eq!(array_to_sql_literal::<&str>(None, format), None);
        }
    }

    #[test]
    fn test_array_literal_empty_is_not_none() {
        let empty: &[&str] = &[];
        assert_eq!(
            array_to_sql_literal(Some(empty), ArrayFormat::Braces).as_deref(),
            Some("{}")
        );
        assert_eq!(
            array_to_sql_literal(Some(empty), ArrayFormat::Brackets).as_deref(),
            Some("[]")
        );
        assert_eq!(
            array_to_sql_literal(Some(empty), ArrayFormat::Parentheses).as_deref(),
            Some("()")
        );
    }
}
