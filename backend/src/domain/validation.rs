//! Argument checks for values that arrive untyped.
//!
//! Request bodies reach the domain as JSON, so a field that should hold a
//! string may be absent, `null`, a number, a boolean, or a structure. These
//! checks run before any repository is touched and report the offending value
//! by its literal rendering, e.g. `1 is not a string` or
//! `undefined is not a string`.

use serde_json::Value;

use super::Error;

/// Render an untyped value the way it is quoted in argument type errors.
///
/// Absent values render as `undefined`, arrays join their elements with
/// commas (`null` elements render empty) and objects render as
/// `[object Object]`.
///
/// # Examples
/// ```
/// use cookbook::domain::validation::literal;
/// use serde_json::json;
///
/// assert_eq!(literal(None), "undefined");
/// assert_eq!(literal(Some(&json!(1))), "1");
/// assert_eq!(literal(Some(&json!([1, null, "a"]))), "1,,a");
/// ```
pub fn literal(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_owned(),
        Some(Value::Null) => "null".to_owned(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => render_number(number),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => literal(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_owned(),
    }
}

fn render_number(number: &serde_json::Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(float) => render_float(float),
        None => number.to_string(),
    }
}

/// Shortest round-trip rendering; magnitudes from `1e21` up and below `1e-6`
/// switch to exponent form with an explicit exponent sign (`1e+21`, `1e-7`).
fn render_float(float: f64) -> String {
    // Float `Display` already drops a trailing `.0`; only `-0` differs.
    if float == 0.0 {
        return "0".to_owned();
    }
    let magnitude = float.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent_form = format!("{float:e}");
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponent_form,
        };
    }
    float.to_string()
}

/// Require `value` to be a JSON string and return it unchanged.
///
/// # Errors
/// Returns an argument type error naming the literal value otherwise.
pub fn require_string(value: Option<&Value>) -> Result<String, Error> {
    match value {
        Some(Value::String(text)) => Ok(text.clone()),
        other => Err(Error::argument_type(literal(other))),
    }
}

/// Search arguments after their type has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArguments {
    pub query: String,
    pub user_id: String,
}

/// Check both search arguments, the user identifier first.
///
/// # Errors
/// Returns the argument type error of the first argument that is not a
/// string.
pub fn validate_search_arguments(
    query: Option<&Value>,
    user_id: Option<&Value>,
) -> Result<SearchArguments, Error> {
    let user_id = require_string(user_id)?;
    let query = require_string(query)?;
    Ok(SearchArguments { query, user_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorClass, ErrorCode};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(None, "undefined")]
    #[case(Some(json!(null)), "null")]
    #[case(Some(json!(true)), "true")]
    #[case(Some(json!(false)), "false")]
    #[case(Some(json!(1)), "1")]
    #[case(Some(json!(-7)), "-7")]
    #[case(Some(json!(1.5)), "1.5")]
    #[case(Some(json!(2.0)), "2")]
    #[case(Some(json!(-0.0)), "0")]
    #[case(Some(json!(1e21)), "1e+21")]
    #[case(Some(json!(-2.5e22)), "-2.5e+22")]
    #[case(Some(json!(1.5e-7)), "1.5e-7")]
    #[case(Some(json!(1e20)), "100000000000000000000")]
    #[case(Some(json!(0.000001)), "0.000001")]
    #[case(Some(json!([])), "")]
    #[case(Some(json!([1, [2, 3]])), "1,2,3")]
    #[case(Some(json!({ "a": 1 })), "[object Object]")]
    fn renders_literals(#[case] value: Option<Value>, #[case] expected: &str) {
        assert_eq!(literal(value.as_ref()), expected);
    }

    #[rstest]
    #[case(None, "undefined is not a string")]
    #[case(Some(json!(1)), "1 is not a string")]
    #[case(Some(json!(null)), "null is not a string")]
    #[case(Some(json!(true)), "true is not a string")]
    fn non_strings_are_rejected(#[case] value: Option<Value>, #[case] message: &str) {
        let err = require_string(value.as_ref()).expect_err("not a string");
        assert_eq!(err.message(), message);
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.class(), Some(ErrorClass::ArgumentType));
    }

    #[rstest]
    fn empty_string_is_still_a_string() {
        assert_eq!(require_string(Some(&json!(""))), Ok(String::new()));
    }

    #[rstest]
    fn user_id_is_checked_before_query() {
        let err = validate_search_arguments(Some(&json!(1)), Some(&json!(true)))
            .expect_err("both invalid");
        assert_eq!(err.message(), "true is not a string");
    }

    #[rstest]
    fn query_is_checked_when_user_id_is_valid() {
        let err = validate_search_arguments(None, Some(&json!("u")))
            .expect_err("query invalid");
        assert_eq!(err.message(), "undefined is not a string");
    }

    #[rstest]
    fn strings_pass_through_untouched() {
        let args = validate_search_arguments(Some(&json!(" Maria ")), Some(&json!("u")))
            .expect("valid");
        assert_eq!(
            args,
            SearchArguments {
                query: " Maria ".into(),
                user_id: "u".into()
            }
        );
    }
}
