//! Status lookups over untyped JSON values.
//!
//! Input arriving from a config file or a request body has not been through Rust’s type checker,
//! so a key may turn up as a number or a code as `null`. The lookups here report that as
//! `Error::InvalidArgument`; the predicates answer `false` instead, so they stay safe to branch on.
//!
//! ```rust
//! use serde_json::json;
//! use httpstatus::dynamic;
//!
//! assert_eq!(dynamic::get_status_code(&json!("NOT_FOUND")).unwrap(), 404);
//! assert!(dynamic::get_status_code(&json!(404)).is_err());
//! assert!(dynamic::is_deprecated_status_code(&json!(102)));
//! assert!(!dynamic::is_deprecated_status_code(&json!("102")));
//! ```

use serde_json::{Number, Value};

use crate::class;
use crate::error::{Error, Result};
use crate::lookup;

fn received(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Interpret a JSON number as a status code.
///
/// Integral floats such as `404.0` count; fractions, negatives and anything beyond `u16` do not.
fn code_from_number(n: &Number) -> Option<u16> {
    if let Some(n) = n.as_u64() {
        return u16::try_from(n).ok();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&f) => Some(f as u16),
        _ => None,
    }
}

fn as_code(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => code_from_number(n),
        _ => None,
    }
}

/// `lookup::get_status_code` for a value that ought to be a key string.
pub fn get_status_code(value: &Value) -> Result<u16> {
    match value {
        Value::String(key) => lookup::get_status_code(key),
        other => Err(Error::InvalidArgument {
            what: "phrase",
            expected: "string",
            received: received(other),
        }),
    }
}

/// `lookup::get_status_phrase` for a value that ought to be a code or a key.
///
/// Numbers that cannot be a status code at all (`404.5`, `-1`, `70000`) are unknown rather than
/// invalid: they are of the right type, they just name nothing.
pub fn get_status_phrase(value: &Value) -> Result<&'static str> {
    match value {
        Value::String(key) => lookup::get_status_phrase_by_key(key),
        Value::Number(n) => match code_from_number(n) {
            Some(code) => lookup::get_status_phrase_by_code(code),
            None => Err(Error::unknown_code(n)),
        },
        other => Err(Error::InvalidArgument {
            what: "code",
            expected: "number or string",
            received: received(other),
        }),
    }
}

macro_rules! value_predicates {
    ($($(#[$doc:meta])* $name:ident => $typed:path;)*) => {
        $(
            $(#[$doc])*
            ///
            /// Anything that is not a number usable as a status code yields `false`.
            pub fn $name(value: &Value) -> bool {
                as_code(value).is_some_and($typed)
            }
        )*
    }
}

value_predicates! {
    /// `lookup::is_deprecated_status_code` over a JSON value.
    is_deprecated_status_code => lookup::is_deprecated_status_code;
    /// `lookup::is_experimental_status_code` over a JSON value.
    is_experimental_status_code => lookup::is_experimental_status_code;
    /// `class::is_info_status_code` over a JSON value.
    is_info_status_code => class::is_info_status_code;
    /// `class::is_success_status_code` over a JSON value.
    is_success_status_code => class::is_success_status_code;
    /// `class::is_redirect_status_code` over a JSON value.
    is_redirect_status_code => class::is_redirect_status_code;
    /// `class::is_client_error_status_code` over a JSON value.
    is_client_error_status_code => class::is_client_error_status_code;
    /// `class::is_server_error_status_code` over a JSON value.
    is_server_error_status_code => class::is_server_error_status_code;
    /// `class::is_contentless_status_code` over a JSON value.
    is_contentless_status_code => class::is_contentless_status_code;
}

/// `class::is_contentful_status_code` over a JSON value.
///
/// Exactly the negation of `is_contentless_status_code`, so non-numbers are contentful.
pub fn is_contentful_status_code(value: &Value) -> bool {
    !is_contentless_status_code(value)
}
