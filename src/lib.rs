//! HTTP status codes and phrases, looked up in either direction.
//!
//! Every registered status has a numeric code, a canonical phrase and a symbolic key derived from
//! the phrase (`"Not Found"` becomes `NOT_FOUND`). You can go from any of them to the others, and
//! classify codes without needing them to be registered at all:
//!
//! ```rust
//! use httpstatus::{codes, get_status_code, get_status_phrase, is_success_status_code};
//!
//! assert_eq!(get_status_code("NOT_FOUND").unwrap(), 404);
//! assert_eq!(get_status_phrase(404).unwrap(), "Not Found");
//! assert_eq!(get_status_phrase("IM_A_TEAPOT").unwrap(), "I'm a teapot");
//! assert_eq!(codes::IM_A_TEAPOT, 418);
//! assert!(is_success_status_code(250));
//! ```
//!
//! Lookups return `Result`; the `is_*` predicates return `bool` and never fail. The `dynamic`
//! module (enabled by the default `serde` feature) offers the same operations over
//! `serde_json::Value`, for input whose type is not known in advance.

#![warn(non_upper_case_globals, missing_docs, unused_results)]

mod registry;

pub mod class;
pub mod error;
pub mod lookup;
pub mod table;

#[cfg(feature = "serde")]
pub mod dynamic;

pub use crate::class::{
    is_client_error_status_code, is_contentful_status_code, is_contentless_status_code,
    is_info_status_code, is_redirect_status_code, is_server_error_status_code,
    is_success_status_code, StatusClass,
};
pub use crate::error::{Error, Result};
pub use crate::lookup::{
    deprecated_codes, experimental_codes, get_status_code, get_status_phrase,
    get_status_phrase_by_code, get_status_phrase_by_key, is_deprecated_status_code,
    is_experimental_status_code, status_codes, status_phrases, StatusRef,
};
pub use crate::registry::{codes, phrases, Registration, REGISTERED};
pub use crate::table::{derive_key, status_table, StatusEntry, StatusTable};
