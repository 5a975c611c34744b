//! Errors returned by status lookups and by table construction.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong when looking up or registering a status.
///
/// The two lookup failures carry the offending input verbatim in their message, so that
/// `UnknownStatus` for `999` reads `Status code is not known. Received: 999`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was of the wrong type for the lookup, e.g. a number where a key was wanted.
    #[error("Status {what} is not a {expected}. Received: {received}")]
    InvalidArgument {
        /// What the input was meant to be (`"phrase"` or `"code"`).
        what: &'static str,
        /// The type(s) the lookup accepts.
        expected: &'static str,
        /// The input as given.
        received: String,
    },

    /// The input was well typed but matches no registered status.
    #[error("Status {what} is not known. Received: {received}")]
    UnknownStatus {
        /// What the input was meant to be (`"phrase"` or `"code"`).
        what: &'static str,
        /// The input as given.
        received: String,
    },

    /// A registration carried a code outside 100–599.
    #[error("status code {0} is outside the range 100-599")]
    CodeOutOfRange(u16),

    /// Two registrations share a code.
    #[error("status code {0} is registered more than once")]
    DuplicateCode(u16),

    /// Two registrations share a phrase.
    #[error("status phrase {0:?} is registered more than once")]
    DuplicatePhrase(String),

    /// Two distinct phrases collapse to the same key.
    #[error("status key {key} is derived from both {first} and {second}")]
    DuplicateKey {
        /// The colliding key.
        key: String,
        /// The code registered first under `key`.
        first: u16,
        /// The code that collided with it.
        second: u16,
    },
}

impl Error {
    pub(crate) fn unknown_key(key: &str) -> Error {
        Error::UnknownStatus {
            what: "phrase",
            received: key.to_owned(),
        }
    }

    pub(crate) fn unknown_code(code: impl ToString) -> Error {
        Error::UnknownStatus {
            what: "code",
            received: code.to_string(),
        }
    }
}
