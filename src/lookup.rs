//! Looking statuses up by code or by key.
//!
//! The free functions here all consult the process-wide `status_table()`; the same operations
//! are available as methods for a `StatusTable` you have built yourself.

use crate::error::{Error, Result};
use crate::table::{status_table, StatusEntry, StatusTable};

/// A reference to a status, either by numeric code or by symbolic key.
///
/// Anything that `get_status_phrase` accepts converts into one of these:
///
/// ```rust
/// # use httpstatus::StatusRef;
/// assert_eq!(StatusRef::from(404), StatusRef::Code(404));
/// assert_eq!(StatusRef::from("NOT_FOUND"), StatusRef::Key("NOT_FOUND"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusRef<'a> {
    /// A numeric status code, e.g. `404`.
    Code(u16),
    /// A symbolic key, e.g. `NOT_FOUND`.
    Key(&'a str),
}

impl From<u16> for StatusRef<'static> {
    #[inline]
    fn from(code: u16) -> StatusRef<'static> {
        StatusRef::Code(code)
    }
}

impl<'a> From<&'a str> for StatusRef<'a> {
    #[inline]
    fn from(key: &'a str) -> StatusRef<'a> {
        StatusRef::Key(key)
    }
}

impl<'a> From<&'a String> for StatusRef<'a> {
    #[inline]
    fn from(key: &'a String) -> StatusRef<'a> {
        StatusRef::Key(key)
    }
}

impl StatusTable {
    /// Resolve a status reference to its entry.
    pub fn get<'a>(&self, status: impl Into<StatusRef<'a>>) -> Result<&StatusEntry> {
        match status.into() {
            StatusRef::Code(code) => self.by_code(code).ok_or_else(|| Error::unknown_code(code)),
            StatusRef::Key(key) => self.by_key(key).ok_or_else(|| Error::unknown_key(key)),
        }
    }

    /// The code registered under `key`.
    pub fn status_code(&self, key: &str) -> Result<u16> {
        self.get(key).map(StatusEntry::code)
    }

    /// The phrase for a code or a key.
    pub fn status_phrase<'a>(&self, status: impl Into<StatusRef<'a>>) -> Result<&'static str> {
        self.get(status).map(StatusEntry::phrase)
    }

    /// Whether `code` is registered and marked deprecated.
    pub fn is_deprecated(&self, code: u16) -> bool {
        self.by_code(code).is_some_and(StatusEntry::deprecated)
    }

    /// Whether `code` is registered and marked experimental.
    pub fn is_experimental(&self, code: u16) -> bool {
        self.by_code(code).is_some_and(StatusEntry::experimental)
    }
}

/// Returns the HTTP status code for a given key.
///
/// ```rust
/// # use httpstatus::get_status_code;
/// assert_eq!(get_status_code("OK").unwrap(), 200);
/// assert_eq!(get_status_code("CREATED").unwrap(), 201);
/// assert!(get_status_code("Ok").is_err());
/// ```
///
/// The key must match exactly; anything else is `Error::UnknownStatus`.
pub fn get_status_code(key: &str) -> Result<u16> {
    status_table().status_code(key)
}

/// Returns the HTTP status phrase for a given code or key.
///
/// ```rust
/// # use httpstatus::{get_status_phrase, codes};
/// assert_eq!(get_status_phrase(200).unwrap(), "OK");
/// assert_eq!(get_status_phrase(codes::CREATED).unwrap(), "Created");
/// assert_eq!(get_status_phrase("IM_A_TEAPOT").unwrap(), "I'm a teapot");
/// ```
///
/// Unregistered codes and unknown keys are `Error::UnknownStatus`; a code in string form such
/// as `"200"` is treated as a key and so is unknown too.
pub fn get_status_phrase<'a>(status: impl Into<StatusRef<'a>>) -> Result<&'static str> {
    status_table().status_phrase(status)
}

/// `get_status_phrase` for a numeric code.
pub fn get_status_phrase_by_code(code: u16) -> Result<&'static str> {
    get_status_phrase(StatusRef::Code(code))
}

/// `get_status_phrase` for a symbolic key.
pub fn get_status_phrase_by_key(key: &str) -> Result<&'static str> {
    get_status_phrase(StatusRef::Key(key))
}

/// Whether `code` is a registered status marked as deprecated, such as 102 (Processing).
///
/// Unregistered codes are simply not deprecated.
pub fn is_deprecated_status_code(code: u16) -> bool {
    status_table().is_deprecated(code)
}

/// Whether `code` is a registered status marked as experimental, such as 425 (Too Early).
pub fn is_experimental_status_code(code: u16) -> bool {
    status_table().is_experimental(code)
}

/// Every registered key with its code, in registry order.
pub fn status_codes() -> impl Iterator<Item = (&'static str, u16)> {
    status_table().entries().map(|e| (e.key(), e.code()))
}

/// Every registered key with its phrase, in registry order.
pub fn status_phrases() -> impl Iterator<Item = (&'static str, &'static str)> {
    status_table().entries().map(|e| (e.key(), e.phrase()))
}

/// The registered codes marked deprecated.
pub fn deprecated_codes() -> impl Iterator<Item = u16> {
    status_table().entries().filter(|e| e.deprecated()).map(StatusEntry::code)
}

/// The registered codes marked experimental.
pub fn experimental_codes() -> impl Iterator<Item = u16> {
    status_table().entries().filter(|e| e.experimental()).map(StatusEntry::code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{codes, phrases, Registration};

    #[test]
    fn test_get_status_code() {
        assert_eq!(get_status_code("OK"), Ok(200));
        assert_eq!(get_status_code("CREATED"), Ok(201));
        assert_eq!(get_status_code("NOT_FOUND"), Ok(404));
        assert_eq!(get_status_code("INTERNAL_SERVER_ERROR"), Ok(500));
        assert_eq!(get_status_code("IM_A_TEAPOT"), Ok(codes::IM_A_TEAPOT));
    }

    #[test]
    fn test_get_status_code_unknown() {
        let err = get_status_code("bogus").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownStatus {
                what: "phrase",
                received: "bogus".to_owned(),
            }
        );
        assert!(err.to_string().contains("bogus"));

        let err = get_status_code("Invalid Status").unwrap_err();
        assert_eq!(err.to_string(), "Status phrase is not known. Received: Invalid Status");
        // Phrases are not keys.
        assert!(get_status_code("Not Found").is_err());
    }

    #[test]
    fn test_get_status_phrase() {
        assert_eq!(get_status_phrase(200), Ok("OK"));
        assert_eq!(get_status_phrase(201), Ok("Created"));
        assert_eq!(get_status_phrase(404), Ok("Not Found"));
        assert_eq!(get_status_phrase(500), Ok("Internal Server Error"));
        assert_eq!(get_status_phrase("CREATED"), Ok("Created"));
        assert_eq!(get_status_phrase("IM_A_TEAPOT"), Ok(phrases::IM_A_TEAPOT));
        assert_eq!(get_status_phrase_by_code(203), Ok("Non-Authoritative Information"));
        assert_eq!(get_status_phrase_by_key("MULTI_STATUS"), Ok("Multi-Status"));
        let key = String::from("GONE");
        assert_eq!(get_status_phrase(&key), Ok("Gone"));
    }

    #[test]
    fn test_get_status_phrase_unknown() {
        let err = get_status_phrase(999).unwrap_err();
        assert_eq!(err.to_string(), "Status code is not known. Received: 999");
        assert!(matches!(get_status_phrase(250), Err(Error::UnknownStatus { .. })));
        assert!(matches!(get_status_phrase("200"), Err(Error::UnknownStatus { .. })));
    }

    #[test]
    fn test_round_trip_over_every_entry() {
        for entry in status_table().entries() {
            let code = get_status_code(entry.key()).unwrap();
            assert_eq!(code, entry.code());
            assert_eq!(get_status_phrase(code), Ok(entry.phrase()));
            assert_eq!(get_status_phrase(entry.key()), Ok(entry.phrase()));
        }
    }

    #[test]
    fn test_flags() {
        assert!(is_deprecated_status_code(102));
        assert!(is_deprecated_status_code(305));
        assert!(!is_deprecated_status_code(200));
        assert!(!is_deprecated_status_code(999));
        assert!(is_experimental_status_code(425));
        assert!(!is_experimental_status_code(426));
        assert!(!is_experimental_status_code(999));
        assert_eq!(deprecated_codes().collect::<Vec<_>>(), [102, 305]);
        assert_eq!(experimental_codes().collect::<Vec<_>>(), [425]);
    }

    #[test]
    fn test_mappings_share_keys() {
        let codes: Vec<_> = status_codes().collect();
        let phrases: Vec<_> = status_phrases().collect();
        assert_eq!(codes.len(), phrases.len());
        for ((key, code), (phrase_key, phrase)) in codes.iter().zip(&phrases) {
            assert_eq!(key, phrase_key);
            assert_eq!(get_status_phrase(*code), Ok(*phrase));
        }
        assert_eq!(codes[0], ("CONTINUE", 100));
        assert!(codes.contains(&("NOT_FOUND", 404)));
    }

    #[test]
    fn test_custom_table() {
        let registrations = [
            Registration {
                code: 299,
                phrase: "Probably Fine",
                deprecated: true,
                experimental: true,
            },
        ];
        let table = StatusTable::from_registrations(&registrations).unwrap();
        assert_eq!(table.status_code("PROBABLY_FINE"), Ok(299));
        assert_eq!(table.status_phrase(299), Ok("Probably Fine"));
        assert!(table.is_deprecated(299));
        assert!(table.is_experimental(299));
        assert!(table.status_code("OK").is_err());
    }
}
