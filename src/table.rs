//! The status table: registered statuses with their derived keys, indexed three ways.

use std::collections::hash_map::{Entry, HashMap};
use std::fmt;

use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::class::StatusClass;
use crate::error::{Error, Result};
use crate::registry::{Registration, REGISTERED};

/// Derive the symbolic key for a phrase.
///
/// Quote characters are dropped, whitespace and hyphens become underscores, and the whole lot is
/// uppercased. Each separator becomes its own underscore; runs are not collapsed, so `"A  B"`
/// gives `A__B`:
///
/// ```rust
/// # use httpstatus::derive_key;
/// assert_eq!(derive_key("Non-Authoritative Information"), "NON_AUTHORITATIVE_INFORMATION");
/// assert_eq!(derive_key("I'm a teapot"), "IM_A_TEAPOT");
/// assert_eq!(derive_key("A  B - C"), "A__B___C");
/// ```
pub fn derive_key(phrase: &str) -> String {
    phrase
        .chars()
        .filter(|c| !matches!(c, '\'' | '"'))
        .map(|c| if c.is_whitespace() || c == '-' { '_' } else { c })
        .flat_map(char::to_uppercase)
        .collect()
}

/// A registered status.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusEntry {
    code: u16,
    phrase: &'static str,
    key: String,
    deprecated: bool,
    experimental: bool,
}

impl StatusEntry {
    /// The numeric code.
    #[inline]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The canonical phrase, e.g. `"Not Found"`.
    ///
    /// The phrase is meant exclusively for human readers; compare codes or keys instead.
    #[inline]
    pub fn phrase(&self) -> &'static str {
        self.phrase
    }

    /// The symbolic key, e.g. `NOT_FOUND`.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the code is marked obsolete.
    #[inline]
    pub fn deprecated(&self) -> bool {
        self.deprecated
    }

    /// Whether the code is still experimental.
    #[inline]
    pub fn experimental(&self) -> bool {
        self.experimental
    }

    /// The class the code belongs to.
    pub fn class(&self) -> StatusClass {
        // Codes are range-checked on construction.
        match StatusClass::from_code(self.code) {
            Some(class) => class,
            None => unreachable!("status code {} escaped the range check", self.code),
        }
    }

    /// Reference documentation for this status.
    pub fn link(&self) -> String {
        format!(
            "https://developer.mozilla.org/en-US/docs/Web/HTTP/Reference/Status/{}",
            self.code
        )
    }
}

/// Formats the entry as a status line would: code, then phrase.
///
/// ```rust
/// # use httpstatus::status_table;
/// let teapot = status_table().by_code(418).unwrap();
/// assert_eq!(teapot.to_string(), "418 I'm a teapot");
/// ```
impl fmt::Display for StatusEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.code, self.phrase)
    }
}

/// An immutable set of statuses, indexed by code, by key and by phrase.
///
/// Most callers want the process-wide table from `status_table()` (or the free functions that
/// consult it); building one yourself is for checking a dataset before relying on it.
#[derive(Debug)]
pub struct StatusTable {
    entries: Vec<StatusEntry>,
    by_code: HashMap<u16, usize>,
    by_key: HashMap<String, usize>,
    by_phrase: HashMap<&'static str, usize>,
}

impl StatusTable {
    /// Build a table from registrations, deriving each key from its phrase.
    ///
    /// Order is preserved. Fails if a code is outside 100–599 or if any code, phrase or derived
    /// key appears twice.
    pub fn from_registrations<'a, I>(registrations: I) -> Result<StatusTable>
    where
        I: IntoIterator<Item = &'a Registration>,
    {
        let registrations = registrations.into_iter();
        let capacity = registrations.size_hint().0;
        let mut table = StatusTable {
            entries: Vec::with_capacity(capacity),
            by_code: HashMap::with_capacity(capacity),
            by_key: HashMap::with_capacity(capacity),
            by_phrase: HashMap::with_capacity(capacity),
        };

        for registration in registrations {
            let index = table.entries.len();
            let code = registration.code;
            if StatusClass::from_code(code).is_none() {
                return Err(Error::CodeOutOfRange(code));
            }

            match table.by_code.entry(code) {
                Entry::Occupied(_) => return Err(Error::DuplicateCode(code)),
                Entry::Vacant(slot) => {
                    let _ = slot.insert(index);
                }
            }

            match table.by_phrase.entry(registration.phrase) {
                Entry::Occupied(_) => {
                    return Err(Error::DuplicatePhrase(registration.phrase.to_owned()))
                }
                Entry::Vacant(slot) => {
                    let _ = slot.insert(index);
                }
            }

            let key = derive_key(registration.phrase);
            match table.by_key.entry(key.clone()) {
                Entry::Occupied(existing) => {
                    return Err(Error::DuplicateKey {
                        first: table.entries[*existing.get()].code,
                        second: code,
                        key,
                    })
                }
                Entry::Vacant(slot) => {
                    let _ = slot.insert(index);
                }
            }

            table.entries.push(StatusEntry {
                code,
                phrase: registration.phrase,
                key,
                deprecated: registration.deprecated,
                experimental: registration.experimental,
            });
        }

        trace!(entries = table.entries.len(), "built status table");
        Ok(table)
    }

    /// Number of statuses in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no statuses at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in registration order.
    pub fn entries(&self) -> std::slice::Iter<'_, StatusEntry> {
        self.entries.iter()
    }

    /// The entry registered under `code`, if any.
    pub fn by_code(&self, code: u16) -> Option<&StatusEntry> {
        self.by_code.get(&code).map(|&i| &self.entries[i])
    }

    /// The entry whose key is exactly `key`, if any.
    pub fn by_key(&self, key: &str) -> Option<&StatusEntry> {
        self.by_key.get(key).map(|&i| &self.entries[i])
    }

    /// The entry whose phrase is exactly `phrase` (case-sensitive), if any.
    pub fn by_phrase(&self, phrase: &str) -> Option<&StatusEntry> {
        self.by_phrase.get(phrase).map(|&i| &self.entries[i])
    }

    /// The registered entries belonging to `class`, in registration order.
    pub fn in_class(&self, class: StatusClass) -> impl Iterator<Item = &StatusEntry> + '_ {
        self.entries.iter().filter(move |e| class.contains(e.code))
    }
}

lazy_static! {
    static ref STATUS_TABLE: StatusTable = build(REGISTERED);
}

fn build(registrations: &[Registration]) -> StatusTable {
    match StatusTable::from_registrations(registrations) {
        Ok(table) => {
            debug!(
                entries = table.len(),
                deprecated = table.entries().filter(|e| e.deprecated).count(),
                experimental = table.entries().filter(|e| e.experimental).count(),
                "registered status table ready"
            );
            table
        }
        // An inconsistent registry must not serve lookups at all.
        Err(err) => panic!("registered status data is inconsistent: {}", err),
    }
}

/// The process-wide table of registered statuses.
///
/// Built on first use and never modified afterwards, so it may be read from any number of threads.
pub fn status_table() -> &'static StatusTable {
    &STATUS_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DECLARED_KEYS;

    fn reg(code: u16, phrase: &'static str) -> Registration {
        Registration {
            code,
            phrase,
            deprecated: false,
            experimental: false,
        }
    }

    #[test]
    fn test_derive_key() {
        assert_eq!(derive_key("OK"), "OK");
        assert_eq!(derive_key("Not Found"), "NOT_FOUND");
        assert_eq!(derive_key("Multi-Status"), "MULTI_STATUS");
        assert_eq!(derive_key("unused"), "UNUSED");
        assert_eq!(derive_key("I'm a teapot"), "IM_A_TEAPOT");
        assert_eq!(derive_key("\"Quoted\" Thing"), "QUOTED_THING");
        assert_eq!(derive_key("A  B - C"), "A__B___C");
    }

    #[test]
    fn test_derived_keys_match_declared_keys() {
        let table = status_table();
        assert_eq!(table.len(), DECLARED_KEYS.len());
        for (entry, &(code, key)) in table.entries().zip(DECLARED_KEYS) {
            assert_eq!(entry.code(), code);
            assert_eq!(entry.key(), key);
        }
    }

    #[test]
    fn test_registered_table_is_unique_and_ordered() {
        let table = status_table();
        assert_eq!(table.len(), REGISTERED.len());
        assert!(!table.is_empty());
        let codes: Vec<u16> = table.entries().map(StatusEntry::code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
        for entry in table.entries() {
            assert_eq!(table.by_code(entry.code()), Some(entry));
            assert_eq!(table.by_key(entry.key()), Some(entry));
            assert_eq!(table.by_phrase(entry.phrase()), Some(entry));
        }
    }

    #[test]
    fn test_indices() {
        let table = status_table();
        assert_eq!(table.by_code(404).map(StatusEntry::phrase), Some("Not Found"));
        assert_eq!(table.by_key("NOT_FOUND").map(StatusEntry::code), Some(404));
        assert_eq!(table.by_phrase("Not Found").map(StatusEntry::code), Some(404));
        assert_eq!(table.by_phrase("not found"), None);
        assert_eq!(table.by_key("not_found"), None);
        assert_eq!(table.by_code(999), None);
    }

    #[test]
    fn test_entry_accessors() {
        let processing = status_table().by_code(102).unwrap();
        assert!(processing.deprecated());
        assert!(!processing.experimental());
        assert_eq!(processing.class(), StatusClass::Informational);
        assert_eq!(
            processing.link(),
            "https://developer.mozilla.org/en-US/docs/Web/HTTP/Reference/Status/102"
        );
        assert_eq!(processing.to_string(), "102 Processing");
    }

    #[test]
    fn test_in_class() {
        let table = status_table();
        let informational: Vec<u16> = table
            .in_class(StatusClass::Informational)
            .map(StatusEntry::code)
            .collect();
        assert_eq!(informational, [100, 101, 102, 103]);
        let total: usize = StatusClass::ALL.iter().map(|&c| table.in_class(c).count()).sum();
        assert_eq!(total, table.len());
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let registrations = [reg(200, "All Good"), reg(299, "All-Good")];
        assert_eq!(
            StatusTable::from_registrations(&registrations).unwrap_err(),
            Error::DuplicateKey {
                key: "ALL_GOOD".to_owned(),
                first: 200,
                second: 299,
            }
        );
    }

    #[test]
    fn test_build_accepts_consistent_registrations() {
        let table = build(&[reg(200, "OK"), reg(404, "Not Found")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.by_key("NOT_FOUND").map(StatusEntry::code), Some(404));
    }

    #[test]
    #[should_panic(expected = "registered status data is inconsistent")]
    fn test_build_refuses_inconsistent_registrations() {
        let _ = build(&[reg(200, "All Good"), reg(299, "All-Good")]);
    }

    #[test]
    fn test_duplicate_code_and_phrase_are_rejected() {
        let registrations = [reg(200, "OK"), reg(200, "Fine")];
        assert_eq!(
            StatusTable::from_registrations(&registrations).unwrap_err(),
            Error::DuplicateCode(200)
        );

        let registrations = [reg(200, "OK"), reg(201, "OK")];
        assert_eq!(
            StatusTable::from_registrations(&registrations).unwrap_err(),
            Error::DuplicatePhrase("OK".to_owned())
        );
    }

    #[test]
    fn test_code_out_of_range_is_rejected() {
        let registrations = [reg(600, "Beyond")];
        assert_eq!(
            StatusTable::from_registrations(&registrations).unwrap_err(),
            Error::CodeOutOfRange(600)
        );
        let registrations = [reg(99, "Before")];
        assert_eq!(
            StatusTable::from_registrations(&registrations).unwrap_err(),
            Error::CodeOutOfRange(99)
        );
    }

    #[test]
    fn test_error_messages() {
        let err = StatusTable::from_registrations(&[reg(200, "A B"), reg(201, "A-B")]).unwrap_err();
        assert_eq!(err.to_string(), "status key A_B is derived from both 200 and 201");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_entry() {
        let value = serde_json::to_value(status_table().by_code(425).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "code": 425,
                "phrase": "Too Early",
                "key": "TOO_EARLY",
                "deprecated": false,
                "experimental": true,
            })
        );
    }
}
