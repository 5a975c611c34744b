//! Status code classes and the range-based predicates.
//!
//! None of the predicates here consult the registry: the class of a status code is defined by
//! its first digit alone, so `is_success_status_code(250)` holds even though nothing is registered
//! at 250.

use std::ops::RangeInclusive;

use phf::phf_set;

/// The class of an HTTP `status-code`.
///
/// [RFC 9110, section 15 (Status Codes)](https://www.rfc-editor.org/rfc/rfc9110#section-15):
///
/// > The first digit of the status code defines the class of response.
/// > The last two digits do not have any categorization role.
///
/// And:
///
/// > HTTP status codes are extensible.  A client is not required to
/// > understand the meaning of all registered status codes, though such
/// > understanding is obviously desirable.  However, a client MUST
/// > understand the class of any status code, as indicated by the first
/// > digit, and treat an unrecognized status code as being equivalent to
/// > the x00 status code of that class.
///
/// This can be used in cases where a status code’s meaning is unknown, also,
/// to get the appropriate *category* of status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StatusClass {
    /// 1xx (Informational): The request was received, continuing process
    Informational = 100,

    /// 2xx (Successful): The request was successfully received, understood, and accepted
    Success = 200,

    /// 3xx (Redirection): Further action needs to be taken in order to complete the request
    Redirection = 300,

    /// 4xx (Client Error): The request contains bad syntax or cannot be fulfilled
    ClientError = 400,

    /// 5xx (Server Error): The server failed to fulfill an apparently valid request
    ServerError = 500,
}

impl StatusClass {
    /// All five classes, lowest first.
    pub const ALL: [StatusClass; 5] = [
        StatusClass::Informational,
        StatusClass::Success,
        StatusClass::Redirection,
        StatusClass::ClientError,
        StatusClass::ServerError,
    ];

    /// Determine the class of a status code, based on its first digit.
    ///
    /// Anything outside 100–599 has no class:
    ///
    /// ```rust
    /// # use httpstatus::StatusClass;
    /// assert_eq!(StatusClass::from_code(471), Some(StatusClass::ClientError));
    /// assert_eq!(StatusClass::from_code(600), None);
    /// ```
    pub fn from_code(code: u16) -> Option<StatusClass> {
        match code {
            100..=199 => Some(StatusClass::Informational),
            200..=299 => Some(StatusClass::Success),
            300..=399 => Some(StatusClass::Redirection),
            400..=499 => Some(StatusClass::ClientError),
            500..=599 => Some(StatusClass::ServerError),
            _ => None,
        }
    }

    /// The closed range of codes belonging to this class, e.g. `200..=299`.
    #[inline]
    pub fn range(self) -> RangeInclusive<u16> {
        let low = self as u16;
        low..=low + 99
    }

    /// Whether `code` falls within this class.
    #[inline]
    pub fn contains(self, code: u16) -> bool {
        self.range().contains(&code)
    }

    /// Get the default status code for the class.
    ///
    /// This produces the x00 status code; thus, for `ClientError` (4xx), for example, this will
    /// produce 400 (Bad Request). A client that receives, say, 471 and does not know what to do
    /// with it can fall back to this:
    ///
    /// ```rust
    /// # use httpstatus::{StatusClass, codes};
    /// let received = 471;
    /// let status = StatusClass::from_code(received).unwrap().default_code();
    /// assert_eq!(status, codes::BAD_REQUEST);
    /// ```
    #[inline]
    pub fn default_code(self) -> u16 {
        self as u16
    }
}

/// Responses with these codes never carry a body, whatever their class.
static CONTENTLESS: phf::Set<u16> = phf_set! {
    101u16,
    204u16,
    205u16,
    304u16,
};

/// Whether `code` is in the 1xx (Informational) class.
#[inline]
pub fn is_info_status_code(code: u16) -> bool {
    StatusClass::Informational.contains(code)
}

/// Whether `code` is in the 2xx (Successful) class.
#[inline]
pub fn is_success_status_code(code: u16) -> bool {
    StatusClass::Success.contains(code)
}

/// Whether `code` is in the 3xx (Redirection) class.
#[inline]
pub fn is_redirect_status_code(code: u16) -> bool {
    StatusClass::Redirection.contains(code)
}

/// Whether `code` is in the 4xx (Client Error) class.
#[inline]
pub fn is_client_error_status_code(code: u16) -> bool {
    StatusClass::ClientError.contains(code)
}

/// Whether `code` is in the 5xx (Server Error) class.
#[inline]
pub fn is_server_error_status_code(code: u16) -> bool {
    StatusClass::ServerError.contains(code)
}

/// Whether a response with this code is defined to have no body: 101, 204, 205 and 304.
///
/// This is a property of the protocol, not of the registry flags.
#[inline]
pub fn is_contentless_status_code(code: u16) -> bool {
    CONTENTLESS.contains(&code)
}

/// The negation of `is_contentless_status_code`.
#[inline]
pub fn is_contentful_status_code(code: u16) -> bool {
    !is_contentless_status_code(code)
}
