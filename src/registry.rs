//! The registered status data.
//!
//! Every status this crate knows about is listed exactly once, in the `status_registry!`
//! invocation at the bottom of this file. The listing follows the [MDN HTTP response status
//! code reference](https://developer.mozilla.org/en-US/docs/Web/HTTP/Reference/Status), including
//! its deprecated and experimental markers.
//!
//! Besides the ordered `REGISTERED` slice that `StatusTable` is built from, the macro produces the
//! `codes` and `phrases` modules, so that `codes::IM_A_TEAPOT` is known to be `418` at compile
//! time rather than only after a lookup.

/// One row of the registered status data, before its key has been derived.
///
/// This is the shape of the externally supplied dataset; `StatusTable::from_registrations` turns
/// a sequence of these into a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registration {
    /// The numeric status code, 100–599.
    pub code: u16,
    /// The canonical phrase, e.g. `"Not Found"`.
    pub phrase: &'static str,
    /// Whether the code is marked obsolete.
    pub deprecated: bool,
    /// Whether the code is still experimental.
    pub experimental: bool,
}

/// Whether any code appears more than once.
///
/// Evaluated at compile time over the registry, so a doubled row fails the build.
const fn has_duplicate_code(codes: &[u16]) -> bool {
    let mut i = 0;
    while i < codes.len() {
        let mut j = i + 1;
        while j < codes.len() {
            if codes[i] == codes[j] {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

macro_rules! status_registry {
    ($(
        $code:literal
        $key:ident
        $phrase:literal
        $deprecated:literal
        $experimental:literal;
    )*) => {
        /// All registered statuses, in registry order.
        pub static REGISTERED: &[Registration] = &[
            $(Registration {
                code: $code,
                phrase: $phrase,
                deprecated: $deprecated,
                experimental: $experimental,
            },)*
        ];

        const _: () = assert!(
            !has_duplicate_code(&[$($code),*]),
            "a status code is registered more than once"
        );

        /// The key each row was declared under, for checking against the derived keys.
        #[cfg(test)]
        pub(crate) static DECLARED_KEYS: &[(u16, &str)] = &[$(($code, stringify!($key)),)*];

        /// Status codes by key.
        ///
        /// ```rust
        /// assert_eq!(httpstatus::codes::IM_A_TEAPOT, 418);
        /// ```
        pub mod codes {
            $(
                #[doc = concat!("`", stringify!($code), "` ", $phrase)]
                pub const $key: u16 = $code;
            )*
        }

        /// Status phrases by key.
        ///
        /// ```rust
        /// assert_eq!(httpstatus::phrases::NOT_FOUND, "Not Found");
        /// ```
        pub mod phrases {
            $(
                #[doc = concat!("The phrase for `", stringify!($code), "`.")]
                pub const $key: &str = $phrase;
            )*
        }
    }
}

status_registry! {
    // code key                           phrase                             deprecated experimental
    100 CONTINUE                         "Continue"                         false false;
    101 SWITCHING_PROTOCOLS              "Switching Protocols"              false false;
    102 PROCESSING                       "Processing"                       true  false;
    103 EARLY_HINTS                      "Early Hints"                      false false;
    200 OK                               "OK"                               false false;
    201 CREATED                          "Created"                          false false;
    202 ACCEPTED                         "Accepted"                         false false;
    203 NON_AUTHORITATIVE_INFORMATION    "Non-Authoritative Information"    false false;
    204 NO_CONTENT                       "No Content"                       false false;
    205 RESET_CONTENT                    "Reset Content"                    false false;
    206 PARTIAL_CONTENT                  "Partial Content"                  false false;
    207 MULTI_STATUS                     "Multi-Status"                     false false;
    208 ALREADY_REPORTED                 "Already Reported"                 false false;
    226 IM_USED                          "IM Used"                          false false;
    300 MULTIPLE_CHOICES                 "Multiple Choices"                 false false;
    301 MOVED_PERMANENTLY                "Moved Permanently"                false false;
    302 FOUND                            "Found"                            false false;
    303 SEE_OTHER                        "See Other"                        false false;
    304 NOT_MODIFIED                     "Not Modified"                     false false;
    305 USE_PROXY                        "Use Proxy"                        true  false;
    306 UNUSED                           "unused"                           false false;
    307 TEMPORARY_REDIRECT               "Temporary Redirect"               false false;
    308 PERMANENT_REDIRECT               "Permanent Redirect"               false false;
    400 BAD_REQUEST                      "Bad Request"                      false false;
    401 UNAUTHORIZED                     "Unauthorized"                     false false;
    402 PAYMENT_REQUIRED                 "Payment Required"                 false false;
    403 FORBIDDEN                        "Forbidden"                        false false;
    404 NOT_FOUND                        "Not Found"                        false false;
    405 METHOD_NOT_ALLOWED               "Method Not Allowed"               false false;
    406 NOT_ACCEPTABLE                   "Not Acceptable"                   false false;
    407 PROXY_AUTHENTICATION_REQUIRED    "Proxy Authentication Required"    false false;
    408 REQUEST_TIMEOUT                  "Request Timeout"                  false false;
    409 CONFLICT                         "Conflict"                         false false;
    410 GONE                             "Gone"                             false false;
    411 LENGTH_REQUIRED                  "Length Required"                  false false;
    412 PRECONDITION_FAILED              "Precondition Failed"              false false;
    413 CONTENT_TOO_LARGE                "Content Too Large"                false false;
    414 URI_TOO_LONG                     "URI Too Long"                     false false;
    415 UNSUPPORTED_MEDIA_TYPE           "Unsupported Media Type"           false false;
    416 RANGE_NOT_SATISFIABLE            "Range Not Satisfiable"            false false;
    417 EXPECTATION_FAILED               "Expectation Failed"               false false;
    418 IM_A_TEAPOT                      "I'm a teapot"                     false false;
    421 MISDIRECTED_REQUEST              "Misdirected Request"              false false;
    422 UNPROCESSABLE_CONTENT            "Unprocessable Content"            false false;
    423 LOCKED                           "Locked"                           false false;
    424 FAILED_DEPENDENCY                "Failed Dependency"                false false;
    425 TOO_EARLY                        "Too Early"                        false true;
    426 UPGRADE_REQUIRED                 "Upgrade Required"                 false false;
    428 PRECONDITION_REQUIRED            "Precondition Required"            false false;
    429 TOO_MANY_REQUESTS                "Too Many Requests"                false false;
    431 REQUEST_HEADER_FIELDS_TOO_LARGE  "Request Header Fields Too Large"  false false;
    451 UNAVAILABLE_FOR_LEGAL_REASONS    "Unavailable For Legal Reasons"    false false;
    500 INTERNAL_SERVER_ERROR            "Internal Server Error"            false false;
    501 NOT_IMPLEMENTED                  "Not Implemented"                  false false;
    502 BAD_GATEWAY                      "Bad Gateway"                      false false;
    503 SERVICE_UNAVAILABLE              "Service Unavailable"              false false;
    504 GATEWAY_TIMEOUT                  "Gateway Timeout"                  false false;
    505 HTTP_VERSION_NOT_SUPPORTED       "HTTP Version Not Supported"       false false;
    506 VARIANT_ALSO_NEGOTIATES          "Variant Also Negotiates"          false false;
    507 INSUFFICIENT_STORAGE             "Insufficient Storage"             false false;
    508 LOOP_DETECTED                    "Loop Detected"                    false false;
    510 NOT_EXTENDED                     "Not Extended"                     false false;
    511 NETWORK_AUTHENTICATION_REQUIRED  "Network Authentication Required"  false false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_duplicate_code() {
        assert!(!has_duplicate_code(&[]));
        assert!(!has_duplicate_code(&[200, 201, 404]));
        assert!(has_duplicate_code(&[200, 404, 200]));
        assert!(has_duplicate_code(&[418, 418]));
    }

    #[test]
    fn test_registered_codes_are_distinct() {
        let codes: Vec<u16> = REGISTERED.iter().map(|r| r.code).collect();
        assert!(!has_duplicate_code(&codes));
    }
}
