//! Fixed status-code to message table.
//!
//! Used to synthesize default messages for normalized errors. The table is
//! a `match`, so lookups are free of any shared state.

/// Status code used when a failure carries no status information.
pub const DEFAULT_STATUS: u16 = 500;

/// Message used when neither the failure nor the table supplies one.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";

/// Every status code with a table entry, in ascending order.
pub const KNOWN_STATUS_CODES: [u16; 12] = [
    400, 401, 403, 404, 405, 408, 409, 429, 500, 502, 503, 504,
];

/// Returns the canonical message for `code`, if it has a table entry.
///
/// # Examples
///
/// ```
/// use verdict::status_message;
///
/// assert_eq!(status_message(404), Some("Not Found"));
/// assert_eq!(status_message(418), None);
/// ```
pub fn status_message(code: u16) -> Option<&'static str> {
    let message = match code {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        409 => "Conflict",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => return None,
    };
    Some(message)
}

/// Treats a zero status as missing.
pub(crate) fn present(status: Option<u16>) -> Option<u16> {
    status.filter(|&code| code != 0)
}
