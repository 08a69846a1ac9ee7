//! Response bodies shared by every endpoint.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Error body returned by the API: a fixed human-readable summary plus the
/// text of the underlying failure.
///
/// `details` is free text and not meant for programmatic matching.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
        }
    }

    /// Body for an unknown id or an unmatched route.
    pub fn not_found() -> Self {
        Self::new(
            "Not Found",
            "The requested URL was not found on the server.",
        )
    }
}

/// Serialize `value` as JSON indented with four spaces.
pub fn to_pretty_json<T>(value: &T) -> serde_json::Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(buf)
}
