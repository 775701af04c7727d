//! Path segment escaping for PyPI API routes.
//!
//! Project names and versions are embedded in request paths as single
//! segments. PyPI routes treat a bare `.` specially, so dots are always
//! percent-encoded along with everything a path segment cannot carry.

use crate::error::{CoreError, CoreResult};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes encoded inside a single path segment. `.` stays in the set.
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// Escape an identifier (project name or version) as one path segment
pub fn escape_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string()
}

/// Check that every `%` in `path` starts a two-digit hex escape
pub fn validate_escapes(path: &str) -> CoreResult<()> {
    let bytes = path.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        let is_hex = |offset: usize| bytes.get(i + offset).is_some_and(|b| b.is_ascii_hexdigit());
        if !(is_hex(1) && is_hex(2)) {
            return Err(CoreError::InvalidEscape {
                path: path.to_string(),
                position: i,
            });
        }
        i += 3;
    }

    Ok(())
}

/// Reject paths with a segment that decodes to `.` or `..`.
///
/// URL parsing collapses such segments even when escaped, so the request
/// would reach a different route than the one asked for.
pub fn validate_segments(path: &str) -> CoreResult<()> {
    let has_dot_segment = path
        .split('/')
        .any(|segment| matches!(decode_lossy(segment).as_str(), "." | ".."));

    if has_dot_segment {
        return Err(CoreError::DotSegment {
            path: path.to_string(),
        });
    }

    Ok(())
}

/// Decode percent-escapes in a relative path.
///
/// Malformed escapes are rejected. Decoded bytes that are not UTF-8 are
/// replaced rather than reported.
pub fn unescape_path(path: &str) -> CoreResult<String> {
    validate_escapes(path)?;
    Ok(decode_lossy(path))
}

/// Decode whatever percent-escapes are well formed, leaving the rest as is
pub fn decode_lossy(path: &str) -> String {
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}
