//! Utility functions and helpers.
//!
//! Path escaping for request construction and digest checks for downloads.

pub mod hash;
pub mod path;

// Re-export commonly used utilities
pub use hash::{sha256_hex, verify_sha256};
pub use path::{decode_lossy, escape_segment, unescape_path, validate_escapes, validate_segments};
