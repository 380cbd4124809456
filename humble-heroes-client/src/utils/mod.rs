//! Utility modules.

/// Log sanitization utilities to keep large bodies out of logs.
pub mod log_sanitizer;
