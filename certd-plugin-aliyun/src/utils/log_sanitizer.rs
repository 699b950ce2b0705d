//! Log sanitization utilities
//!
//! Response bodies can echo certificate material back; only a prefix ever reaches the log.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for safe logging.
///
/// Strings of at most `TRUNCATE_LIMIT` characters are returned unchanged; longer ones
/// are cut on a character boundary and suffixed with the total byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}
