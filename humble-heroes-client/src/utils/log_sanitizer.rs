//! Response-body shortening for log lines
//!
//! A superhero list can be arbitrarily long; request logs only keep its head.

/// Bodies longer than this many bytes are cut in log lines.
const BODY_LOG_LIMIT: usize = 256;

/// Shorten a response body for a log line.
///
/// The cut lands on a UTF-8 character start at or below [`BODY_LOG_LIMIT`],
/// and the suffix records the full body size.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= BODY_LOG_LIMIT {
        return body.to_string();
    }
    let cut = body
        .char_indices()
        .map(|(index, _)| index)
        .take_while(|&index| index <= BODY_LOG_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &body[..cut], body.len())
}
