//! Restricted glob matching for search patterns.
//!
//! Supports `*` (any sequence, including `/`) and `?` (exactly one
//! character). Everything else is literal, including regex
//! metacharacters.

use regex::Regex;

/// Case-insensitive, whole-string glob match of `candidate` against
/// `pattern`.
///
/// The pattern is translated to an anchored regex: metacharacters are
/// escaped, then `*` becomes `.*` and `?` becomes `.`. Substring
/// behavior requires wrapping the pattern in `*`.
///
/// If the translated pattern fails to compile (should not happen given
/// the escaping), falls back to a case-insensitive exact-equality check
/// rather than failing.
#[must_use]
pub fn glob_match(pattern: &str, candidate: &str) -> bool {
    let escaped = regex::escape(pattern)
        .replace("\\*", ".*")
        .replace("\\?", ".");
    let anchored = format!("(?i)^{escaped}$");

    match Regex::new(&anchored) {
        Ok(re) => re.is_match(candidate),
        Err(_) => pattern.eq_ignore_ascii_case(candidate),
    }
}
