//! # Shared Utility Functions
//!
//! Display helpers used by the dashboard tables and cards.
//!
//! - [`truncate_id`] - shorten long resource/finding identifiers with an ellipsis
//! - [`shorten`] - cut free-form text to a display length

/// Shorten an opaque identifier by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// Identifiers shorter than `prefix_len + suffix_len` are returned as-is.
/// Backend ids are ASCII (uuids, ARNs, resource ids), so byte slicing is safe.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_id;
///
/// assert_eq!(truncate_id("i-0abc1234def567890", 4, 4), "i-0a...7890");
/// assert_eq!(truncate_id("vm-7", 4, 4), "vm-7");
/// ```
pub fn truncate_id(id: &str, prefix_len: usize, suffix_len: usize) -> String {
    let id_len = id.len();

    if id_len <= prefix_len + suffix_len || prefix_len >= id_len || suffix_len >= id_len {
        return id.to_string();
    }

    let prefix = &id[..prefix_len];
    let suffix = &id[id_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Cut free-form text to at most `max_chars` characters, appending an
/// ellipsis when anything was removed. Splits on a char boundary.
pub fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_id() {
        assert_eq!(truncate_id("i-0abc1234def5678890", 4, 4), "i-0a...8890");
        assert_eq!(truncate_id("arn:aws:iam::123456789012:role/ops", 8, 8), "arn:aws:...role/ops");
    }

    #[test]
    fn test_truncate_id_short() {
        assert_eq!(truncate_id("vm-7", 4, 4), "vm-7");
        assert_eq!(truncate_id("abc", 4, 4), "abc");
    }

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("short text", 20), "short text");
        assert_eq!(shorten("unattached volume in eu-west-1", 10), "unattached…");
    }
}
