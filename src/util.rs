//! Shared utility helpers.

/// Case-insensitive ends_with check without allocating.
#[inline]
pub fn ends_with_ci(haystack: &str, needle: &str) -> bool {
    haystack.len() >= needle.len()
        && haystack.as_bytes()[haystack.len() - needle.len()..]
            .eq_ignore_ascii_case(needle.as_bytes())
}

/// Case-insensitive strip_suffix, returning the remainder before `needle`.
#[inline]
pub fn strip_suffix_ci<'a>(haystack: &'a str, needle: &str) -> Option<&'a str> {
    if ends_with_ci(haystack, needle) {
        haystack.get(..haystack.len() - needle.len())
    } else {
        None
    }
}

/// Byte just before the last `suffix_len` bytes, lowercased.
#[inline]
pub fn byte_before_suffix(haystack: &str, suffix_len: usize) -> Option<u8> {
    haystack
        .len()
        .checked_sub(suffix_len + 1)
        .map(|i| haystack.as_bytes()[i].to_ascii_lowercase())
}
