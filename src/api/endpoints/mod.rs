//! Typed endpoint groups
//!
//! One file per backend resource group. Each method states the path, the
//! parameters, the cache tags it provides or invalidates, and the shape it
//! decodes into; the cross-cutting behavior (credentials, envelope, errors,
//! 401 policy) lives in [`crate::api::client`].
//!
//! Where the backend exposes parallel super-admin and reseller families for
//! the same logical resource, both are defined here side by side. Selecting
//! the family for the current role is the caller's job (see
//! [`crate::screens`]); the two families have divergent authorization scopes
//! server-side, so the API layer never guesses.

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod export;
pub mod licenses;
pub mod resellers;
pub mod salons;
pub mod search;
pub mod security;
pub mod subscriptions;

/// Percent-encode one path segment (plan and category names may carry
/// spaces or slashes).
pub(crate) fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::encode_segment;

    #[test]
    fn segment_encoding_matches_uri_component_rules() {
        assert_eq!(encode_segment("Basic Plan"), "Basic%20Plan");
        assert_eq!(encode_segment("hair/spa"), "hair%2Fspa");
        assert_eq!(encode_segment("simple-name_1.0~x"), "simple-name_1.0~x");
    }
}
