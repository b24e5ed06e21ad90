//! Helpers for sanitizing page URLs before they enter logs or span fields.
//!
//! Product page URLs routinely carry session tokens and tracking parameters
//! in the query string; only the origin and path are diagnostic.

/// Strips the query string, fragment, and any userinfo from a page URL.
///
/// - `https://www.amazon.com/dp/B01?tag=tracker` → `https://www.amazon.com/dp/B01`
/// - `https://user:pw@shop.example/cart` → `https://****@shop.example/cart`
pub fn redact_url(url: &str) -> String {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let base = &url[..end];

    // Userinfo may appear between the scheme and the host.
    if let Some(scheme_end) = base.find("://") {
        let authority_start = scheme_end + 3;
        let authority_end = base[authority_start..]
            .find('/')
            .map(|i| authority_start + i)
            .unwrap_or(base.len());
        if let Some(at_pos) = base[authority_start..authority_end].rfind('@') {
            return format!(
                "{}****@{}",
                &base[..authority_start],
                &base[authority_start + at_pos + 1..]
            );
        }
    }

    base.to_string()
}
