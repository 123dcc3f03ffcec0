//! Host/domain suffix matching.

/// True if `host` is `domain` or a subdomain of it.
///
/// Both sides are expected lower-case. Matching is on label boundaries, so
/// `notyoutube.com` does not match `youtube.com`.
pub fn host_matches(host: &str, domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }
    match host.strip_suffix(domain) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_subdomain() {
        assert!(host_matches("youtube.com", "youtube.com"));
        assert!(host_matches("m.youtube.com", "youtube.com"));
        assert!(host_matches("www.my-pvl.com", "my-pvl.com"));
    }

    #[test]
    fn label_boundary() {
        assert!(!host_matches("notyoutube.com", "youtube.com"));
        assert!(!host_matches("youtube.com.evil.net", "youtube.com"));
        assert!(!host_matches("x.com", ""));
    }
}
