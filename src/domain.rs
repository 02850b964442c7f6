// src/domain.rs
// =============================================================================
// Decides whether two hosts belong to the same site.
//
// We use a deliberately simple rule: the "main domain" of a host is its last
// two dot-separated labels. So blog.example.com and www.example.com are the
// same site, while example.com and other.com are not.
//
// Known limitation: suffixes made of several labels (example.co.uk) collapse
// to "co.uk", so every *.co.uk host looks like the same site.
// =============================================================================

const SUB_DOMAIN_SEP: char = '.';
const MAIN_DOMAIN_PARTS: usize = 2;

// Converts sub.domain.com to domain.com
// and sub2.sub.domain.com to domain.com
pub fn main_domain(host: &str) -> &str {
    let labels = host.split(SUB_DOMAIN_SEP).count();
    if labels <= MAIN_DOMAIN_PARTS {
        return host;
    }

    // Byte offset just after the separator that starts the last two labels
    let start = host
        .match_indices(SUB_DOMAIN_SEP)
        .nth(labels - MAIN_DOMAIN_PARTS - 1)
        .map(|(idx, _)| idx + 1)
        .unwrap_or(0);

    &host[start..]
}

pub fn same_main_domain(host_a: &str, host_b: &str) -> bool {
    main_domain(host_a) == main_domain(host_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_domain_strips_subdomains() {
        assert_eq!(main_domain("a.b.example.com"), "example.com");
        assert_eq!(main_domain("www.example.com"), "example.com");
    }

    #[test]
    fn test_main_domain_keeps_short_hosts() {
        assert_eq!(main_domain("example.com"), "example.com");
        assert_eq!(main_domain("com"), "com");
        assert_eq!(main_domain("localhost"), "localhost");
    }

    #[test]
    fn test_main_domain_multi_label_suffix_limitation() {
        assert_eq!(main_domain("shop.example.co.uk"), "co.uk");
    }

    #[test]
    fn test_same_main_domain() {
        assert!(same_main_domain("a.example.com", "b.example.com"));
        assert!(same_main_domain("example.com", "www.example.com"));
        assert!(!same_main_domain("example.com", "other.com"));
    }
}
