//! Address normalization.

/// Normalize an address into a well-formed base URL.
///
/// Bare `host:port` strings get an `http://` prefix; trailing slashes are
/// stripped so the result joins cleanly with endpoint paths.
///
/// # Example
///
/// ```
/// use ndjson_client::format_address;
///
/// assert_eq!(format_address("localhost:11434///"), "http://localhost:11434");
/// assert_eq!(format_address("https://example.com"), "https://example.com");
/// ```
pub fn format_address(address: &str) -> String {
    let mut address = if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("http://{address}")
    };

    while address.ends_with('/') {
        address.pop();
    }

    address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_http_prefix() {
        assert_eq!(format_address("localhost:11434"), "http://localhost:11434");
    }

    #[test]
    fn http_scheme_unchanged() {
        assert_eq!(format_address("http://example.com"), "http://example.com");
    }

    #[test]
    fn https_scheme_unchanged() {
        assert_eq!(
            format_address("https://example.com:8080"),
            "https://example.com:8080"
        );
    }

    #[test]
    fn all_trailing_slashes_stripped() {
        assert_eq!(format_address("example.com///"), "http://example.com");
    }

    #[test]
    fn single_trailing_slash_stripped() {
        assert_eq!(
            format_address("https://example.com/"),
            "https://example.com"
        );
    }

    #[test]
    fn path_preserved() {
        assert_eq!(
            format_address("example.com/api/tags/"),
            "http://example.com/api/tags"
        );
    }
}
