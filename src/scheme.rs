use crate::types::SchemeType;

/// Default scheme sentinel: infer the scheme from the merged port
pub const AUTO_SCHEME: &str = "auto";

/// Get the scheme type from a scheme string (ASCII case-insensitive).
/// Filters by length and first byte before the full comparison.
pub fn get_scheme_type(scheme: &str) -> Option<SchemeType> {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (4, Some(b'h' | b'H')) if bytes.eq_ignore_ascii_case(b"http") => Some(SchemeType::Http),
        (5, Some(b'h' | b'H')) if bytes.eq_ignore_ascii_case(b"https") => {
            Some(SchemeType::Https)
        }
        _ => None,
    }
}

/// Infer a scheme from a port: "80" is http, "443" is https.
/// Returns an empty string for every other port.
pub fn infer_scheme(port: &str) -> &'static str {
    SchemeType::from_port(port).map_or("", SchemeType::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type("http"), Some(SchemeType::Http));
        assert_eq!(get_scheme_type("HTTPS"), Some(SchemeType::Https));
        assert_eq!(get_scheme_type("ftp"), None);
        assert_eq!(get_scheme_type(""), None);
    }

    #[test]
    fn test_infer_scheme() {
        assert_eq!(infer_scheme("80"), "http");
        assert_eq!(infer_scheme("443"), "https");
        assert_eq!(infer_scheme("8443"), "");
        assert_eq!(infer_scheme(""), "");
    }
}
