use super::captures::{Captures, Grammar, named_matches};
use super::Group;
use crate::checkers::{is_port, is_scheme_byte};
use crate::helpers::{prune_fragment, prune_query};

/// `[scheme ":"] opaque ["?" query] ["#" fragment]`
pub(crate) struct TopLevel;

impl Grammar for TopLevel {
    const GROUPS: &'static [Group] = &[
        Group::Scheme,
        Group::Opaque,
        Group::Query,
        Group::Fragment,
    ];

    fn scan<'a>(input: &'a str, captures: &mut Captures<'a>) -> bool {
        // The first '#' ends everything before it, then the first '?'
        let (rest, fragment) = prune_fragment(input);
        let (head, query) = prune_query(rest);

        let (scheme, opaque) = match scheme_end(head) {
            // The opaque part is required, so "http:" alone is not a scheme
            Some(colon) if colon + 1 < head.len() => (Some(&head[..colon]), &head[colon + 1..]),
            _ => (None, head),
        };

        if opaque.is_empty() {
            return false;
        }

        if let Some(scheme) = scheme {
            captures.set(Group::Scheme, scheme);
        }
        captures.set(Group::Opaque, opaque);
        if let Some(query) = query {
            captures.set(Group::Query, query);
        }
        if let Some(fragment) = fragment {
            captures.set(Group::Fragment, fragment);
        }
        true
    }
}

/// Find the colon ending the scheme in `head` (input without query and fragment).
///
/// The scheme is a non-empty run of bytes without ':', '.', or '/'. A colon
/// followed only by digits up to the first '/' separates a host from its port
/// instead: "localhost:8080" has no scheme.
fn scheme_end(head: &str) -> Option<usize> {
    let bytes = head.as_bytes();
    let colon = bytes.iter().position(|&b| !is_scheme_byte(b))?;
    if colon == 0 || bytes[colon] != b':' {
        return None;
    }

    let after = &head[colon + 1..];
    let authority_end = memchr::memchr(b'/', after.as_bytes()).unwrap_or(after.len());
    if is_port(&after[..authority_end]) {
        return None;
    }

    Some(colon)
}

/// Split a URL into its major components: (scheme, opaque, query, fragment).
///
/// Components are raw substrings of `input`. A component that is absent is
/// returned as `""`. The scheme is optional; query and fragment are only
/// recognised at the first '?' and '#', so a URL inside the query stays there.
///
/// # Examples
///
/// ```
/// use lenient_uri::split;
///
/// assert_eq!(
///     split("scheme://opaque?query#fragment"),
///     ("scheme", "//opaque", "query", "fragment")
/// );
/// assert_eq!(split("opaque?query#fragment"), ("", "opaque", "query", "fragment"));
/// ```
pub fn split(input: &str) -> (&str, &str, &str, &str) {
    let captures = named_matches::<TopLevel>(input);
    (
        captures.get(Group::Scheme),
        captures.get(Group::Opaque),
        captures.get(Group::Query),
        captures.get(Group::Fragment),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_all_components() {
        assert_eq!(
            split("scheme://opaque?query#fragment"),
            ("scheme", "//opaque", "query", "fragment")
        );
    }

    #[test]
    fn test_split_without_scheme() {
        assert_eq!(
            split("opaque?query#fragment"),
            ("", "opaque", "query", "fragment")
        );
    }

    #[test]
    fn test_split_without_query_or_fragment() {
        assert_eq!(
            split("scheme://opaque#fragment"),
            ("scheme", "//opaque", "", "fragment")
        );
        assert_eq!(
            split("scheme://opaque?query"),
            ("scheme", "//opaque", "query", "")
        );
    }

    #[test]
    fn test_dot_vetoes_scheme() {
        assert_eq!(split("google.com:8080"), ("", "google.com:8080", "", ""));
        assert_eq!(split("a.b:c"), ("", "a.b:c", "", ""));
    }

    #[test]
    fn test_digits_after_colon_are_a_port() {
        assert_eq!(split("localhost:8080"), ("", "localhost:8080", "", ""));
        assert_eq!(
            split("localhost:8080/x?y"),
            ("", "localhost:8080/x", "y", "")
        );
        // Anything else after the colon keeps the scheme
        assert_eq!(split("tel:+1234"), ("tel", "+1234", "", ""));
        assert_eq!(split("urn:8080x"), ("urn", "8080x", "", ""));
    }

    #[test]
    fn test_bracketed_host_is_not_a_scheme() {
        assert_eq!(split("[::1]:8080"), ("", "[::1]:8080", "", ""));
        assert_eq!(split("[::1]:8080/x"), ("", "[::1]:8080/x", "", ""));
        assert_eq!(split("[fe80::1]"), ("", "[fe80::1]", "", ""));
    }

    #[test]
    fn test_url_in_query_is_not_a_scheme() {
        assert_eq!(
            split("/foo?query=http://bad"),
            ("", "/foo", "query=http://bad", "")
        );
    }

    #[test]
    fn test_fragment_before_question_mark() {
        assert_eq!(split("a#b?c"), ("", "a", "", "b?c"));
        assert_eq!(split("a?#frag"), ("", "a", "", "frag"));
    }

    #[test]
    fn test_scheme_without_opaque_falls_back() {
        // "http:" cannot stand alone, so it is read as opaque text
        assert_eq!(split("http:?x"), ("", "http:", "x", ""));
        assert_eq!(split(":foo"), ("", ":foo", "", ""));
    }

    #[test]
    fn test_missing_opaque_fails_whole_match() {
        assert_eq!(split(""), ("", "", "", ""));
        assert_eq!(split("?q=1#f"), ("", "", "", ""));
        assert_eq!(split("#f"), ("", "", "", ""));
    }
}
