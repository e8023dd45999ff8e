use super::captures::{Captures, Grammar, named_matches};
use super::Group;

/// `[["//"] authority] [path]` over the opaque segment
pub(crate) struct AuthorityPath;

impl Grammar for AuthorityPath {
    const GROUPS: &'static [Group] = &[Group::Slashes, Group::Authority, Group::Path];

    fn scan<'a>(opaque: &'a str, captures: &mut Captures<'a>) -> bool {
        let (slashes, body) = match opaque.strip_prefix("//") {
            Some(body) => (&opaque[..2], body),
            None => ("", opaque),
        };
        let authority_end = memchr::memchr(b'/', body.as_bytes()).unwrap_or(body.len());

        if authority_end == 0 {
            // No authority token: the untouched opaque is the path ("///x")
            if opaque.starts_with('/') {
                captures.set(Group::Path, opaque);
            }
            return true;
        }

        if !slashes.is_empty() {
            captures.set(Group::Slashes, slashes);
        }
        captures.set(Group::Authority, &body[..authority_end]);
        if authority_end < body.len() {
            captures.set(Group::Path, &body[authority_end..]);
        }
        true
    }
}

/// Split an opaque segment into (authority, path).
///
/// A leading "//" is consumed as a marker; the authority is the following run
/// of non-'/' bytes and the path is everything from the next '/'.
///
/// # Examples
///
/// ```
/// use lenient_uri::split_authority_from_path;
///
/// assert_eq!(split_authority_from_path("//user@host:80/a/b"), ("user@host:80", "/a/b"));
/// assert_eq!(split_authority_from_path("///threeslashes"), ("", "///threeslashes"));
/// ```
pub fn split_authority_from_path(opaque: &str) -> (&str, &str) {
    let captures = named_matches::<AuthorityPath>(opaque);
    (captures.get(Group::Authority), captures.get(Group::Path))
}
