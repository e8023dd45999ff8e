use super::captures::{Captures, Grammar, named_matches};
use super::Group;
use crate::checkers::leading_digits;
use crate::helpers::split_at_last_at;

/// `["[" host6 "]" | host] [":" port]` over an authority without userinfo
pub(crate) struct HostPort;

impl Grammar for HostPort {
    const GROUPS: &'static [Group] = &[Group::Host6, Group::Host, Group::Port];

    fn scan<'a>(input: &'a str, captures: &mut Captures<'a>) -> bool {
        let rest = match bracketed(input) {
            Some((host6, rest)) => {
                captures.set(Group::Host6, host6);
                rest
            }
            None => {
                let host_end = memchr::memchr(b':', input.as_bytes()).unwrap_or(input.len());
                if host_end > 0 {
                    captures.set(Group::Host, &input[..host_end]);
                }
                &input[host_end..]
            }
        };

        // Only digits make a port; "host:http" drops the suffix
        if let Some(port) = rest.strip_prefix(':') {
            let digits = leading_digits(port);
            if digits > 0 {
                captures.set(Group::Port, &port[..digits]);
            }
        }
        true
    }
}

/// Split "[contents]rest" into (contents, rest). Contents must be non-empty.
fn bracketed(input: &str) -> Option<(&str, &str)> {
    let inner = input.strip_prefix('[')?;
    match memchr::memchr(b']', inner.as_bytes()) {
        Some(close) if close > 0 => Some((&inner[..close], &inner[close + 1..])),
        _ => None,
    }
}

/// Split an authority into (userinfo, host, port).
///
/// Userinfo is everything before the last '@', so stray '@' characters in a
/// username or password are kept. IPv6 literals lose their brackets.
///
/// # Examples
///
/// ```
/// use lenient_uri::split_userinfo_host_port;
///
/// assert_eq!(
///     split_userinfo_host_port("j@ne:p@ss@[::1]:8080"),
///     ("j@ne:p@ss", "::1", "8080")
/// );
/// ```
pub fn split_userinfo_host_port(authority: &str) -> (&str, &str, &str) {
    let (userinfo, rest) = split_at_last_at(authority);
    let captures = named_matches::<HostPort>(rest);
    let host = match captures.get(Group::Host) {
        "" => captures.get(Group::Host6),
        host => host,
    };
    (userinfo, host, captures.get(Group::Port))
}
