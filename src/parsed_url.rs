use crate::checkers::parse_port;
use crate::compat::{String, ToString, format};
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;

/// A best-effort decomposition of a URL-like string.
///
/// Every component is raw text: nothing is percent-decoded, validated or
/// case-folded. An empty string means the component is unset.
///
/// Layout: `scheme:opaque?query#fragment`, where
/// `opaque = ["//"] authority path` and `authority = [userinfo "@"] host [":" port]`.
///
/// # Examples
///
/// ```
/// use lenient_uri::ParsedUrl;
///
/// let url = ParsedUrl::parse("http://j@ne:p@ssword@google.com/p@th?q=@go");
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.userinfo(), "j@ne:p@ssword");
/// assert_eq!(url.host(), "google.com");
/// assert_eq!(url.path(), "/p@th");
/// assert_eq!(url.query(), "q=@go");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub(crate) input: String,
    pub(crate) scheme: String,
    pub(crate) opaque: String,
    pub(crate) query: String,
    pub(crate) fragment: String,
    pub(crate) authority: String,
    pub(crate) path: String,
    pub(crate) userinfo: String,
    pub(crate) host: String,
    pub(crate) port: String,
    /// The opaque segment started with the "//" authority marker
    pub(crate) slashes: bool,
}

impl ParsedUrl {
    /// Whether [`normalize`](Self::normalize) decodes percent-encoded
    /// octets (RFC 3986 section 6.2.2.2). It does not: only scheme and host
    /// are normalized.
    pub const DECODES_PERCENT_ENCODING: bool = false;

    /// Parse a string into as many components as possible. Never fails.
    pub fn parse(input: &str) -> Self {
        crate::parser::parse(input)
    }

    /// Parse a string and fill empty components from `defaults`.
    /// See [`parse_with_defaults`](crate::parse_with_defaults).
    pub fn parse_with_defaults(input: &str, defaults: &Self) -> Self {
        crate::parser::parse_with_defaults(input, defaults)
    }

    /// Get the string this value was parsed from
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Get the scheme, without the trailing ':'
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Get the hier-part between scheme and query/fragment
    pub fn opaque(&self) -> &str {
        &self.opaque
    }

    /// Get the query, without the leading '?'
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the fragment, without the leading '#'
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Get the authority (`[userinfo@]host[:port]`)
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// Get the path, starting at its first '/'
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the userinfo (everything before the last '@' of the authority)
    pub fn userinfo(&self) -> &str {
        &self.userinfo
    }

    /// Get the host. IPv6 literals are returned without brackets.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Get the port digits
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Get the port as a number, if it fits in a u16
    pub fn port_number(&self) -> Option<u16> {
        parse_port(&self.port)
    }

    /// Check if the value has a recognisable authority.
    /// Without one, consumers should treat [`opaque`](Self::opaque) as an
    /// opaque path (`mailto:someone@example.com`).
    pub fn has_authority(&self) -> bool {
        !self.authority.is_empty()
    }

    /// Get the well-known scheme type, if any
    pub fn scheme_type(&self) -> Option<SchemeType> {
        get_scheme_type(&self.scheme)
    }

    /// Get "host:port", or just the host when there is no port.
    /// IPv6 hosts are wrapped in brackets again.
    pub fn host_and_port(&self) -> String {
        let host = if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };

        if self.port.is_empty() {
            host
        } else {
            format!("{host}:{}", self.port)
        }
    }

    /// Produce a normalized copy holding only the lower-cased scheme and host.
    ///
    /// This is partial: every other component is left empty, and
    /// percent-encoded octets are not decoded
    /// (see [`DECODES_PERCENT_ENCODING`](Self::DECODES_PERCENT_ENCODING)).
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::ParsedUrl;
    ///
    /// let url = ParsedUrl::parse("HTTP://Example.COM/Path").normalize();
    /// assert_eq!(url.scheme(), "http");
    /// assert_eq!(url.host(), "example.com");
    /// assert_eq!(url.path(), "");
    /// ```
    pub fn normalize(&self) -> Self {
        Self {
            scheme: self.scheme.to_lowercase(),
            host: self.host.to_lowercase(),
            ..Self::default()
        }
    }

    // Builders for fallback values passed to `parse_with_defaults`.
    // They set a single field and do not rebuild authority or opaque.

    /// Set the default scheme. [`AUTO_SCHEME`](crate::AUTO_SCHEME) infers it from the port.
    #[must_use]
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// Set the default userinfo
    #[must_use]
    pub fn with_userinfo(mut self, userinfo: &str) -> Self {
        self.userinfo = userinfo.to_string();
        self
    }

    /// Set the default host
    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Set the default port
    #[must_use]
    pub fn with_port(mut self, port: &str) -> Self {
        self.port = port.to_string();
        self
    }

    /// Set the default path
    #[must_use]
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    /// Set the default query
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    /// Set the default fragment
    #[must_use]
    pub fn with_fragment(mut self, fragment: &str) -> Self {
        self.fragment = fragment.to_string();
        self
    }
}
