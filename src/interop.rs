//! Conversion into the `url` crate's strict [`url::Url`].
//!
//! Components are passed through raw; `url` applies its own percent-encoding
//! and host validation, so a lenient parse may still be rejected here.
use crate::compat::String;
use crate::error::{ConvertError, Result};
use crate::parsed_url::ParsedUrl;

/// Reassemble `scheme:[//authority]path?query#fragment` from components.
/// Values without an authority use their opaque segment as the path.
fn serialize(parsed: &ParsedUrl) -> String {
    let mut buffer = String::with_capacity(parsed.input.len() + 3);
    buffer.push_str(&parsed.scheme);
    buffer.push(':');

    if parsed.has_authority() {
        buffer.push_str("//");
        buffer.push_str(&parsed.authority);
        buffer.push_str(&parsed.path);
    } else {
        buffer.push_str(&parsed.opaque);
    }

    if !parsed.query.is_empty() {
        buffer.push('?');
        buffer.push_str(&parsed.query);
    }
    if !parsed.fragment.is_empty() {
        buffer.push('#');
        buffer.push_str(&parsed.fragment);
    }
    buffer
}

impl ParsedUrl {
    /// Convert into a [`url::Url`].
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MissingScheme`] if the scheme is empty and
    /// [`ConvertError::InvalidUrl`] if `url` rejects the reassembled string.
    ///
    /// # Examples
    ///
    /// ```
    /// use lenient_uri::{AUTO_SCHEME, ParsedUrl};
    ///
    /// let defaults = ParsedUrl::default().with_scheme(AUTO_SCHEME);
    /// let url = ParsedUrl::parse_with_defaults("example.com:443/a", &defaults).to_url()?;
    /// assert_eq!(url.as_str(), "https://example.com/a");
    /// # Ok::<(), lenient_uri::ConvertError>(())
    /// ```
    pub fn to_url(&self) -> Result<url::Url> {
        if self.scheme.is_empty() {
            return Err(ConvertError::MissingScheme);
        }
        url::Url::parse(&serialize(self)).map_err(|_| ConvertError::InvalidUrl)
    }
}

impl TryFrom<&ParsedUrl> for url::Url {
    type Error = ConvertError;

    fn try_from(parsed: &ParsedUrl) -> Result<Self> {
        parsed.to_url()
    }
}
