/// Errors that can occur when converting a parsed value into a `url::Url`.
/// Parsing itself never fails, so this type only exists with the `url`
/// feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The value has no scheme, so it cannot be an absolute URL
    MissingScheme,
    /// The reassembled string was rejected by the strict parser
    InvalidUrl,
}

impl core::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MissingScheme => "Missing scheme",
            Self::InvalidUrl => "Invalid URL",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConvertError {}

/// Result type for URL conversion operations
pub type Result<T> = core::result::Result<T, ConvertError>;
