/// Schemes whose default port is recognised when inferring a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeType {
    Http,
    Https,
}

impl SchemeType {
    /// Get the scheme name, lower-case and without the trailing ':'
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }

    /// Find the scheme whose default port is exactly `port`.
    /// The comparison is textual: "080" is not port 80.
    pub fn from_port(port: &str) -> Option<Self> {
        match port {
            "80" => Some(Self::Http),
            "443" => Some(Self::Https),
            _ => None,
        }
    }
}
