//! Permissive decomposition of URL-like strings.
//!
//! Any string is split into scheme, authority (userinfo, host, port), path,
//! query and fragment as far as it can be, without requiring RFC 3986
//! conformance. Nothing is rejected and nothing is decoded.
//!
//! ```
//! use lenient_uri::parse;
//!
//! let url = parse("google.com:8080");
//! assert_eq!(url.scheme(), "");
//! assert_eq!(url.host(), "google.com");
//! assert_eq!(url.port(), "8080");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Logging macro - no-op when the logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

/// Logging macro - use log crate when the logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod defaults;
#[cfg(feature = "url")]
mod error;
mod helpers;
#[cfg(feature = "url")]
mod interop;
mod parsed_url;
mod parser;
mod scheme;
mod types;

// Public API
#[cfg(feature = "url")]
pub use error::{ConvertError, Result};
pub use parsed_url::ParsedUrl;
pub use parser::{
    parse, parse_with_defaults, split, split_authority_from_path, split_userinfo_host_port,
};
pub use scheme::AUTO_SCHEME;
pub use types::SchemeType;
