/// Check if a byte may appear inside a scheme.
/// A scheme stops at `:` and never contains `.`, which is what separates
/// `http:` from a dotted `host.name:port`. Path, query and fragment
/// delimiters also end the scan, as do IPv6 literal brackets.
pub fn is_scheme_byte(b: u8) -> bool {
    !matches!(b, b':' | b'.' | b'/' | b'?' | b'#' | b'[' | b']')
}

/// Check if a string is a port: one or more ASCII digits and nothing else.
pub fn is_port(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Length of the leading ASCII digit run.
pub fn leading_digits(input: &str) -> usize {
    input.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if !is_port(port) {
        return None;
    }
    port.parse::<u16>().ok()
}
