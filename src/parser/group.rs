/// Named capture groups produced by the splitting grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Text before the top-level ':' (no '.')
    Scheme,
    /// hier-part between scheme and query/fragment
    Opaque,
    /// Text after '?', before '#'
    Query,
    /// Text after '#'
    Fragment,
    /// The "//" authority marker at the start of the opaque segment
    Slashes,
    /// Authority run inside the opaque segment
    Authority,
    /// Opaque suffix starting at the first '/' after the authority
    Path,
    /// Bracketed IPv6 literal, brackets stripped
    Host6,
    /// Plain host token
    Host,
    /// Digits after ':'
    Port,
}

impl Group {
    /// Number of variants
    pub const COUNT: usize = 10;

    /// Slot of this group inside a capture table
    pub const fn index(self) -> usize {
        self as usize
    }
}
