/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
/// Fragment is returned WITHOUT the leading '#'
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Prune query (?search) from a URL string that has no fragment left.
/// Returns (`url_without_query`, `query_without_question_mark`)
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split at the last '@'.
/// Returns (`userinfo`, `rest`); userinfo keeps every earlier '@' verbatim.
pub fn split_at_last_at(input: &str) -> (&str, &str) {
    memchr::memrchr(b'@', input.as_bytes())
        .map_or(("", input), |pos| (&input[..pos], &input[pos + 1..]))
}
