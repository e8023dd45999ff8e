use super::Group;

/// Result of running a grammar: one slot per [`Group`].
///
/// A group that did not participate reads back as `""`, exactly like a group
/// that matched the empty string. Downstream stages only ever test for
/// emptiness.
#[derive(Debug, Clone)]
pub struct Captures<'a> {
    groups: &'static [Group],
    values: [Option<&'a str>; Group::COUNT],
}

impl<'a> Captures<'a> {
    fn new(groups: &'static [Group]) -> Self {
        Self {
            groups,
            values: [None; Group::COUNT],
        }
    }

    /// Record the text captured by `group`
    pub fn set(&mut self, group: Group, value: &'a str) {
        debug_assert!(self.groups.contains(&group), "{group:?} is not declared");
        self.values[group.index()] = Some(value);
    }

    /// Get the text captured by `group`, or `""` if it did not participate
    pub fn get(&self, group: Group) -> &'a str {
        self.values[group.index()].unwrap_or("")
    }

    fn clear(&mut self) {
        self.values = [None; Group::COUNT];
    }
}

/// A fixed capture grammar implemented as a hand-written scan
pub trait Grammar {
    /// Groups this grammar can capture
    const GROUPS: &'static [Group];

    /// Scan `input`, recording captures.
    /// Returns false when the input does not match at all.
    fn scan<'a>(input: &'a str, captures: &mut Captures<'a>) -> bool;
}

/// Run a grammar and collect its named groups.
/// A failed match leaves every group empty; this never fails.
pub fn named_matches<G: Grammar>(input: &str) -> Captures<'_> {
    let mut captures = Captures::new(G::GROUPS);
    if !G::scan(input, &mut captures) {
        captures.clear();
    }
    captures
}
