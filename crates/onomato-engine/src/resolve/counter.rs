/// Ordered-list state for one counting sequence.
///
/// A block starts with the mode off. A list marker switches it on, and from
/// then on every String fragment takes the next ordinal; other fragment kinds
/// neither take a number nor reset the count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListCounter {
    last: Option<u32>,
}

impl ListCounter {
    /// Picks up a sequence whose last assigned ordinal was `last`.
    pub fn continuing(last: Option<u32>) -> Self {
        Self { last }
    }

    /// Ordinal for the next String fragment, if the list mode is on.
    pub fn assign(&mut self, marked: bool) -> Option<u32> {
        if marked && self.last.is_none() {
            self.last = Some(0);
        }
        self.last = self.last.map(|n| n + 1);
        self.last
    }
}
