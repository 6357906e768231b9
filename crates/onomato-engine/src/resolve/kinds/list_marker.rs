/// Leading marker that switches a block into ordered-list mode.
pub struct ListMarker;

impl ListMarker {
    pub const MARKER: &'static str = "- ";

    /// Strips the marker, reporting whether it was present.
    pub fn strip(text: &str) -> (bool, &str) {
        match text.strip_prefix(Self::MARKER) {
            Some(rest) => (true, rest),
            None => (false, text),
        }
    }
}
