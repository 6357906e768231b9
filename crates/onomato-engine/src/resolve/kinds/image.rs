pub struct ImageSyntax;

impl ImageSyntax {
    pub const PREFIX: &'static str = "img:";
    pub const LOCAL: char = '@';

    /// Returns the url (local marker stripped) and whether it is local.
    pub fn parse(segment: &str) -> Option<(&str, bool)> {
        let url = segment.strip_prefix(Self::PREFIX)?;
        let (url, is_local) = match url.strip_prefix(Self::LOCAL) {
            Some(name) => (name, true),
            None => (url, false),
        };
        (!url.is_empty()).then_some((url, is_local))
    }
}
