pub struct SfxSyntax;

impl SfxSyntax {
    pub const PREFIX: &'static str = "sfx:";

    /// Parses `sfx:<id>` where `id` is a positive decimal integer.
    pub fn parse(segment: &str) -> Option<u32> {
        let digits = segment.strip_prefix(Self::PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().filter(|&id| id > 0)
    }
}
