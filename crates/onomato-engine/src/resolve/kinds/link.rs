use std::sync::OnceLock;

use regex::Regex;
use url::Url;

pub struct LinkSyntax;

impl LinkSyntax {
    /// Parses `[<url>](<label>)` and returns `(url, label)`.
    ///
    /// The url must be absolute; anything `Url::parse` rejects leaves the
    /// segment as plain text.
    pub fn parse(segment: &str) -> Option<(&str, &str)> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| {
            Regex::new(r"(?s)^\[([^\]]+)\]\((.*)\)$").expect("Invalid link regex")
        });

        let caps = pattern.captures(segment)?;
        let url = caps.get(1)?.as_str();
        let label = caps.get(2)?.as_str();
        Url::parse(url).ok()?;
        Some((url, label))
    }
}
