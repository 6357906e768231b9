use std::sync::OnceLock;

use regex::Regex;

use crate::fields::FieldBlock;
use crate::resolve::types::Jump;

pub struct JumpSyntax;

impl JumpSyntax {
    pub const SIGIL: char = '_';

    /// Parses `_<field><N>:<payload>`. The payload must not be empty.
    ///
    /// An anchor too large for `u32` is not a jump at all.
    pub fn parse(segment: &str) -> Option<Jump> {
        if !segment.starts_with(Self::SIGIL) {
            return None;
        }
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| {
            Regex::new(r"(?s)^_([A-Za-z]+)([0-9]+):(.+)$").expect("Invalid jump regex")
        });

        let caps = pattern.captures(segment)?;
        Some(Jump {
            target: FieldBlock::from_abbrev(&caps[1]),
            anchor: caps[2].parse().ok()?,
            payload: caps[3].to_string(),
            raw: segment.to_string(),
        })
    }
}
