use std::sync::OnceLock;

use regex::Regex;

use crate::fields::FieldBlock;
use crate::resolve::types::Hide;

pub struct HideSyntax;

impl HideSyntax {
    pub const SIGIL: char = '-';
    pub const PART_SEPARATOR: char = ',';

    /// Parses `-<field><N>` and `-<field><N>/<i>,<j>,...`.
    pub fn parse(segment: &str) -> Option<Hide> {
        if !segment.starts_with(Self::SIGIL) {
            return None;
        }
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| {
            Regex::new(r"^-([A-Za-z]+)([0-9]+)(?:/([0-9]+(?:,[0-9]+)*))?$")
                .expect("Invalid hide regex")
        });

        let caps = pattern.captures(segment)?;
        let reverse = match caps.get(3) {
            Some(parts) => {
                let indices = parts
                    .as_str()
                    .split(Self::PART_SEPARATOR)
                    .map(str::parse)
                    .collect::<Result<Vec<u32>, _>>()
                    .ok()?;
                // Part indices are 1-based.
                if indices.contains(&0) {
                    return None;
                }
                Some(indices)
            }
            None => None,
        };

        Some(Hide {
            target: FieldBlock::from_abbrev(&caps[1]),
            anchor: caps[2].parse().ok()?,
            reverse,
            raw: segment.to_string(),
        })
    }
}
