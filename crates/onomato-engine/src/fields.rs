use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four named field slots of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldBlock {
    Read,
    Def,
    Extra,
    /// Translation-specific notes.
    TlExtra,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown field block: {0}")]
pub struct UnknownFieldError(pub String);

impl FieldBlock {
    /// Resolution order. Global positions are handed out in this order.
    pub const ALL: [FieldBlock; 4] = [
        FieldBlock::Read,
        FieldBlock::Def,
        FieldBlock::Extra,
        FieldBlock::TlExtra,
    ];

    /// Maps a directive abbreviation to its block.
    ///
    /// Matching is case-insensitive. Anything unrecognised lands in
    /// [`FieldBlock::TlExtra`]; this never fails.
    pub fn from_abbrev(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "r" | "read" => FieldBlock::Read,
            "d" | "def" | "definition" => FieldBlock::Def,
            "e" | "ex" | "extra" => FieldBlock::Extra,
            _ => FieldBlock::TlExtra,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldBlock::Read => "read",
            FieldBlock::Def => "def",
            FieldBlock::Extra => "extra",
            FieldBlock::TlExtra => "tlExtra",
        }
    }
}

impl fmt::Display for FieldBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict API-boundary parsing: only the canonical block names are accepted.
impl FromStr for FieldBlock {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldBlock::ALL
            .into_iter()
            .find(|block| block.name() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// A value per field block.
///
/// Used both for the raw input strings ([`FieldInput`]) and the resolved
/// fragment lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMap<T> {
    pub read: T,
    pub def: T,
    pub extra: T,
    pub tl_extra: T,
}

/// The four raw field strings of an entry.
pub type FieldInput = FieldMap<String>;

impl<T> FieldMap<T> {
    pub fn new(read: T, def: T, extra: T, tl_extra: T) -> Self {
        Self {
            read,
            def,
            extra,
            tl_extra,
        }
    }

    /// Iterates the blocks in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldBlock, &T)> {
        FieldBlock::ALL.into_iter().map(move |block| (block, &self[block]))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FieldBlock, &mut T)> {
        [
            (FieldBlock::Read, &mut self.read),
            (FieldBlock::Def, &mut self.def),
            (FieldBlock::Extra, &mut self.extra),
            (FieldBlock::TlExtra, &mut self.tl_extra),
        ]
        .into_iter()
    }

    pub fn map<U>(self, mut f: impl FnMut(FieldBlock, T) -> U) -> FieldMap<U> {
        FieldMap {
            read: f(FieldBlock::Read, self.read),
            def: f(FieldBlock::Def, self.def),
            extra: f(FieldBlock::Extra, self.extra),
            tl_extra: f(FieldBlock::TlExtra, self.tl_extra),
        }
    }
}

impl<T> Index<FieldBlock> for FieldMap<T> {
    type Output = T;

    fn index(&self, block: FieldBlock) -> &T {
        match block {
            FieldBlock::Read => &self.read,
            FieldBlock::Def => &self.def,
            FieldBlock::Extra => &self.extra,
            FieldBlock::TlExtra => &self.tl_extra,
        }
    }
}

impl<T> IndexMut<FieldBlock> for FieldMap<T> {
    fn index_mut(&mut self, block: FieldBlock) -> &mut T {
        match block {
            FieldBlock::Read => &mut self.read,
            FieldBlock::Def => &mut self.def,
            FieldBlock::Extra => &mut self.extra,
            FieldBlock::TlExtra => &mut self.tl_extra,
        }
    }
}
