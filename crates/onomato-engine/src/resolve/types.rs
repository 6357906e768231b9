use std::fmt;

use serde::{Serialize, Serializer};

use crate::boundary::CrossRefLink;
use crate::fields::{FieldBlock, FieldMap};

/// Ordering key of a resolved entry.
///
/// Entries taken from a block's own text sit on whole numbers. Relocated
/// entries sit half a step after the entry they were anchored to, so `3.5`
/// sorts after `3` and before `4`. Ordering is derived field by field, which
/// gives exactly that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    whole: u32,
    half: bool,
}

impl Position {
    pub fn whole(n: u32) -> Self {
        Self {
            whole: n,
            half: false,
        }
    }

    /// The position of entries relocated after `self`.
    pub fn half_after(self) -> Self {
        Self {
            whole: self.whole,
            half: true,
        }
    }

    pub fn is_whole(self) -> bool {
        !self.half
    }

    /// The integer part; for a relocated entry this is its anchor.
    pub fn anchor(self) -> u32 {
        self.whole
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.whole) + if self.half { 0.5 } else { 0.0 }
    }

    /// Moves the position one whole step later, keeping it whole or half.
    pub(crate) fn bump(&mut self) {
        self.whole += 1;
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.half {
            write!(f, "{}.5", self.whole)
        } else {
            write!(f, "{}", self.whole)
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.half {
            serializer.serialize_f64(self.as_f64())
        } else {
            serializer.serialize_u32(self.whole)
        }
    }
}

/// Suppression state of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Hidden {
    #[default]
    Visible,
    /// The whole entry is suppressed.
    All,
    /// Only these parts are suppressed, 1-based and counted from the end.
    Reverse(Vec<u32>),
}

impl Hidden {
    pub fn is_visible(&self) -> bool {
        matches!(self, Hidden::Visible)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Hidden::All)
    }

    /// Combines another suppression into this one.
    ///
    /// `All` absorbs everything and partial lists are unioned, so applying the
    /// same suppression twice is a no-op.
    pub fn merge(&mut self, other: Hidden) {
        *self = match (std::mem::take(self), other) {
            (Hidden::All, _) | (_, Hidden::All) => Hidden::All,
            (current, Hidden::Visible) => current,
            (Hidden::Visible, Hidden::Reverse(indices)) => Hidden::Reverse(normalized(indices)),
            (Hidden::Reverse(mut current), Hidden::Reverse(indices)) => {
                current.extend(indices);
                Hidden::Reverse(normalized(current))
            }
        };
    }

    /// Whether part `index` (0-based from the front) of `len` parts is hidden.
    pub fn hides_part(&self, index: usize, len: usize) -> bool {
        match self {
            Hidden::Visible => false,
            Hidden::All => true,
            Hidden::Reverse(indices) => index < len
                && u32::try_from(len - index).is_ok_and(|from_end| indices.contains(&from_end)),
        }
    }

    /// Filters the parts of a multi-valued fragment down to the visible ones.
    pub fn visible_parts<'a>(&self, parts: &[&'a str]) -> Vec<&'a str> {
        parts
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.hides_part(*i, parts.len()))
            .map(|(_, part)| *part)
            .collect()
    }
}

fn normalized(mut indices: Vec<u32>) -> Vec<u32> {
    indices.sort_unstable();
    indices.dedup();
    indices
}

impl Serialize for Hidden {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Hidden::Visible => serializer.serialize_bool(false),
            Hidden::All => serializer.serialize_bool(true),
            Hidden::Reverse(indices) => indices.serialize(serializer),
        }
    }
}

/// Typed payload of a resolved entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Fragment {
    String {
        text: String,
        /// Ordinal when the text is part of a list.
        #[serde(skip_serializing_if = "Option::is_none")]
        counter: Option<u32>,
    },
    Image {
        url: String,
        /// `url` is a filename in the local asset store.
        is_local: bool,
    },
    Link {
        url: String,
        label: String,
    },
    #[serde(rename = "sfxlink")]
    CrossRef {
        id: u32,
        #[serde(skip)]
        link: CrossRefLink,
    },
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::String {
            text: text.into(),
            counter: None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Fragment::String { .. } => "string",
            Fragment::Image { .. } => "image",
            Fragment::Link { .. } => "link",
            Fragment::CrossRef { .. } => "sfxlink",
        }
    }

    pub fn counter(&self) -> Option<u32> {
        match self {
            Fragment::String { counter, .. } => *counter,
            _ => None,
        }
    }
}

/// A resolved, positioned fragment of a field block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub position: Position,
    pub hidden: Hidden,
    /// Block the fragment was relocated from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jumped_from: Option<FieldBlock>,
    #[serde(flatten)]
    pub fragment: Fragment,
}

impl Entry {
    pub fn new(position: Position, fragment: Fragment) -> Self {
        Self {
            position,
            hidden: Hidden::Visible,
            jumped_from: None,
            fragment,
        }
    }
}

/// Resolver output: one ordered entry list per block.
pub type ResolvedFields = FieldMap<Vec<Entry>>;

/// `_<field><N>:<payload>`: move `payload` after the `N`-th entry of `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jump {
    pub target: FieldBlock,
    /// 1-based index among the target's whole-positioned entries.
    pub anchor: u32,
    pub payload: String,
    /// The segment exactly as authored.
    pub raw: String,
}

/// `-<field><N>[/<i>,<j>...]`: suppress the `N`-th entry of `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hide {
    pub target: FieldBlock,
    pub anchor: u32,
    pub reverse: Option<Vec<u32>>,
    pub raw: String,
}

impl Hide {
    pub fn hidden(&self) -> Hidden {
        match &self.reverse {
            Some(indices) => Hidden::Reverse(indices.clone()),
            None => Hidden::All,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Jump(Jump),
    Hide(Hide),
}

impl Directive {
    pub fn raw(&self) -> &str {
        match self {
            Directive::Jump(jump) => &jump.raw,
            Directive::Hide(hide) => &hide.raw,
        }
    }
}

/// What a single segment turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Directive(Directive),
    Fragment(Fragment),
}
