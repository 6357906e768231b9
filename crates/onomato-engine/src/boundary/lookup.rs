use std::fmt;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

/// Display data for a cross-referenced entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SfxLabel {
    pub id: u32,
    pub label: String,
}

/// External lookup that turns a cross-reference id into a label.
///
/// Returning `None` means the target does not exist (or could not be
/// fetched); callers decide how to render that.
pub trait EntryLookup: Send + Sync {
    fn lookup(&self, id: u32) -> Option<SfxLabel>;
}

/// Lookup that never finds anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLookup;

impl EntryLookup for NoLookup {
    fn lookup(&self, _id: u32) -> Option<SfxLabel> {
        None
    }
}

/// Deferred cross-reference resolution attached to an `sfx:` fragment.
///
/// Nothing is looked up until [`consume`](Self::consume) is called. The first
/// result (hit or miss) is memoized and shared between clones, so calling it
/// repeatedly or from several threads performs at most one lookup.
#[derive(Clone)]
pub struct CrossRefLink {
    id: u32,
    lookup: Arc<dyn EntryLookup>,
    resolved: Arc<OnceLock<Option<SfxLabel>>>,
}

impl CrossRefLink {
    pub fn new(id: u32, lookup: Arc<dyn EntryLookup>) -> Self {
        Self {
            id,
            lookup,
            resolved: Arc::new(OnceLock::new()),
        }
    }

    /// Whether the lookup has run yet.
    pub fn is_consumed(&self) -> bool {
        self.resolved.get().is_some()
    }

    pub fn consume(&self) -> Option<&SfxLabel> {
        self.resolved
            .get_or_init(|| self.lookup.lookup(self.id))
            .as_ref()
    }
}

// Links compare by target; the bound lookup is not part of the value.
impl PartialEq for CrossRefLink {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for CrossRefLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CrossRefLink")
            .field("id", &self.id)
            .field("consumed", &self.is_consumed())
            .finish()
    }
}
