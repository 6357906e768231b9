//! # Field Resolution
//!
//! Turns the four raw field strings of an entry into four ordered lists of
//! typed, positioned, hideable fragments.
//!
//! ## Phases
//!
//! 1. **Block resolution** (`builder`): every block is split on `;` and each
//!    segment classified. Fragments get the next position from a counter
//!    shared by all blocks; jump and hide directives are queued instead.
//! 2. **Relocation** (`relocate`): jumps are applied in discovery order. A
//!    satisfied jump lands at `anchor + 0.5` in its target block; an
//!    unsatisfiable one is put back as literal text where it was written and
//!    everything after it moves one step.
//! 3. **Suppression** (`suppress`): hides are applied to the final lists.
//!
//! ## Modules
//!
//! - **`types`**: `Entry`, `Fragment`, `Position`, `Hidden` and the directives
//! - **`kinds`**: syntax of each segment kind, delimiters included
//! - **`classify`**: `SegmentClassifier`, precedence between kinds
//! - **`counter`**: `ListCounter` for ordered-list numbering
//! - **`builder`**: `DraftBuilder` and the `Draft` it produces
//! - **`relocate`** / **`suppress`**: the directive phases
//! - **`snapshot`**: normalized rendering and invariant checks for tests
//!
//! ## Key Invariants
//!
//! - Resolution is total: any input yields four lists, nothing panics
//! - Lists are sorted by position; whole positions are unique across blocks
//! - Directive anchors count whole entries of the target block only

pub mod builder;
pub mod classify;
pub mod counter;
pub mod kinds;
pub mod relocate;
pub mod snapshot;
pub mod suppress;
pub mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::boundary::EntryLookup;
use crate::fields::FieldMap;

pub use classify::SegmentClassifier;
pub use types::{Entry, Fragment, Hidden, Position, ResolvedFields};

/// Resolves field blocks, binding `sfx:` fragments to a lookup.
#[derive(Clone, Default)]
pub struct Resolver {
    classifier: SegmentClassifier,
}

impl Resolver {
    pub fn new(lookup: Arc<dyn EntryLookup>) -> Self {
        Self {
            classifier: SegmentClassifier::new(lookup),
        }
    }

    pub fn resolve<S: AsRef<str>>(&self, input: &FieldMap<S>) -> ResolvedFields {
        let mut draft = builder::build_draft(&self.classifier, input);
        relocate::relocate(&mut draft, &self.classifier);
        suppress::suppress(&mut draft);
        draft.blocks
    }
}

/// Resolves without a cross-reference lookup; every `sfx:` fragment's
/// `consume` yields no label.
pub fn resolve<S: AsRef<str>>(input: &FieldMap<S>) -> ResolvedFields {
    Resolver::default().resolve(input)
}
