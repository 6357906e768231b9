use std::collections::VecDeque;

use log::trace;

use crate::fields::{FieldBlock, FieldMap};

use super::{
    classify::SegmentClassifier,
    counter::ListCounter,
    kinds::SEPARATOR,
    types::{Directive, Entry, Hide, Jump, Position, ResolvedFields, Segment},
};

/// A directive waiting to be applied, with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending<D> {
    pub origin: FieldBlock,
    /// Position the directive would have taken had it been a fragment.
    pub slot: u32,
    pub directive: D,
}

/// Block resolver output: per-block entry lists plus the directives that still
/// have to be applied, both queues in discovery order.
#[derive(Debug, Default)]
pub struct Draft {
    pub blocks: ResolvedFields,
    pub jumps: VecDeque<Pending<Jump>>,
    pub hides: Vec<Pending<Hide>>,
}

impl Draft {
    /// Makes room for a new whole entry at `at` by moving everything at or
    /// after it one step later: entries of every block (relocated ones
    /// included) and the slots of pending directives.
    pub fn open_slot(&mut self, at: u32) {
        for (_, entries) in self.blocks.iter_mut() {
            for entry in entries.iter_mut().filter(|e| e.position.anchor() >= at) {
                entry.position.bump();
            }
        }
        for slot in self
            .jumps
            .iter_mut()
            .map(|p| &mut p.slot)
            .chain(self.hides.iter_mut().map(|p| &mut p.slot))
        {
            if *slot >= at {
                *slot += 1;
            }
        }
    }

    /// Keeps pending anchors into `block` pointing at the entry their author
    /// meant after a new whole entry is inserted as the `(before + 1)`-th one.
    pub fn shift_anchors(&mut self, block: FieldBlock, before: u32) {
        let anchors = self
            .jumps
            .iter_mut()
            .filter(|p| p.directive.target == block)
            .map(|p| &mut p.directive.anchor)
            .chain(
                self.hides
                    .iter_mut()
                    .filter(|p| p.directive.target == block)
                    .map(|p| &mut p.directive.anchor),
            );
        for anchor in anchors {
            if *anchor > before {
                *anchor = anchor.saturating_add(1);
            }
        }
    }
}

/// Drives the classifier over the field blocks.
///
/// Positions come from one counter shared by all blocks, so entries of
/// different blocks interleave in authoring order. The list counter is
/// per block.
pub struct DraftBuilder<'c> {
    classifier: &'c SegmentClassifier,
    next: u32,
    draft: Draft,
}

impl<'c> DraftBuilder<'c> {
    pub fn new(classifier: &'c SegmentClassifier) -> Self {
        Self {
            classifier,
            next: 1,
            draft: Draft::default(),
        }
    }

    pub fn push_block(&mut self, block: FieldBlock, text: &str) {
        let mut counter = ListCounter::default();

        for segment in text.split(SEPARATOR).filter(|s| !s.trim().is_empty()) {
            let classified = self.classifier.classify(segment, &mut counter);
            trace!("{block}: {:?} -> {classified:?}", segment.trim());

            match classified {
                Segment::Directive(Directive::Jump(jump)) => {
                    let pending = self.pending(block, jump);
                    self.draft.jumps.push_back(pending)
                }
                Segment::Directive(Directive::Hide(hide)) => {
                    let pending = self.pending(block, hide);
                    self.draft.hides.push(pending)
                }
                Segment::Fragment(fragment) => {
                    let entry = Entry::new(Position::whole(self.next), fragment);
                    self.draft.blocks[block].push(entry);
                    self.next += 1;
                }
            }
        }
    }

    pub fn finish(self) -> Draft {
        self.draft
    }

    fn pending<D>(&self, origin: FieldBlock, directive: D) -> Pending<D> {
        Pending {
            origin,
            slot: self.next,
            directive,
        }
    }
}

/// Runs the block resolver over all four inputs in resolution order.
pub fn build_draft<S: AsRef<str>>(classifier: &SegmentClassifier, input: &FieldMap<S>) -> Draft {
    let mut builder = DraftBuilder::new(classifier);
    for (block, text) in input.iter() {
        builder.push_block(block, text.as_ref());
    }
    builder.finish()
}
