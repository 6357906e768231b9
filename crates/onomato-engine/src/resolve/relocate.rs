use log::debug;

use super::{
    builder::{Draft, Pending},
    classify::SegmentClassifier,
    counter::ListCounter,
    types::{Entry, Fragment, Jump, Position, Segment},
};

/// Index into `entries` of the `anchor`-th (1-based) whole-positioned entry.
///
/// Relocated entries are skipped when counting.
pub fn find_anchor(entries: &[Entry], anchor: u32) -> Option<usize> {
    let nth = usize::try_from(anchor).ok()?.checked_sub(1)?;
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.position.is_whole())
        .nth(nth)
        .map(|(i, _)| i)
}

/// Applies every queued jump in discovery order.
pub fn relocate(draft: &mut Draft, classifier: &SegmentClassifier) {
    while let Some(pending) = draft.jumps.pop_front() {
        if !try_jump(draft, classifier, &pending) {
            recover(draft, pending);
        }
    }
}

/// Splices the payload after its anchor. Returns `false` when the jump cannot
/// be satisfied, leaving the draft untouched.
fn try_jump(draft: &mut Draft, classifier: &SegmentClassifier, pending: &Pending<Jump>) -> bool {
    let jump = &pending.directive;
    if jump.target == pending.origin {
        return false;
    }

    let entries = &mut draft.blocks[jump.target];
    let Some(anchor_idx) = find_anchor(entries, jump.anchor) else {
        return false;
    };

    let position = entries[anchor_idx].position.half_after();
    let at = entries.partition_point(|e| e.position <= position);

    // Payloads landing on the same anchor share one list sequence.
    let last = entries[..at]
        .iter()
        .rev()
        .take_while(|e| e.position == position)
        .find_map(|e| e.fragment.counter());
    let mut counter = ListCounter::continuing(last);

    let fragment = match classifier.classify(&jump.payload, &mut counter) {
        Segment::Fragment(fragment) => fragment,
        // One level only: a nested directive is kept as its text.
        Segment::Directive(inner) => Fragment::text(inner.raw()),
    };

    let mut entry = Entry::new(position, fragment);
    entry.jumped_from = Some(pending.origin);
    entries.insert(at, entry);
    true
}

/// Puts the directive's own text back where it was authored.
fn recover(draft: &mut Draft, pending: Pending<Jump>) {
    let Pending {
        origin,
        slot,
        directive,
    } = pending;
    debug!(
        "jump {:?} from {origin} cannot reach {}#{}, keeping it as text",
        directive.raw, directive.target, directive.anchor
    );

    let before = draft.blocks[origin]
        .iter()
        .filter(|e| e.position.is_whole() && e.position.anchor() < slot)
        .count();
    let before = u32::try_from(before).unwrap_or(u32::MAX);

    draft.open_slot(slot);
    draft.shift_anchors(origin, before);

    let position = Position::whole(slot);
    let entries = &mut draft.blocks[origin];
    let at = entries.partition_point(|e| e.position < position);
    entries.insert(at, Entry::new(position, Fragment::text(directive.raw)));
}
