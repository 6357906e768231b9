use log::debug;

use super::{builder::Draft, relocate::find_anchor};

/// Applies every queued hide against the final block lists.
///
/// The anchor entry takes the directive's suppression and so does every
/// entry relocated onto it. Hides whose anchor does not exist are dropped.
pub fn suppress(draft: &mut Draft) {
    for pending in std::mem::take(&mut draft.hides) {
        let hide = pending.directive;
        let entries = &mut draft.blocks[hide.target];

        let Some(idx) = find_anchor(entries, hide.anchor) else {
            debug!(
                "hide {:?} from {} has no entry {}#{}, dropped",
                hide.raw, pending.origin, hide.target, hide.anchor
            );
            continue;
        };

        let hidden = hide.hidden();
        let children = entries[idx].position.half_after();
        entries[idx].hidden.merge(hidden.clone());
        for child in entries.iter_mut().filter(|e| e.position == children) {
            child.hidden.merge(hidden.clone());
        }
    }
}
