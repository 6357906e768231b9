use std::collections::HashSet;

use crate::resolve::types::ResolvedFields;

/// Panics if the resolved fields break an ordering invariant.
///
/// - every list is sorted by position
/// - no whole position appears twice, in any block
/// - every relocated entry follows a whole entry of its own anchor
pub fn check(fields: &ResolvedFields) {
    let mut seen = HashSet::new();

    for (block, entries) in fields.iter() {
        for pair in entries.windows(2) {
            assert!(
                pair[0].position <= pair[1].position,
                "{block}: {} sorted after {}",
                pair[0].position,
                pair[1].position
            );
        }

        for entry in entries {
            if entry.position.is_whole() {
                assert!(
                    seen.insert(entry.position),
                    "{block}: position {} is used twice",
                    entry.position
                );
            } else {
                let anchor = entry.position.anchor();
                assert!(
                    entries
                        .iter()
                        .any(|e| e.position.is_whole() && e.position.anchor() == anchor),
                    "{block}: {} has no anchor entry",
                    entry.position
                );
            }
        }
    }
}
