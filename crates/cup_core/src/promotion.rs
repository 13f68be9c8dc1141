//! Qualifier selection bridging the group phase to the knockout phase.

use log::warn;

use crate::group::GroupTable;
use crate::team::TeamRecord;

/// Rank every group and take its top `k` as qualifiers.
///
/// Qualifiers are cloned out, so later mutation of the eliminated remainder
/// cannot reach a promoted record. Each table is then trimmed from the tail
/// until only the top `k` remain. The returned concatenation preserves
/// group order and within-group rank order. A group with fewer than `k`
/// teams contributes what it has, with a warning.
pub fn promote(groups: &mut [GroupTable], k: usize) -> Vec<TeamRecord> {
    let mut qualifiers = Vec::with_capacity(groups.len() * k);
    for group in groups.iter_mut() {
        group.rank();
        if group.len() < k {
            warn!(
                "group {} has {} teams for {} qualifier slots",
                group.label(),
                group.len(),
                k
            );
        }
        qualifiers.extend(group.standings().iter().take(k).cloned());

        while group.len() > k {
            let last = group.standings()[group.len() - 1].name.clone();
            match group.remove(&last) {
                Ok(_) => {}
                Err(err) => {
                    // Unreachable for a name just read off the table.
                    warn!("failed to trim group {}: {}", group.label(), err);
                    break;
                }
            }
        }
    }
    qualifiers
}
