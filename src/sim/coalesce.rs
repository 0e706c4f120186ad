use crate::sim::block_list::BlockList;
use tracing::debug;

/// Rebuild the free list in ascending address order and merge every run of
/// physically adjacent blocks into one.
///
/// The input list is drained front-to-back, each block insertion-sorted by
/// start address into a fresh list, then a single pass merges neighbors:
/// after absorbing a block the walk stays on the merged result, so a chain
/// of three or more adjacent blocks collapses into one. This is the only
/// operation that reduces free-list fragmentation and it runs only when the
/// trace (or shell) asks for it, never automatically after a deallocation.
pub fn coalesce(mut free: BlockList) -> BlockList {
    let mut ordered = BlockList::new();
    while let Some(block) = free.pop_front() {
        ordered.insert_by_address(block);
    }

    let mut i = 0;
    while i + 1 < ordered.len() {
        let adjacent = {
            let current = ordered.get(i).expect("index in bounds");
            let next = ordered.get(i + 1).expect("index in bounds");
            current.is_adjacent_to(next)
        };
        if adjacent {
            ordered.merge_with_next(i);
        } else {
            i += 1;
        }
    }

    debug!(blocks = ordered.len(), "coalesced free list");
    ordered
}
