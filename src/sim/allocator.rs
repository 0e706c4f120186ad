use crate::sim::block::{Block, FREE};
use crate::sim::block_list::BlockList;
use crate::sim::error::SimError;
use crate::sim::policy::Policy;
use tracing::debug;

/// Service one allocation request against the free list.
///
/// Scans the free list front-to-back and takes the first block with at least
/// `size` addresses (every policy selects this way; the free list is never
/// re-sorted beforehand). The chosen block is shrunk to exactly `size`,
/// stamped with `pid`, and placed on the allocated list — appended for
/// First-Fit and Best-Fit, inserted size-descending for Worst-Fit. Any
/// leftover becomes a free fragment appended to the back of the free list;
/// an exact fit produces no fragment.
///
/// On failure both lists are left untouched.
pub fn allocate(
    free: &mut BlockList,
    allocated: &mut BlockList,
    pid: u32,
    size: u64,
    policy: Policy,
) -> Result<(), SimError> {
    debug_assert!(pid != FREE, "allocation pid must be positive");
    debug_assert!(size >= 1, "allocation size must be at least 1");

    let index = free
        .position(|b| b.size() >= size)
        .ok_or(SimError::InsufficientMemory {
            pid,
            requested: size,
        })?;

    let mut block = free.remove(index);
    let original_end = block.end;
    block.owner = pid;
    block.end = block.start + size - 1;

    if block.end < original_end {
        free.push_back(Block::free(block.end + 1, original_end));
    }

    debug!(pid, start = block.start, end = block.end, %policy, "allocated block");

    match policy {
        Policy::WorstFit => allocated.insert_by_size_desc(block),
        Policy::FirstFit | Policy::BestFit => allocated.push_back(block),
    }

    Ok(())
}

/// Release the first allocated block owned by `pid` back to the free list.
///
/// The block is moved, not copied: its owner is cleared and it is appended
/// to the back of the free list regardless of policy. A pid holding several
/// blocks releases one per call, in list order.
pub fn deallocate(
    allocated: &mut BlockList,
    free: &mut BlockList,
    pid: u32,
) -> Result<(), SimError> {
    let index = allocated
        .position(|b| b.owner == pid)
        .ok_or(SimError::PidNotFound { pid })?;

    let mut block = allocated.remove(index);
    block.owner = FREE;
    debug!(pid, start = block.start, end = block.end, "released block");
    free.push_back(block);

    Ok(())
}
