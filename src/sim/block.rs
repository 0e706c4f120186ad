use serde::Serialize;

/// Process id that marks a block as free.
pub const FREE: u32 = 0;

/// A contiguous address range within the managed partition.
///
/// `start` and `end` are inclusive bounds, so a block always spans at least
/// one address. `owner == 0` means the block is free; any positive value is
/// the pid that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub start: u64,
    pub end: u64,
    pub owner: u32,
}

impl Block {
    /// Create a free block spanning `[start, end]`.
    pub fn free(start: u64, end: u64) -> Self {
        Block {
            start,
            end,
            owner: FREE,
        }
    }

    /// Number of addresses covered, always >= 1.
    pub fn size(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn is_free(&self) -> bool {
        self.owner == FREE
    }

    /// True when `other` starts immediately after this block ends.
    pub fn is_adjacent_to(&self, other: &Block) -> bool {
        self.end + 1 == other.start
    }
}
