use crate::sim::block::Block;
use std::collections::VecDeque;

/// An ordered sequence of blocks.
///
/// The order is meaningful: it is the scan order for placement and removal,
/// and the order the reporters print. Different policies keep different
/// orders (arrival order, address-ascending, size-descending), so ordering is
/// chosen by the caller through the insertion method, not by the list itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockList {
    blocks: VecDeque<Block>,
}

impl BlockList {
    /// Create an empty BlockList.
    pub fn new() -> Self {
        BlockList {
            blocks: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn push_front(&mut self, block: Block) {
        self.blocks.push_front(block);
    }

    pub fn push_back(&mut self, block: Block) {
        self.blocks.push_back(block);
    }

    /// Insert keeping the list ascending by start address.
    pub fn insert_by_address(&mut self, block: Block) {
        let at = self
            .blocks
            .iter()
            .position(|b| b.start > block.start)
            .unwrap_or(self.blocks.len());
        self.blocks.insert(at, block);
    }

    /// Insert keeping the list descending by block size. Ties keep arrival
    /// order: an equal-sized block lands after the ones already present.
    pub fn insert_by_size_desc(&mut self, block: Block) {
        let at = self
            .blocks
            .iter()
            .position(|b| b.size() < block.size())
            .unwrap_or(self.blocks.len());
        self.blocks.insert(at, block);
    }

    pub fn pop_front(&mut self) -> Option<Block> {
        self.blocks.pop_front()
    }

    /// Remove and return the block at `index`.
    ///
    /// Panics if `index` is out of bounds; callers locate the index with
    /// [`position`](Self::position) first.
    pub fn remove(&mut self, index: usize) -> Block {
        self.blocks
            .remove(index)
            .expect("BlockList::remove index out of bounds")
    }

    /// Index of the first block matching `pred`, scanning front-to-back.
    pub fn position<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&Block) -> bool,
    {
        let mut pred = pred;
        self.blocks.iter().position(|b| pred(b))
    }

    /// Absorb the block at `index + 1` into the block at `index`, which must
    /// be physically adjacent to it.
    pub fn merge_with_next(&mut self, index: usize) {
        let next = self.remove(index + 1);
        let current = &mut self.blocks[index];
        current.end = next.end;
    }
}
