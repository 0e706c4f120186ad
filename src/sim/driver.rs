use crate::sim::allocator::{allocate, deallocate};
use crate::sim::block::Block;
use crate::sim::block_list::BlockList;
use crate::sim::coalesce::coalesce;
use crate::sim::error::SimError;
use crate::sim::policy::Policy;
use std::fmt;
use std::mem;

/// One entry of the simulation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Allocate { pid: u32, size: u64 },
    Deallocate { pid: u32 },
    Coalesce,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Allocate { pid, size } => write!(f, "ALLOCATE: {} FROM PID: {}", size, pid),
            Op::Deallocate { pid } => write!(f, "DEALLOCATE MEM: PID {}", pid),
            Op::Coalesce => write!(f, "COALESCE/COMPACT"),
        }
    }
}

/// The partition manager state: the free and allocated lists plus the
/// configured placement policy.
///
/// Blocks belong to exactly one list at a time and move between them by
/// value, so an address range is never present in both lists. Each step runs
/// to completion before the next; a failed step leaves the state untouched.
pub struct Simulation {
    free: BlockList,
    allocated: BlockList,
    policy: Policy,
    partition_size: u64,
}

impl Simulation {
    /// Set up the initial partition: a single free block `[0, size - 1]`.
    pub fn new(partition_size: u64, policy: Policy) -> Self {
        debug_assert!(partition_size >= 1, "partition must span at least one address");
        let mut free = BlockList::new();
        free.push_front(Block::free(0, partition_size - 1));
        Simulation {
            free,
            allocated: BlockList::new(),
            policy,
            partition_size,
        }
    }

    /// Execute one trace entry against the current state.
    pub fn step(&mut self, op: Op) -> Result<(), SimError> {
        match op {
            Op::Allocate { pid, size } => {
                allocate(&mut self.free, &mut self.allocated, pid, size, self.policy)
            }
            Op::Deallocate { pid } => deallocate(&mut self.allocated, &mut self.free, pid),
            Op::Coalesce => {
                let old = mem::take(&mut self.free);
                self.free = coalesce(old);
                Ok(())
            }
        }
    }

    pub fn free_list(&self) -> &BlockList {
        &self.free
    }

    pub fn allocated_list(&self) -> &BlockList {
        &self.allocated
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn partition_size(&self) -> u64 {
        self.partition_size
    }
}
