use anyhow::{anyhow, Result};
use std::fmt;

/// Placement policy selecting which free block services a request and how the
/// lists are ordered afterward.
///
/// All three policies take the first free block large enough, scanning
/// front-to-back; the free list is not re-sorted between allocations, so
/// Best-Fit and Worst-Fit differ from First-Fit only in how the allocated
/// list is ordered afterward (Worst-Fit keeps it size-descending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    FirstFit,
    BestFit,
    WorstFit,
}

impl Policy {
    /// Parse a command-line policy flag. Case-insensitive, the leading `-`
    /// is optional: `F`/`FIFO`, `B`/`BESTFIT`, `W`/`WORSTFIT`.
    pub fn parse(flag: &str) -> Result<Self> {
        let name = flag.trim_start_matches('-').to_ascii_uppercase();
        match name.as_str() {
            "F" | "FIFO" => Ok(Policy::FirstFit),
            "B" | "BESTFIT" => Ok(Policy::BestFit),
            "W" | "WORSTFIT" => Ok(Policy::WorstFit),
            _ => Err(anyhow!(
                "unrecognized policy flag '{}' (expected F|FIFO, B|BESTFIT or W|WORSTFIT)",
                flag
            )),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::FirstFit => "FIRSTFIT",
            Policy::BestFit => "BESTFIT",
            Policy::WorstFit => "WORSTFIT",
        };
        write!(f, "{}", name)
    }
}
