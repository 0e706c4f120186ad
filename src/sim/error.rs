use std::fmt;

/// Non-fatal engine errors: the failed operation leaves both lists unchanged
/// and replay continues with the next trace entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// No free block is large enough for the request.
    InsufficientMemory { pid: u32, requested: u64 },
    /// The allocated list holds no block owned by this pid.
    PidNotFound { pid: u32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InsufficientMemory { pid, requested } => {
                write!(f, "Not Enough Memory ({} units for PID {})", requested, pid)
            }
            SimError::PidNotFound { pid } => {
                write!(f, "Can't locate Memory Used by PID {}", pid)
            }
        }
    }
}

impl std::error::Error for SimError {}
