use crate::sim::driver::Op;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Trace entry pid that triggers a coalesce pass instead of a deallocation.
pub const COALESCE_SENTINEL: i64 = -99999;

/// A parsed trace: the partition size plus the operations to replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub partition_size: u64,
    pub ops: Vec<Op>,
}

/// Load and parse a trace file.
///
/// The first non-blank, non-`#` line is the partition size; every following
/// line is a `pid size` pair. A positive pid allocates `size` for that pid, a
/// negative pid deallocates `abs(pid)` (size ignored), and the sentinel
/// `-99999` triggers a coalesce pass. Any malformed line is fatal: the engine
/// never sees a partially parsed trace.
pub fn load_trace<P: AsRef<Path>>(path: P) -> Result<Trace> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read trace file {}", path.display()))?;
    parse_trace(&text)
}

/// Parse trace text. Separate from the file read so tests can feed strings.
pub fn parse_trace(text: &str) -> Result<Trace> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

    let (line_no, first) = match lines.next() {
        Some(entry) => entry,
        None => bail!("trace is empty: expected a partition size line"),
    };
    let partition_size: u64 = first
        .parse()
        .with_context(|| format!("line {}: invalid partition size '{}'", line_no, first))?;
    if partition_size == 0 {
        bail!("line {}: partition size must be at least 1", line_no);
    }

    let mut ops = Vec::new();
    for (line_no, line) in lines {
        let mut fields = line.split_whitespace();
        let pid: i64 = match fields.next() {
            Some(f) => f
                .parse()
                .with_context(|| format!("line {}: invalid pid '{}'", line_no, f))?,
            None => unreachable!("blank lines are filtered"),
        };
        let size: i64 = match fields.next() {
            Some(f) => f
                .parse()
                .with_context(|| format!("line {}: invalid size '{}'", line_no, f))?,
            None => bail!("line {}: expected 'pid size', got '{}'", line_no, line),
        };
        if fields.next().is_some() {
            bail!("line {}: trailing fields after 'pid size' in '{}'", line_no, line);
        }

        if pid != COALESCE_SENTINEL && pid.unsigned_abs() > u64::from(u32::MAX) {
            bail!("line {}: pid {} is out of range", line_no, pid);
        }
        let op = if pid == COALESCE_SENTINEL {
            Op::Coalesce
        } else if pid > 0 {
            if size < 1 {
                bail!("line {}: allocation size must be at least 1, got {}", line_no, size);
            }
            Op::Allocate {
                pid: pid as u32,
                size: size as u64,
            }
        } else if pid < 0 {
            Op::Deallocate {
                pid: pid.unsigned_abs() as u32,
            }
        } else {
            bail!("line {}: pid 0 is reserved for free blocks", line_no);
        };
        ops.push(op);
    }

    Ok(Trace {
        partition_size,
        ops,
    })
}
