use crate::sim::block::Block;
use crate::sim::block_list::BlockList;
use crate::sim::driver::Simulation;
use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// Snapshot of one replay step for the machine-readable exports.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub op: String,
    /// "ok" or the reported error condition.
    pub result: String,
    pub free: Vec<Block>,
    pub allocated: Vec<Block>,
}

impl StepReport {
    /// Capture both lists of `sim` in their current order.
    pub fn capture(step: usize, op: String, result: String, sim: &Simulation) -> Self {
        StepReport {
            step,
            op,
            result,
            free: sim.free_list().iter().cloned().collect(),
            allocated: sim.allocated_list().iter().cloned().collect(),
        }
    }
}

/// Render one list under a heading, one block per line in list order.
pub fn render_list(list: &BlockList, heading: &str) -> String {
    let mut out = format!("{}:\n", heading);
    for (i, block) in list.iter().enumerate() {
        out.push_str(&format!(
            "Block {}:\t START: {}\t END: {}",
            i, block.start, block.end
        ));
        if !block.is_free() {
            out.push_str(&format!("\t PID: {}", block.owner));
        }
        out.push('\n');
    }
    out
}

/// Print both lists after a step, free list first.
pub fn print_state(sim: &Simulation) {
    print!("{}", render_list(sim.free_list(), "Free Memory"));
    print!("{}", render_list(sim.allocated_list(), "\nAllocated Memory"));
    println!("\n");
}

/// Write the full step-by-step report as pretty JSON.
pub fn export_json<P: AsRef<Path>>(reports: &[StepReport], path: P) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, reports)?;
    Ok(())
}

/// Write the report as flat CSV, one row per block per step.
pub fn export_csv<P: AsRef<Path>>(reports: &[StepReport], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["step", "op", "result", "list", "block", "start", "end", "pid"])?;

    for report in reports {
        let lists = [("free", &report.free), ("allocated", &report.allocated)];
        for (name, blocks) in lists {
            for (i, block) in blocks.iter().enumerate() {
                wtr.write_record([
                    report.step.to_string(),
                    report.op.clone(),
                    report.result.clone(),
                    name.to_string(),
                    i.to_string(),
                    block.start.to_string(),
                    block.end.to_string(),
                    block.owner.to_string(),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
