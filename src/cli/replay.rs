use crate::cli::report::{export_csv, export_json, print_state, StepReport};
use crate::sim::driver::Simulation;
use crate::sim::policy::Policy;
use crate::trace::parser::Trace;
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// Replay a parsed trace, printing both lists after every step.
///
/// Engine errors are non-fatal: they are reported and the replay continues
/// with the lists unchanged by the failed operation. Optional JSON/CSV paths
/// receive the full step-by-step report once the replay finishes.
pub fn run_trace(
    trace: &Trace,
    policy: Policy,
    json_out: Option<&Path>,
    csv_out: Option<&Path>,
) -> Result<()> {
    info!(partition_size = trace.partition_size, %policy, steps = trace.ops.len(), "starting replay");
    let mut sim = Simulation::new(trace.partition_size, policy);
    let mut reports = Vec::with_capacity(trace.ops.len());

    for (step, &op) in trace.ops.iter().enumerate() {
        println!("************************");
        println!("{}", op);
        let result = match sim.step(op) {
            Ok(()) => "ok".to_string(),
            Err(e) => {
                warn!(step, error = %e, "operation failed");
                eprintln!("Error: {}", e);
                e.to_string()
            }
        };
        println!("************************");
        print_state(&sim);

        if json_out.is_some() || csv_out.is_some() {
            reports.push(StepReport::capture(step, op.to_string(), result, &sim));
        }
    }

    if let Some(path) = json_out {
        export_json(&reports, path)?;
        info!(path = %path.display(), "wrote JSON report");
    }
    if let Some(path) = csv_out {
        export_csv(&reports, path)?;
        info!(path = %path.display(), "wrote CSV report");
    }

    Ok(())
}
