
use crate::sim::driver::{Op, Simulation};
use crate::sim::policy::Policy;
use anyhow::Result;
use rustyline::{error::ReadlineError, Editor};

/// Drive a live simulation from an interactive prompt.
pub fn run_shell(partition_size: u64, policy: Policy) -> Result<()> {
    let mut sim = Simulation::new(partition_size, policy);
    let mut rl = Editor::<()>::new()?;

    println!(
        "memsim shell: partition [0, {}], policy {}",
        partition_size - 1,
        policy
    );
    println!("Commands: alloc <pid> <size> | free <pid> | coalesce | show | exit");

    loop {
        match rl.readline("mem> ") {
            Ok(line) if line.trim().eq_ignore_ascii_case("exit") => break,
            Ok(line) => match parse_command(&line) {
                Ok(Some(op)) => {
                    if let Err(e) = sim.step(op) {
                        println!("Error: {}", e);
                    }
                    crate::cli::report::print_state(&sim);
                }
                Ok(None) => {
                    if !line.trim().is_empty() {
                        crate::cli::report::print_state(&sim);
                    }
                }
                Err(e) => println!("Error: {}", e),
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

/// Parse one shell line into an operation. `show` and blank lines map to
/// `None` (report-only).
fn parse_command(line: &str) -> Result<Option<Op>> {
    let mut fields = line.split_whitespace();
    let cmd = match fields.next() {
        Some(c) => c.to_ascii_lowercase(),
        None => return Ok(None),
    };

    let op = match cmd.as_str() {
        "alloc" => {
            let pid: u32 = parse_field(fields.next(), "alloc <pid> <size>")?;
            let size: u64 = parse_field(fields.next(), "alloc <pid> <size>")?;
            if pid == 0 {
                anyhow::bail!("pid must be positive");
            }
            if size == 0 {
                anyhow::bail!("size must be at least 1");
            }
            Some(Op::Allocate { pid, size })
        }
        "free" => {
            let pid: u32 = parse_field(fields.next(), "free <pid>")?;
            if pid == 0 {
                anyhow::bail!("pid must be positive");
            }
            Some(Op::Deallocate { pid })
        }
        "coalesce" => Some(Op::Coalesce),
        "show" => None,
        other => anyhow::bail!("unknown command '{}'", other),
    };
    Ok(op)
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, usage: &str) -> Result<T> {
    field
        .and_then(|f| f.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("usage: {}", usage))
}
