use anyhow::{Context, Result};
use memsim::cli::{replay::run_trace, shell::run_shell};
use memsim::sim::policy::Policy;
use memsim::trace::parser::load_trace;
use std::path::PathBuf;

const USAGE: &str = "Usage: memsim run <trace-file> <-F|-B|-W> [--json <path>] [--csv <path>]
       memsim shell <partition-size> <-F|-B|-W>
(F=FIFO | B=BESTFIT | W=WORSTFIT)";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }
    match args[1].as_str() {
        "run" => {
            if args.len() < 4 {
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
            let trace = load_trace(&args[2])?;
            let policy = Policy::parse(&args[3])?;
            let (json_out, csv_out) = parse_export_flags(&args[4..])?;
            run_trace(&trace, policy, json_out.as_deref(), csv_out.as_deref())?;
        }
        "shell" => {
            if args.len() < 4 {
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
            let partition_size: u64 = args[2]
                .parse()
                .with_context(|| format!("invalid partition size '{}'", args[2]))?;
            if partition_size == 0 {
                anyhow::bail!("partition size must be at least 1");
            }
            let policy = Policy::parse(&args[3])?;
            run_shell(partition_size, policy)?;
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn parse_export_flags(args: &[String]) -> Result<(Option<PathBuf>, Option<PathBuf>)> {
    let mut json_out = None;
    let mut csv_out = None;
    let mut it = args.iter();
    while let Some(flag) = it.next() {
        let path = it
            .next()
            .with_context(|| format!("{} requires a path", flag))?;
        match flag.as_str() {
            "--json" => json_out = Some(PathBuf::from(path)),
            "--csv" => csv_out = Some(PathBuf::from(path)),
            other => anyhow::bail!("unknown flag '{}'\n{}", other, USAGE),
        }
    }
    Ok((json_out, csv_out))
}
