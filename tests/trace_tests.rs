use memsim::sim::driver::Op;
use memsim::sim::policy::Policy;
use memsim::trace::parser::{load_trace, parse_trace};
use std::fs::{remove_file, write};

#[test]
fn test_parse_trace_maps_pid_signs() {
    let trace = parse_trace("100\n1 40\n-1 0\n-99999 0\n").unwrap();
    assert_eq!(trace.partition_size, 100);
    assert_eq!(
        trace.ops,
        vec![
            Op::Allocate { pid: 1, size: 40 },
            Op::Deallocate { pid: 1 },
            Op::Coalesce,
        ]
    );
}

#[test]
fn test_parse_trace_skips_blank_lines_and_comments() {
    let text = "# partition size\n1000\n\n# burst of requests\n2 128\n\n-2 0\n";
    let trace = parse_trace(text).unwrap();
    assert_eq!(trace.partition_size, 1000);
    assert_eq!(trace.ops.len(), 2);
}

#[test]
fn test_parse_trace_rejects_malformed_input() {
    assert!(parse_trace("").is_err());
    assert!(parse_trace("# only comments\n").is_err());
    assert!(parse_trace("0\n").is_err()); // zero partition
    assert!(parse_trace("abc\n").is_err());
    assert!(parse_trace("100\n1\n").is_err()); // missing size field
    assert!(parse_trace("100\n1 40 7\n").is_err()); // trailing field
    assert!(parse_trace("100\n0 40\n").is_err()); // pid 0 reserved
    assert!(parse_trace("100\n1 0\n").is_err()); // zero-size allocation
    assert!(parse_trace("100\n1 -5\n").is_err());
    assert!(parse_trace("100\n99999999999 4\n").is_err()); // pid out of range
}

#[test]
fn test_load_trace_from_file() {
    let path = "test_trace.txt";
    write(path, "50\n7 25\n-99999 0\n").unwrap();
    let trace = load_trace(path).expect("load failed");
    assert_eq!(trace.partition_size, 50);
    assert_eq!(trace.ops, vec![Op::Allocate { pid: 7, size: 25 }, Op::Coalesce]);
    remove_file(path).unwrap();
}

#[test]
fn test_load_trace_missing_file_is_fatal() {
    assert!(load_trace("no_such_trace_file.txt").is_err());
}

#[test]
fn test_policy_flag_parsing() {
    assert_eq!(Policy::parse("-F").unwrap(), Policy::FirstFit);
    assert_eq!(Policy::parse("-fifo").unwrap(), Policy::FirstFit);
    assert_eq!(Policy::parse("F").unwrap(), Policy::FirstFit);
    assert_eq!(Policy::parse("-B").unwrap(), Policy::BestFit);
    assert_eq!(Policy::parse("bestfit").unwrap(), Policy::BestFit);
    assert_eq!(Policy::parse("-W").unwrap(), Policy::WorstFit);
    assert_eq!(Policy::parse("-WorstFit").unwrap(), Policy::WorstFit);
    assert!(Policy::parse("-X").is_err());
    assert!(Policy::parse("").is_err());
}
