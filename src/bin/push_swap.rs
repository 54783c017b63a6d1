use anyhow::Context;
use clap::Parser;
use push_swap::{DEFAULT_MAX_LEN, SortConfig, Strategy, is_ascending, parse_args, sort_with};
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

/// Print stack operations that sort the given integers, one per line.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Maximum number of values accepted
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Keep partitioning even once A is ascending (6+ values)
    #[arg(long, default_value_t = false)]
    no_early_exit: bool,

    /// Report a summary (or the cause of an error) on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Integers, as separate arguments or one space-separated string
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    values: Vec<String>,
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let values = parse_args(args.values.as_slice(), args.max_len)?;
    if is_ascending(&values) {
        if args.verbose {
            eprintln!("[push_swap] input already sorted ({} values)", values.len());
        }
        return Ok(ExitCode::FAILURE);
    }

    let cfg = SortConfig::default()
        .with_max_len(args.max_len)
        .early_exit(!args.no_early_exit);
    let ops = sort_with(&values, &cfg);

    let mut out = BufWriter::new(io::stdout().lock());
    for op in &ops {
        writeln!(out, "{op}").context("writing operation log")?;
    }
    out.flush().context("flushing operation log")?;

    if args.verbose {
        eprintln!(
            "[push_swap] n={}, strategy={:?}, ops={}, early_exit={}",
            values.len(),
            Strategy::for_len(values.len()),
            ops.len(),
            cfg.early_exit_enabled()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            if args.verbose {
                eprintln!("[push_swap] {e:#}");
            }
            eprintln!("Error");
            ExitCode::FAILURE
        }
    }
}
