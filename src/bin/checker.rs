use anyhow::Context;
use clap::Parser;
use push_swap::{DEFAULT_MAX_LEN, Verdict, parse_args, read_ops, replay, verdict};
use std::io;
use std::process::ExitCode;

/// Read operations from stdin, replay them on the given integers and print OK or KO.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Maximum number of values accepted
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    max_len: usize,

    /// Report the op count (or the cause of an error) on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Integers, as separate arguments or one space-separated string
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    values: Vec<String>,
}

fn run(args: &Args) -> anyhow::Result<Option<Verdict>> {
    if args.values.is_empty() {
        return Ok(None);
    }
    let values = parse_args(args.values.as_slice(), args.max_len)?;
    let ops = read_ops(io::stdin().lock()).context("reading operations from stdin")?;
    let stacks = replay(&values, &ops);
    if args.verbose {
        eprintln!(
            "[checker] n={}, ops={}, a={}, b={}",
            values.len(),
            ops.len(),
            stacks.a().len(),
            stacks.b().len()
        );
    }
    Ok(Some(verdict(&stacks)))
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(Some(v)) => {
            println!("{v}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            if args.verbose {
                eprintln!("[checker] {e:#}");
            }
            eprintln!("Error");
            ExitCode::FAILURE
        }
    }
}
