mod ast;
mod collector;
mod env;
mod error;
mod evaluator;
mod parser;
mod policy;
mod solver;
mod unreachable;
mod value;

use clap::Parser as _;
use error::AnalysisError;
use policy::Policy;
use serde::Serialize;
use solver::DecisionProcedure;
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;

/// Static unreachable-code analyzer backed by an SMT decision procedure
#[derive(clap::Parser, Debug)]
#[command(name = "pathfinder")]
#[command(version)]
#[command(about = "Finds statically unreachable lines in a small imperative language")]
#[command(long_about = "Walks every feasible execution path of a program, querying an SMT \
solver at each branch point, and reports every source line no feasible path can reach.")]
struct CliArgs {
    /// Source file to analyze
    #[arg(value_name = "FILE", default_value = "code.txt")]
    file: PathBuf,

    /// Treat this name as a known builtin, never flagged as unresolved
    /// (can be repeated; extends the default allowlist of print/len/range)
    #[arg(long = "known-builtin", value_name = "NAME", action = clap::ArgAction::Append)]
    known_builtins: Vec<String>,

    /// Do not flag calls whose argument is a literal `None` (flagged by default)
    #[arg(long = "no-flag-none-args")]
    no_flag_none_args: bool,

    /// Maximum nested call-inlining depth before a call is treated as
    /// unresolved (guards against unbounded recursion in the analyzed program)
    #[arg(long = "max-call-depth", value_name = "N", default_value = "64")]
    max_call_depth: usize,

    /// Emit findings as JSON instead of the human-readable report
    #[arg(long = "json")]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    file: PathBuf,
    unreachable_lines: Vec<usize>,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pathfinder: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), AnalysisError> {
    let source = std::fs::read_to_string(&args.file)
        .map_err(|source| AnalysisError::io(args.file.clone(), source))?;

    let module = parser::parse_module(&source)?;

    let mut known_builtins: HashSet<String> = Policy::default_known_builtins();
    known_builtins.extend(args.known_builtins.iter().cloned());

    let policy = Policy {
        flag_none_args: !args.no_flag_none_args,
        known_builtins,
        max_call_depth: args.max_call_depth,
    };

    let ctx = solver::new_context();
    let decision_procedure = DecisionProcedure::new(&ctx);
    let unreachable_lines = evaluator::visit_module(&module, &decision_procedure, policy)?;

    if args.json {
        let report = Report {
            file: args.file.clone(),
            unreachable_lines,
        };
        println!("{}", serde_json::to_string_pretty(&report).expect("Report serializes"));
    } else {
        print_report(&unreachable_lines);
    }

    Ok(())
}

fn print_report(unreachable_lines: &[usize]) {
    match unreachable_lines {
        [] => println!("No unreachable paths found."),
        [line] => println!("Unreachable path found at line {line}."),
        lines => {
            let joined = lines
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!("Unreachable paths found at lines {joined}.");
        }
    }
}
