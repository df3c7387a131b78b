use clap::Parser;
use lisp_core_sandbox::config::CLI_ABOUT;
use lisp_core_sandbox::Interpreter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Evaluate a single Lisp expression or script file and print the result.
#[derive(Parser, Debug)]
#[command(name = "lisp-core-sandbox")]
#[command(version = lisp_core_sandbox::config::VERSION)]
#[command(about = CLI_ABOUT)]
struct CliArgs {
    /// Script file to evaluate.
    #[arg(value_name = "FILE", conflicts_with = "eval")]
    script: Option<PathBuf>,

    /// Evaluate a single expression given directly on the command line.
    #[arg(short, long, value_name = "EXPR")]
    eval: Option<String>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let source = if let Some(expr) = args.eval {
        expr
    } else if let Some(path) = args.script {
        match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("error reading {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        }
    } else {
        eprintln!("usage: lisp-core-sandbox [FILE] | --eval EXPR");
        return ExitCode::FAILURE;
    };

    let interpreter = Interpreter::new();
    match interpreter.evaluate(&source) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
