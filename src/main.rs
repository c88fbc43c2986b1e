use std::{fs, io::ErrorKind, path::PathBuf, process::ExitCode};

use clap::Parser;
use mini::{
    format_output,
    interpreter::evaluator::{core::Context, input::InputStream},
    parse,
};

/// Program file used when none is given.
const DEFAULT_PROGRAM: &str = "program.txt";
/// File the numbers for `Read` come from.
const INPUT_FILE: &str = "input.txt";
/// File the printed values are written to.
const OUTPUT_FILE: &str = "output.txt";

/// mini runs programs written in the Mini tag-and-End notation, reading
/// numbers from input.txt and writing printed values to output.txt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program to run.
    #[arg(value_name = "PROGRAM", default_value = DEFAULT_PROGRAM)]
    program: PathBuf,
}

/// Installs a log subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=mini=debug` or `RUST_LOG=mini=trace`.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Ok(source) = fs::read_to_string(&args.program) else {
        eprintln!("Failed to read the program file '{}'. Perhaps this file does not exist?",
                  args.program.display());
        return ExitCode::FAILURE;
    };

    let input = match fs::read_to_string(INPUT_FILE) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("{INPUT_FILE} not found, reading from an empty input");
            String::new()
        },
        Err(e) => {
            eprintln!("Failed to read the input file '{INPUT_FILE}': {e}");
            return ExitCode::FAILURE;
        },
    };

    let root = match parse(&source) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let mut context = Context::new(InputStream::new(&input));
    let outcome = context.run(&root);

    if let Err(e) = fs::write(OUTPUT_FILE, format_output(context.output())) {
        eprintln!("Failed to write the output file '{OUTPUT_FILE}': {e}");
        return ExitCode::FAILURE;
    }

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
