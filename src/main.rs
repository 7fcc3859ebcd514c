use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, bail};
use bsl::{compile, diagnostics::Diagnostics, execute, persist};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// bsl compiles a script into a checked program and runs it.
///
/// With neither flag the script is compiled and then run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Compile the source at PATH and store the result next to it as `.bsl`.
    #[arg(short, long)]
    compile: bool,

    /// Run a compiled program. Combined with `--compile`, runs the program
    /// that was just compiled.
    #[arg(short, long)]
    run: bool,

    path: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[Error]: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Logs to stderr, filtered by `RUST_LOG` (default `bsl=warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bsl=warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    if !args.path.exists() {
        bail!("There is no such file: {}", args.path.display());
    }

    let (compile_step, run_step) = match (args.compile, args.run) {
        (false, false) => (true, true),
        flags => flags,
    };

    let program_path = if compile_step {
        match compile_file(&args.path)? {
            Some(path) => path,
            None => return Ok(ExitCode::FAILURE),
        }
    } else {
        args.path.clone()
    };

    if run_step {
        return run_file(&program_path);
    }
    Ok(ExitCode::SUCCESS)
}

/// Compiles `source` and writes the compiled program next to it.
///
/// Returns the path written, or `None` after printing the diagnostics of a
/// rejected program.
fn compile_file(source: &Path) -> anyhow::Result<Option<PathBuf>> {
    let Some(target) = persist::compiled_path(source) else {
        bail!("{} is already compiled; use --run", source.display());
    };
    let text = fs::read_to_string(source).with_context(|| format!("Failed to read {}", source.display()))?;

    let mut diagnostics = Diagnostics::new();
    let program = compile(&text, &mut diagnostics);
    if !diagnostics.is_empty() {
        eprintln!("{diagnostics}");
    }
    let Some(program) = program else {
        return Ok(None);
    };

    persist::save(&target, &program)?;
    tracing::info!(path = %target.display(), "compiled");
    Ok(Some(target))
}

fn run_file(path: &Path) -> anyhow::Result<ExitCode> {
    let program = persist::load(path)?;

    if let Err(error) = execute(&program, io::stdout().lock()) {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record(&error);
        eprintln!("{diagnostics}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
