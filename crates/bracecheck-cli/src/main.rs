mod loader;
mod settings;

use std::{
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
};

use bracecheck_core::{BraceChecker, CheckResult, StackMode, render_report};
use clap::{ArgAction, Parser};
use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::{Level, info};

use loader::{LoadError, load};
use settings::{Overrides, SettingsError, resolve};

/// Exit code for bad arguments or an invalid configuration.
const USAGE_ERROR: u8 = 1;

/// Check that the brackets in a text file are balanced
#[derive(Parser, Debug)]
#[command(name = "bracecheck", version, about)]
struct Args {
    /// File to check
    #[arg()]
    file: PathBuf,

    /// Read checker settings from this TOML file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Maximum nesting depth when using the bounded stack
    #[arg(long, value_name = "N")]
    capacity: Option<usize>,

    /// Stack variant to scan with
    #[arg(long, value_enum)]
    stack: Option<StackMode>,

    /// Print the file contents before the result
    #[arg(long)]
    echo: bool,

    /// Show the offending line with a caret under the bracket
    #[arg(long)]
    detailed: bool,

    /// Never color the result
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(USAGE_ERROR)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<(), Error> {
    let overrides = Overrides {
        capacity: args.capacity,
        stack: args.stack,
    };
    let config = resolve(args.config.as_deref(), Path::new("."), overrides)?;
    let checker = BraceChecker::new(config).map_err(SettingsError::from)?;
    let source = load(&args.file)?;
    info!(
        file = %args.file.display(),
        bytes = source.len(),
        capacity = config.capacity,
        stack = ?config.stack,
        "checking"
    );

    let scan = checker.scan(&source);
    let result = scan.result;
    info!(
        pushes = scan.stats.pushes,
        pops = scan.stats.pops,
        max_depth = scan.stats.max_depth,
        "scanned {} characters",
        scan.stats.scanned
    );

    println!("Check the contents of {}:", args.file.display());
    if args.echo {
        println!("{source}");
    }

    let message = if args.detailed {
        render_report(&result, &source)
    } else {
        result.to_string()
    };
    let color = !args.no_color && io::stdout().is_terminal();
    println!("{}", paint(&message, &result, color));

    Ok(())
}

fn paint(message: &str, result: &CheckResult, color: bool) -> String {
    if !color {
        return message.to_string();
    }
    if result.is_valid() {
        message.green().to_string()
    } else {
        message.red().to_string()
    }
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl Error {
    const fn exit_code(&self) -> u8 {
        match self {
            Self::Settings(_) => USAGE_ERROR,
            Self::Load(e) => e.exit_code(),
        }
    }
}
