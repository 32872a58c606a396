//! Walkthrough Example
//!
//! Runs the full demonstration program and prints its transcript:
//! - Arithmetic, branches and the three loop forms
//! - Sequence, character and matrix fills
//! - Person records and a populated roster
//! - Factorial, power, GCD and the multi-way selection
//!
//! ```bash
//! RUST_LOG=debug cargo run -p routines --example walkthrough --features tracing -- --length 4
//! ```

use clap::Parser;
use routines::prelude::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Run the routines walkthrough.
#[derive(Parser, Debug)]
#[command(name = "walkthrough", version, about)]
struct Args {
    /// Sequence length, matrix rows and roster size.
    #[arg(long, default_value_t = 5)]
    length: usize,

    /// Matrix columns.
    #[arg(long, default_value_t = 3)]
    width: usize,

    /// Character broadcast over the character sequence.
    #[arg(long = "char", default_value_t = '*')]
    fill_char: char,

    /// Values fed to the multi-way selection.
    #[arg(long, value_delimiter = ',', default_values_t = [0, 2, 9], allow_hyphen_values = true)]
    select: Vec<i64>,
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RoutineError> {
    let args = Args::parse();
    tracing::info!(?args, "configured walkthrough");

    let report = Walkthrough::new()
        .length(args.length)
        .width(args.width)
        .fill_char(args.fill_char)
        .selections(&args.select)
        .build()?
        .run()?;

    print!("{}", report);
    tracing::info!(
        students = report.students().count(),
        "walkthrough complete"
    );

    Ok(())
}

/// Install a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
