//! Console chess
//!
//! Play against the engine (or another human) by typing commands.

use std::env;
use std::io::{self, Write};

use anyhow::Result;
use chess_console::{run, ConsoleConfig, Session, HELP};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Console chess");
    println!();
    println!("Usage:");
    println!("  chess_console [--config FILE] [--mode human|engine]");
    println!("                [--difficulty easy|medium|hard] [--engine-color white|black]");
    println!("                [--delay MS]");
    println!();
    println!("{HELP}");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    let config = ConsoleConfig::from_args(&args)?;
    info!(?config, "starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new(&config);
    session.start(&mut stdout)?;
    stdout.flush()?;

    run(&mut session, stdin.lock(), &mut stdout)
}
