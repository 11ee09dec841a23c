//! hexgrid CLI
//!
//! Runs geometry and pathfinding queries against a board.
//!
//! Usage:
//!   hexgrid distance <a> <b>
//!   hexgrid path <start> <goal>
//!   hexgrid fov <origin> <range>
//!   ...
//!
//! Cells are written `col,row`. Results are printed as JSON.

mod command;
mod config;
mod error;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::command::Command;
use crate::config::CliConfig;
use crate::error::CliError;

fn print_usage() {
    eprintln!("hexgrid - Hex grid geometry and pathfinding queries");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  hexgrid distance <a> <b>        Steps between two cells");
    eprintln!("  hexgrid neighbors <cell>        The six adjacent cells");
    eprintln!("  hexgrid range <cell> <n>        Cells within n steps");
    eprintln!("  hexgrid ring <cell> <n>         Cells exactly n steps away");
    eprintln!("  hexgrid line <a> <b>            Cells on the line from a to b");
    eprintln!("  hexgrid los <a> <b>             Whether b is visible from a");
    eprintln!("  hexgrid fov <cell> <n>          Visible cells within n steps");
    eprintln!("  hexgrid path <start> <goal>     Shortest path avoiding blocked cells");
    eprintln!("  hexgrid to-pixel <cell>         Pixel center of a cell");
    eprintln!("  hexgrid from-pixel <x> <y>      Cell under a pixel");
    eprintln!("  hexgrid corners <cell>          Polygon vertices of a cell");
    eprintln!();
    eprintln!("Cells are written col,row (odd rows shifted right).");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HEXGRID_BOARD           JSON board file {{\"blocked\": [\"col,row\", ...]}}");
    eprintln!("  HEXGRID_HEX_SIZE        Hex radius in pixels (default: 32)");
    eprintln!("  HEXGRID_ORIGIN_X/_Y     Pixel center of cell 0,0 (default: 0)");
    eprintln!("  HEXGRID_MAX_EXPANSIONS  Give up pathfinding after this many cells");
    eprintln!("  RUST_LOG                Log filter (default: hexgrid=info)");
}

fn main() {
    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexgrid=info,critfumble_hexgrid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if matches!(args.first().map(String::as_str), None | Some("-h" | "--help" | "help")) {
        print_usage();
        std::process::exit(if args.is_empty() { 1 } else { 0 });
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        if matches!(e, CliError::Usage(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let command = Command::parse(args)?;
    let config = CliConfig::from_env()?;

    let blocked = if command.needs_board() {
        config.load_blocked()?
    } else {
        Default::default()
    };

    let output = command.run(&config, &blocked)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
