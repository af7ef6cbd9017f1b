//! vaxreg: child vaccination registry CLI.
//!
//! # Usage
//!
//! ```text
//! vaxreg [--today YYYY-MM-DD] [--lead-days N] [--reminder-window-days N]
//! vaxreg menu
//! vaxreg catalog [--json]
//! ```
//!
//! Records live in memory for one interactive session only.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{catalog::CatalogArgs, menu::MenuArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "vaxreg",
    version,
    about = "Track children, vaccine schedules and vaccination appointments",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    session: MenuArgs,

    /// Disable ANSI colors in output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive registry menu (default).
    Menu,

    /// Print the vaccine catalog.
    Catalog(CatalogArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        None | Some(Commands::Menu) => cli.session.run(),
        Some(Commands::Catalog(args)) => args.run(),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
