//! sitestack CLI - restart or reload the service stacks of managed sites
//!
//! This module contains the shared CLI implementation used by all binaries.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Restart or reload the service stacks of managed sites
#[derive(Parser)]
#[command(name = "sitestack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Restart or reload the service stacks of managed sites", long_about = None)]
#[command(after_help = EXAMPLES)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Gracefully reload site stack services in place
    Reload(commands::ReloadArgs),
    /// Fully restart site stack containers
    Restart(commands::RestartArgs),
    /// Manage the site registry
    Site(commands::SiteArgs),
}

const EXAMPLES: &str = "\
Examples:
  # Restart every container of every site
  sitestack restart --all

  # Restart the full stack of one site
  sitestack restart example.com --all

  # Reload only nginx for one site
  sitestack reload example.com --nginx

  # Register a site
  sitestack site add example.com /var/www/example.com
";

/// Map `-v` counts to a default log level; RUST_LOG still wins when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match cli.command {
        Commands::Reload(args) => commands::cmd_reload(&args, cli.quiet),
        Commands::Restart(args) => commands::cmd_restart(&args, cli.quiet),
        Commands::Site(args) => commands::cmd_site(&args, cli.quiet),
    }
}
