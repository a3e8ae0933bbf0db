//! cldr-plural CLI entry point.
//!
//! Provides command-line tools for working with CLDR plural rule data:
//! - `cldr-plural check` - Validate every locale's rules in plural data files
//! - `cldr-plural compile` - Print a rule or a locale's rules in a target syntax

mod commands;
mod data;
mod logging;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_compile, CheckArgs, CompileArgs};

/// CLDR plural rule tools.
#[derive(Debug, Parser)]
#[command(name = "cldr-plural")]
#[command(about = "CLDR plural rule tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log filter directive (e.g. "debug", "cldr_plural=trace")
    #[arg(long, env = logging::LOG_ENV, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check plural rules in CLDR data files
    Check(CheckArgs),
    /// Compile a rule or a locale's rules into a target syntax
    Compile(CompileArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    logging::init_logging(cli.log_level.as_deref(), cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Compile(args) => run_compile(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
