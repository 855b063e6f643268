//! Command-line interface for tabletop.

use clap::{Parser, Subcommand};

/// Tabletop - console tic-tac-toe and a tiny calculator
#[derive(Parser, Debug)]
#[command(name = "tabletop")]
#[command(about = "Console tic-tac-toe and a command-line calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Play two-player tic-tac-toe in the terminal
    Play {
        /// Path to the console config file (defaults are used if missing)
        #[arg(short, long, default_value = "tabletop.toml")]
        config: std::path::PathBuf,

        /// Spaces either side of each board cell (overrides the config file)
        #[arg(long)]
        padding: Option<usize>,
    },

    /// Evaluate `<lhs> <operator> <rhs>` with + - * /
    Calc {
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        lhs: String,

        /// Operator: one of + - * /
        #[arg(allow_hyphen_values = true)]
        operator: String,

        /// Right operand
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
}
