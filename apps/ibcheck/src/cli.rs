//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ibcheck",
    version,
    about = "Find outlet and action mismatches between Swift sources and Interface Builder files",
    long_about = "ibcheck — compare @IBOutlet/@IBAction declarations against the connections wired in .xib and .storyboard files.\n\nSources are read through structure dumps written next to each Swift file (e.g. `sourcekitten structure --file A.swift > A.swift.structure.json`).\n\nConfiguration precedence: CLI > ibcheck.toml > defaults.",
    after_help = "Examples:\n  ibcheck check\n  ibcheck check --repo-root App --output json\n  ibcheck builtins",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current ibcheck version."
    )]
    Version,
    /// Reconcile sources against UI files
    #[command(
        about = "Run connection checks",
        long_about = "Report outlets and actions wired in UI files but not declared in code, and declarations never wired. Exits 1 when issues are found, 2 when inputs failed to load.",
        after_help = "Examples:\n  ibcheck check\n  ibcheck check --output json --verbose"
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Print notes about discovered inputs")]
        verbose: bool,
    },
    /// List framework types with implicit outlets
    #[command(
        about = "List built-in outlets",
        long_about = "Print the built-in table of framework types and their implicit outlets, including [builtins] entries from ibcheck.toml."
    )]
    Builtins {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
