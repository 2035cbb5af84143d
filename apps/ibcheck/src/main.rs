//! ibcheck CLI binary entry point.
//! Delegates to the library for checking and prints results.

use clap::Parser;
use ibcheck::cli::{Cli, Commands};
use ibcheck::{builtins, check, config, output, utils};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            repo_root,
            output,
            verbose,
        } => {
            let eff = effective_or_exit(repo_root.as_deref(), output.as_deref(), verbose);
            // Friendly note if no ibcheck config was found
            if eff.config_path.is_none() && eff.output != "json" {
                eprintln!(
                    "{} No ibcheck.toml found; using defaults.",
                    utils::note_prefix()
                );
            }
            let (result, errors) = check::run_check(&eff);
            if eff.verbose && eff.output != "json" {
                eprintln!(
                    "{} scanned {} sources ({} types) and {} UI files under {}",
                    utils::info_prefix(),
                    result.summary.sources,
                    result.summary.types,
                    result.summary.ui_files,
                    eff.repo_root.to_string_lossy()
                );
                if result.summary.ui_files == 0 {
                    eprintln!(
                        "{} no UI files matched {:?}",
                        utils::warn_prefix(),
                        eff.ui
                    );
                }
            }
            output::print_check(&result, &eff.output, &errors);
            if !errors.is_empty() {
                std::process::exit(2);
            }
            if !result.issues.is_empty() {
                std::process::exit(1);
            }
        }
        Commands::Builtins { repo_root, output } => {
            let eff = effective_or_exit(repo_root.as_deref(), output.as_deref(), false);
            let table = builtins::effective_builtins(&eff.builtins);
            output::print_builtins(&table, &eff.output);
        }
    }
}

fn effective_or_exit(repo_root: Option<&str>, output: Option<&str>, verbose: bool) -> config::Effective {
    match config::resolve_effective(repo_root, output, verbose) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}
