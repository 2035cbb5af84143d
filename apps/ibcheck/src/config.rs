//! Configuration discovery and effective settings resolution.
//!
//! ibcheck reads `ibcheck.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `sources`: `["**/*.swift"]`
//! - `ui`: `["**/*.xib", "**/*.storyboard"]`
//! - `structure_suffix`: `.structure.json`
//! - `output`: `human`
//! - `ignore`: empty
//! - `[builtins]`: empty (compiled-in table only)
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_STRUCTURE_SUFFIX: &str = ".structure.json";

const CONFIG_NAMES: [&str; 3] = ["ibcheck.toml", "ibcheck.yaml", "ibcheck.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `ibcheck.toml|yaml`.
pub struct IbcheckConfig {
    pub sources: Option<Vec<String>>,
    pub ui: Option<Vec<String>>,
    pub structure_suffix: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Extra framework types: `TypeName = ["outlet", ...]`.
    #[serde(default)]
    pub builtins: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    /// Config file the settings came from; `None` when defaults apply.
    pub config_path: Option<PathBuf>,
    pub sources: Vec<String>,
    pub ui: Vec<String>,
    pub structure_suffix: String,
    pub output: String,
    pub verbose: bool,
    pub ignore: Vec<String>,
    pub builtins: HashMap<String, Vec<String>>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when an `ibcheck.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `IbcheckConfig` from `ibcheck.toml` or `ibcheck.yaml|yml` if present.
///
/// Returns the file it was read from alongside the parsed config.
pub fn load_config(root: &Path) -> Result<Option<(PathBuf, IbcheckConfig)>> {
    let toml_path = root.join("ibcheck.toml");
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg: IbcheckConfig = toml::from_str(&s).map_err(|e| Error::Config {
            path: toml_path.clone(),
            source: Box::new(e),
        })?;
        return Ok(Some((toml_path, cfg)));
    }
    for yml in ["ibcheck.yaml", "ibcheck.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            let cfg: IbcheckConfig = serde_yaml::from_str(&s).map_err(|e| Error::Config {
                path: p.clone(),
                source: Box::new(e),
            })?;
            return Ok(Some((p, cfg)));
        }
    }
    Ok(None)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// A config file that exists but cannot be read or parsed is an error.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_verbose: bool,
) -> Result<Effective> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (config_path, cfg) = match load_config(&repo_root)? {
        Some((path, cfg)) => (Some(path), cfg),
        None => (None, IbcheckConfig::default()),
    };

    let sources = cfg
        .sources
        .unwrap_or_else(|| vec!["**/*.swift".to_string()]);
    let ui = cfg
        .ui
        .unwrap_or_else(|| vec!["**/*.xib".to_string(), "**/*.storyboard".to_string()]);
    let structure_suffix = cfg
        .structure_suffix
        .unwrap_or_else(|| DEFAULT_STRUCTURE_SUFFIX.to_string());
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Ok(Effective {
        repo_root,
        config_path,
        sources,
        ui,
        structure_suffix,
        output,
        verbose: cli_verbose,
        ignore: cfg.ignore,
        builtins: cfg.builtins,
    })
}
