//! Check runner: collects inputs from the repository and reconciles them.
//!
//! Sources are Swift files matched by `sources`; each one needs a structure
//! dump next to it (`<file><structure_suffix>`) written by an external
//! extractor. UI files are matched by `ui` and scanned directly. Loading is
//! parallel per file; maps are merged in path order so results are stable.

use crate::analyzer::{self, AnalysisConfiguration};
use crate::builtins::effective_builtins;
use crate::config::Effective;
use crate::error::{Error, Result};
use crate::models::connection::{merge_type_maps, merge_ui_maps};
use crate::models::{CheckResult, Issue, Summary, TypeMap, UiMap};
use crate::nib;
use crate::structure::parse_structure;
use crate::type_model::build_type_map;
use glob::{glob, Pattern};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Run the check for an effective configuration.
///
/// Files that cannot be loaded are skipped and returned as errors next to
/// the result; the remaining inputs are still reconciled.
pub fn run_check(eff: &Effective) -> (CheckResult, Vec<Error>) {
    let mut errors: Vec<Error> = Vec::new();
    let sources = collect_targets(&eff.repo_root, &eff.sources, &mut errors);
    let ui_files = collect_targets(&eff.repo_root, &eff.ui, &mut errors);

    let loaded: Vec<Result<TypeMap>> = sources
        .par_iter()
        .map(|path| load_source(path, &eff.structure_suffix))
        .collect();
    let mut types = TypeMap::new();
    for res in loaded {
        match res {
            Ok(map) => types = merge_type_maps(types, map),
            Err(e) => errors.push(e),
        }
    }

    let scanned: Vec<Result<UiMap>> = ui_files.par_iter().map(|path| load_ui(path)).collect();
    let mut ui = UiMap::new();
    for res in scanned {
        match res {
            Ok(map) => ui = merge_ui_maps(ui, map),
            Err(e) => errors.push(e),
        }
    }
    for name in &eff.ignore {
        ui.remove(name);
    }

    let type_count = types.len();
    let config = AnalysisConfiguration {
        ui_by_type: ui,
        types_by_name: types,
        builtin_types_by_name: effective_builtins(&eff.builtins),
    };
    let issues = analyzer::issues(&config);
    let summary = summarize(&issues, sources.len(), ui_files.len(), type_count);
    (CheckResult { issues, summary }, errors)
}

/// Expand patterns relative to `root` into a sorted, de-duplicated file list.
fn collect_targets(root: &Path, patterns: &[String], errors: &mut Vec<Error>) -> Vec<PathBuf> {
    let mut targets: BTreeSet<PathBuf> = BTreeSet::new();
    let base = PathBuf::from(Pattern::escape(&root.to_string_lossy()));
    for pat in patterns {
        let pattern = base.join(pat).to_string_lossy().to_string();
        match glob(&pattern) {
            Ok(paths) => targets.extend(paths.flatten().filter(|p| p.is_file())),
            Err(source) => errors.push(Error::Glob {
                pattern: pat.clone(),
                source,
            }),
        }
    }
    targets.into_iter().collect()
}

/// Location of the structure dump for a source file.
pub fn structure_path(source: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = source.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

fn load_source(path: &Path, suffix: &str) -> Result<TypeMap> {
    let dump_path = structure_path(path, suffix);
    if !dump_path.is_file() {
        return Err(Error::SourceNotFound { path: dump_path });
    }
    let buffer = read(path)?;
    let dump = read(&dump_path)?;
    let root = parse_structure(&dump).map_err(|source| Error::Structure {
        path: dump_path.clone(),
        source,
    })?;
    Ok(build_type_map(&root, &buffer, Some(path)))
}

fn load_ui(path: &Path) -> Result<UiMap> {
    let markup = read(path)?;
    nib::scan(&markup, Some(path)).map_err(|source| Error::Markup {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn summarize(issues: &[Issue], sources: usize, ui_files: usize, types: usize) -> Summary {
    let mut summary = Summary {
        sources,
        ui_files,
        types,
        ..Default::default()
    };
    for is in issues {
        match is {
            Issue::MissingOutlet { .. } => summary.missing_outlets += 1,
            Issue::MissingAction { .. } => summary.missing_actions += 1,
            Issue::UnnecessaryOutlet { .. } => summary.unnecessary_outlets += 1,
            Issue::UnnecessaryAction { .. } => summary.unnecessary_actions += 1,
        }
    }
    summary
}
