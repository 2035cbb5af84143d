//! Output rendering for the check and builtins commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-issue fields and a top-level summary.

use crate::error::Error;
use crate::models::{CheckResult, Issue, TypeMap};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && utils::colors_enabled()
}

/// `file:line:column` for an issue, or the type name when it has no location.
fn location(is: &Issue) -> String {
    let p = is.point();
    match p.source.as_deref() {
        Some(src) => format!("{}:{}:{}", utils::rel_to_wd(src), p.line, p.column),
        None => is.type_name().to_string(),
    }
}

/// One human-readable warning: `file:line:column: warning: message ❲code❳`.
pub fn issue_line(is: &Issue, color: bool) -> String {
    let loc = format!("{}:", location(is));
    if color {
        format!(
            "{} {} {} ❲{}❳",
            loc.bold(),
            "warning:".yellow().bold(),
            is.message(),
            is.code()
        )
    } else {
        format!("{} warning: {} ❲{}❳", loc, is.message(), is.code())
    }
}

/// Print check results in the requested format. Load errors go to stderr.
pub fn print_check(res: &CheckResult, output: &str, errors: &[Error]) {
    for e in errors {
        eprintln!("{} {}", utils::error_prefix(), e);
    }
    match output {
        "json" => match serde_json::to_string_pretty(&compose_check_json(res, errors)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            for is in &res.issues {
                println!("{}", issue_line(is, color));
            }
            let s = &res.summary;
            let summary = format!(
                "— Summary — missing_outlets={} missing_actions={} unnecessary_outlets={} unnecessary_actions={} sources={} ui_files={}",
                s.missing_outlets,
                s.missing_actions,
                s.unnecessary_outlets,
                s.unnecessary_actions,
                s.sources,
                s.ui_files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Print the effective built-in table, sorted by type name.
pub fn print_builtins(table: &TypeMap, output: &str) {
    let mut names: Vec<&String> = table.keys().collect();
    names.sort();
    match output {
        "json" => {
            let obj: serde_json::Map<String, JsonVal> = names
                .iter()
                .map(|n| {
                    let outlets: Vec<&str> =
                        table[*n].outlets.iter().map(|p| p.name.as_str()).collect();
                    (n.to_string(), json!(outlets))
                })
                .collect();
            match serde_json::to_string_pretty(&JsonVal::Object(obj)) {
                Ok(s) => println!("{}", s),
                Err(e) => eprintln!("{} {}", utils::error_prefix(), e),
            }
        }
        _ => {
            let color = use_colors(output);
            for n in names {
                let outlets: Vec<&str> = table[n].outlets.iter().map(|p| p.name.as_str()).collect();
                if color {
                    println!("{} {}", n.bold(), outlets.join(", "));
                } else {
                    println!("{} {}", n, outlets.join(", "));
                }
            }
        }
    }
}

/// Compose check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(res: &CheckResult, errors: &[Error]) -> JsonVal {
    let issues: Vec<JsonVal> = res
        .issues
        .iter()
        .map(|is| {
            let p = is.point();
            json!({
                "kind": is.code(),
                "type": is.type_name(),
                "name": p.name,
                "file": p.source.as_ref().map(|s| s.to_string_lossy().to_string()),
                "line": p.line,
                "column": p.column,
                "message": is.message(),
            })
        })
        .collect();
    let errors: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    json!({
        "issues": issues,
        "errors": errors,
        "summary": serde_json::to_value(&res.summary).unwrap_or(JsonVal::Null),
    })
}
