//! Shared data models for connection records, issues, and check output.

pub mod connection;

pub use connection::{ConnectionPoint, TypeMap, TypeRecord, UiConnectionRecord, UiMap};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
/// A mismatch between code-declared and UI-wired connection points.
pub enum Issue {
    /// Wired in a UI file, not declared by the type or any of its ancestors.
    MissingOutlet {
        type_name: String,
        point: ConnectionPoint,
    },
    MissingAction {
        type_name: String,
        point: ConnectionPoint,
    },
    /// Declared directly on the type, never wired in a UI file.
    UnnecessaryOutlet {
        type_name: String,
        point: ConnectionPoint,
    },
    UnnecessaryAction {
        type_name: String,
        point: ConnectionPoint,
    },
}

impl Issue {
    pub fn type_name(&self) -> &str {
        match self {
            Issue::MissingOutlet { type_name, .. }
            | Issue::MissingAction { type_name, .. }
            | Issue::UnnecessaryOutlet { type_name, .. }
            | Issue::UnnecessaryAction { type_name, .. } => type_name,
        }
    }

    pub fn point(&self) -> &ConnectionPoint {
        match self {
            Issue::MissingOutlet { point, .. }
            | Issue::MissingAction { point, .. }
            | Issue::UnnecessaryOutlet { point, .. }
            | Issue::UnnecessaryAction { point, .. } => point,
        }
    }

    /// Stable identifier used as the rule column in human output.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::MissingOutlet { .. } => "missing-outlet",
            Issue::MissingAction { .. } => "missing-action",
            Issue::UnnecessaryOutlet { .. } => "unnecessary-outlet",
            Issue::UnnecessaryAction { .. } => "unnecessary-action",
        }
    }

    pub fn message(&self) -> String {
        let name = &self.point().name;
        let ty = self.type_name();
        match self {
            Issue::MissingOutlet { .. } => {
                format!("IBOutlet missing: {} is not implemented in {}", name, ty)
            }
            Issue::MissingAction { .. } => {
                format!("IBAction missing: {} is not implemented in {}", name, ty)
            }
            Issue::UnnecessaryOutlet { .. } => format!(
                "IBOutlet unnecessary: {} is declared in {} but never connected",
                name, ty
            ),
            Issue::UnnecessaryAction { .. } => format!(
                "IBAction unnecessary: {} is declared in {} but never connected",
                name, ty
            ),
        }
    }
}

#[derive(Debug, Default, Serialize)]
/// Aggregated check summary used by printers.
pub struct Summary {
    pub missing_outlets: usize,
    pub missing_actions: usize,
    pub unnecessary_outlets: usize,
    pub unnecessary_actions: usize,
    pub sources: usize,
    pub ui_files: usize,
    /// Declared types found across all sources.
    pub types: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.missing_outlets + self.missing_actions + self.unnecessary_outlets + self.unnecessary_actions
    }
}

#[derive(Debug, Serialize)]
/// Check results container.
pub struct CheckResult {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}
