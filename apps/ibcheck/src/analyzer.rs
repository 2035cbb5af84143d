//! Reconciliation of UI wiring against declared connection points.
//!
//! For every type that a UI file references, wiring is checked against the
//! type's full inheritance closure (project types first, then the built-in
//! table), while the type's own declarations are checked against its wiring.
//! Inherited declarations are only reported for the type that declares them.

use crate::models::{ConnectionPoint, Issue, TypeMap, TypeRecord, UiConnectionRecord, UiMap};
use std::collections::HashSet;

#[derive(Debug, Default)]
/// Everything the engine needs for one run.
pub struct AnalysisConfiguration {
    pub ui_by_type: UiMap,
    pub types_by_name: TypeMap,
    pub builtin_types_by_name: TypeMap,
}

impl AnalysisConfiguration {
    /// Project types win over built-in entries of the same name.
    fn lookup(&self, name: &str) -> Option<&TypeRecord> {
        self.types_by_name
            .get(name)
            .or_else(|| self.builtin_types_by_name.get(name))
    }
}

#[derive(Clone, Copy)]
enum Side {
    Outlets,
    Actions,
}

impl Side {
    fn of(self, record: &TypeRecord) -> &[ConnectionPoint] {
        match self {
            Side::Outlets => &record.outlets,
            Side::Actions => &record.actions,
        }
    }
}

/// Compute the issue list in type-name order.
///
/// Per type: missing outlets, missing actions, unnecessary outlets, then
/// unnecessary actions, each in the order of the underlying list.
pub fn issues(config: &AnalysisConfiguration) -> Vec<Issue> {
    let empty = TypeRecord::default();
    let mut out = Vec::new();
    for (type_name, ui) in &config.ui_by_type {
        let own = config.types_by_name.get(type_name).unwrap_or(&empty);
        let outlet_closure = closure(config, type_name, own, Side::Outlets);
        let action_closure = closure(config, type_name, own, Side::Actions);

        for point in missing(&ui.outlets, &outlet_closure) {
            out.push(Issue::MissingOutlet {
                type_name: type_name.clone(),
                point: point.clone(),
            });
        }
        for point in missing(&ui.actions, &action_closure) {
            out.push(Issue::MissingAction {
                type_name: type_name.clone(),
                point: point.clone(),
            });
        }
        for point in unnecessary(&own.outlets, ui, Side::Outlets) {
            out.push(Issue::UnnecessaryOutlet {
                type_name: type_name.clone(),
                point: point.clone(),
            });
        }
        for point in unnecessary(&own.actions, ui, Side::Actions) {
            out.push(Issue::UnnecessaryAction {
                type_name: type_name.clone(),
                point: point.clone(),
            });
        }
    }
    out
}

fn missing<'a>(
    wired: &'a [ConnectionPoint],
    closure: &'a HashSet<&'a str>,
) -> impl Iterator<Item = &'a ConnectionPoint> + 'a {
    wired.iter().filter(move |p| !closure.contains(p.name.as_str()))
}

fn unnecessary<'a>(
    declared: &'a [ConnectionPoint],
    ui: &'a UiConnectionRecord,
    side: Side,
) -> impl Iterator<Item = &'a ConnectionPoint> + 'a {
    let wired: HashSet<&str> = match side {
        Side::Outlets => &ui.outlets,
        Side::Actions => &ui.actions,
    }
    .iter()
    .map(|p| p.name.as_str())
    .collect();
    declared
        .iter()
        .filter(move |p| !wired.contains(p.name.as_str()))
}

/// Names reachable from `root` through its supertypes, `root` included.
fn closure<'a>(
    config: &'a AnalysisConfiguration,
    root_name: &'a str,
    root: &'a TypeRecord,
    side: Side,
) -> HashSet<&'a str> {
    let mut names = HashSet::new();
    let mut visited = HashSet::new();
    visited.insert(root_name);
    extend_closure(config, root, side, &mut visited, &mut names);
    names
}

fn extend_closure<'a>(
    config: &'a AnalysisConfiguration,
    record: &'a TypeRecord,
    side: Side,
    visited: &mut HashSet<&'a str>,
    names: &mut HashSet<&'a str>,
) {
    names.extend(side.of(record).iter().map(|p| p.name.as_str()));
    for parent in &record.supertypes {
        if !visited.insert(parent.as_str()) {
            continue;
        }
        if let Some(ancestor) = config.lookup(parent) {
            extend_closure(config, ancestor, side, visited, names);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str) -> ConnectionPoint {
        ConnectionPoint::at(name, 1, 0)
    }

    fn record(outlets: &[&str], actions: &[&str], supertypes: &[&str]) -> TypeRecord {
        TypeRecord {
            outlets: outlets.iter().map(|n| point(n)).collect(),
            actions: actions.iter().map(|n| point(n)).collect(),
            supertypes: supertypes.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn nib(outlets: &[&str], actions: &[&str]) -> UiConnectionRecord {
        UiConnectionRecord {
            outlets: outlets.iter().map(|n| point(n)).collect(),
            actions: actions.iter().map(|n| point(n)).collect(),
        }
    }

    fn config(ui: &[(&str, UiConnectionRecord)], types: &[(&str, TypeRecord)]) -> AnalysisConfiguration {
        AnalysisConfiguration {
            ui_by_type: ui.iter().map(|(n, r)| (n.to_string(), r.clone())).collect(),
            types_by_name: types.iter().map(|(n, r)| (n.to_string(), r.clone())).collect(),
            builtin_types_by_name: TypeMap::new(),
        }
    }

    #[test]
    fn test_no_outlets_and_actions() {
        let cfg = config(&[("A", nib(&[], &[]))], &[("A", record(&[], &[], &[]))]);
        assert!(issues(&cfg).is_empty());
    }

    #[test]
    fn test_missing_outlet() {
        let cfg = config(&[("A", nib(&["label"], &[]))], &[("A", record(&[], &[], &[]))]);
        assert_eq!(
            issues(&cfg),
            vec![Issue::MissingOutlet {
                type_name: "A".into(),
                point: point("label"),
            }]
        );
    }

    #[test]
    fn test_missing_action() {
        let cfg = config(&[("A", nib(&[], &["didTapButton:"]))], &[("A", record(&[], &[], &[]))]);
        assert_eq!(
            issues(&cfg),
            vec![Issue::MissingAction {
                type_name: "A".into(),
                point: point("didTapButton:"),
            }]
        );
    }

    #[test]
    fn test_unnecessary_outlet() {
        let cfg = config(&[("A", nib(&[], &[]))], &[("A", record(&["label"], &[], &[]))]);
        assert_eq!(
            issues(&cfg),
            vec![Issue::UnnecessaryOutlet {
                type_name: "A".into(),
                point: point("label"),
            }]
        );
    }

    #[test]
    fn test_unnecessary_action() {
        let cfg = config(&[("A", nib(&[], &[]))], &[("A", record(&[], &["didTapButton:"], &[]))]);
        assert_eq!(
            issues(&cfg),
            vec![Issue::UnnecessaryAction {
                type_name: "A".into(),
                point: point("didTapButton:"),
            }]
        );
    }

    #[test]
    fn test_type_without_declarations_reports_all_wiring_as_missing() {
        let cfg = config(&[("Unknown", nib(&["a"], &["b:"]))], &[]);
        let found = issues(&cfg);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].code(), "missing-outlet");
        assert_eq!(found[1].code(), "missing-action");
    }

    #[test]
    fn test_no_issue_when_outlet_in_superclass() {
        let cfg = config(
            &[("B", nib(&["label"], &[]))],
            &[("A", record(&["label"], &[], &[])), ("B", record(&[], &[], &["A"]))],
        );
        assert!(issues(&cfg).is_empty());
    }

    #[test]
    fn test_no_issue_when_outlet_in_super_superclass() {
        let cfg = config(
            &[("C", nib(&["label"], &[]))],
            &[
                ("A", record(&["label"], &[], &[])),
                ("B", record(&[], &[], &["A"])),
                ("C", record(&[], &[], &["B"])),
            ],
        );
        assert!(issues(&cfg).is_empty());
    }

    #[test]
    fn test_no_issue_when_action_in_superclass() {
        let cfg = config(
            &[("C", nib(&[], &["didTapButton:"]))],
            &[
                ("A", record(&[], &["didTapButton:"], &[])),
                ("B", record(&[], &[], &["A"])),
                ("C", record(&[], &[], &["B"])),
            ],
        );
        assert!(issues(&cfg).is_empty());
    }

    #[test]
    fn test_uses_builtin_types() {
        let mut cfg = config(&[("A", nib(&["delegate"], &[]))], &[("A", record(&[], &[], &["UITextField"]))]);
        cfg.builtin_types_by_name
            .insert("UITextField".into(), record(&["delegate"], &[], &[]));
        assert!(issues(&cfg).is_empty());
    }

    #[test]
    fn test_project_type_shadows_builtin_of_same_name() {
        let mut cfg = config(
            &[("A", nib(&["delegate"], &[]))],
            &[
                ("A", record(&[], &[], &["UITextField"])),
                ("UITextField", record(&[], &[], &[])),
            ],
        );
        cfg.builtin_types_by_name
            .insert("UITextField".into(), record(&["delegate"], &[], &[]));
        assert_eq!(issues(&cfg).len(), 1);
    }

    #[test]
    fn test_unresolved_supertype_contributes_nothing() {
        let cfg = config(
            &[("A", nib(&["label"], &[]))],
            &[("A", record(&[], &[], &["ThirdPartyController"]))],
        );
        assert_eq!(issues(&cfg).len(), 1);
    }

    #[test]
    fn test_cyclic_supertypes_terminate() {
        let cfg = config(
            &[("A", nib(&["x", "y"], &[]))],
            &[
                ("A", record(&[], &[], &["B"])),
                ("B", record(&["x"], &[], &["A"])),
                ("Self", record(&[], &[], &["Self"])),
            ],
        );
        assert_eq!(
            issues(&cfg),
            vec![Issue::MissingOutlet {
                type_name: "A".into(),
                point: point("y"),
            }]
        );
    }

    #[test]
    fn test_inherited_outlet_not_wired_is_not_reported_on_subclass() {
        let cfg = config(
            &[("B", nib(&[], &[]))],
            &[("A", record(&["label"], &[], &[])), ("B", record(&[], &[], &["A"]))],
        );
        assert!(issues(&cfg).is_empty());
    }

    #[test]
    fn test_emission_order_per_type_and_across_types() {
        let cfg = config(
            &[
                ("B", nib(&["m1", "m2"], &["a1:"])),
                ("A", nib(&["z"], &[])),
            ],
            &[
                ("A", record(&[], &[], &[])),
                ("B", record(&["u1", "u2"], &["ua:"], &[])),
            ],
        );
        let found: Vec<(String, &str, String)> = issues(&cfg)
            .iter()
            .map(|i| (i.type_name().to_string(), i.code(), i.point().name.clone()))
            .collect();
        let expected: Vec<(String, &str, String)> = vec![
            ("A".into(), "missing-outlet", "z".into()),
            ("B".into(), "missing-outlet", "m1".into()),
            ("B".into(), "missing-outlet", "m2".into()),
            ("B".into(), "missing-action", "a1:".into()),
            ("B".into(), "unnecessary-outlet", "u1".into()),
            ("B".into(), "unnecessary-outlet", "u2".into()),
            ("B".into(), "unnecessary-action", "ua:".into()),
        ];
        assert_eq!(found, expected);
    }

    #[test]
    fn test_empty_ui_records_with_empty_types_are_clean() {
        let cfg = config(
            &[("A", nib(&[], &[])), ("B", nib(&[], &[]))],
            &[("B", record(&[], &[], &["A"]))],
        );
        assert!(issues(&cfg).is_empty());
    }
}
