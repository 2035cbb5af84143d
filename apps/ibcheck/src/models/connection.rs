//! Connection points and the per-type records built from source and UI files.
//!
//! Both sides of the comparison share `ConnectionPoint`. Code-side records
//! (`TypeRecord`) also carry supertype references; UI-side records
//! (`UiConnectionRecord`) only carry what a layout file wires.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A named member that can be wired to the UI, with an optional location.
pub struct ConnectionPoint {
    pub name: String,
    /// 1-based; 0 when unknown or synthetic.
    pub line: usize,
    /// Characters since the last line break; 0 when unknown.
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl ConnectionPoint {
    /// A point with no location, as used by the built-in table.
    pub fn synthetic(name: impl Into<String>) -> Self {
        ConnectionPoint {
            name: name.into(),
            line: 0,
            column: 0,
            source: None,
        }
    }

    pub fn at(name: impl Into<String>, line: usize, column: usize) -> Self {
        ConnectionPoint {
            name: name.into(),
            line,
            column,
            source: None,
        }
    }

    pub fn with_source(mut self, source: Option<PathBuf>) -> Self {
        self.source = source;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Outlets, actions and supertype names declared for one type name.
pub struct TypeRecord {
    pub outlets: Vec<ConnectionPoint>,
    pub actions: Vec<ConnectionPoint>,
    /// Superclass and adopted protocol names, unresolved.
    pub supertypes: Vec<String>,
}

impl TypeRecord {
    /// Concatenate another fragment of the same type after this one.
    pub fn merge(mut self, other: TypeRecord) -> TypeRecord {
        self.outlets.extend(other.outlets);
        self.actions.extend(other.actions);
        self.supertypes.extend(other.supertypes);
        self
    }
}

/// Type name to merged record.
pub type TypeMap = HashMap<String, TypeRecord>;

/// Merge `fragment` into `map`, appending to an existing entry for the same name.
pub fn merge_type_maps(mut map: TypeMap, fragment: TypeMap) -> TypeMap {
    for (name, record) in fragment {
        insert_fragment(&mut map, name, record);
    }
    map
}

pub(crate) fn insert_fragment(map: &mut TypeMap, name: String, record: TypeRecord) {
    let merged = match map.remove(&name) {
        Some(existing) => existing.merge(record),
        None => record,
    };
    map.insert(name, merged);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Outlets and actions wired for one type across every UI file.
pub struct UiConnectionRecord {
    pub outlets: Vec<ConnectionPoint>,
    pub actions: Vec<ConnectionPoint>,
}

impl UiConnectionRecord {
    pub fn merge(mut self, other: UiConnectionRecord) -> UiConnectionRecord {
        self.outlets.extend(other.outlets);
        self.actions.extend(other.actions);
        self
    }
}

/// Type name to UI wiring. Ordered so reports are stable across runs.
pub type UiMap = BTreeMap<String, UiConnectionRecord>;

pub fn merge_ui_maps(mut map: UiMap, fragment: UiMap) -> UiMap {
    for (name, record) in fragment {
        let merged = match map.remove(&name) {
            Some(existing) => existing.merge(record),
            None => record,
        };
        map.insert(name, merged);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlets(names: &[&str]) -> TypeRecord {
        TypeRecord {
            outlets: names.iter().map(|n| ConnectionPoint::synthetic(*n)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_keeps_both_fragments_in_order() {
        let primary = TypeRecord {
            supertypes: vec!["UIViewController".into()],
            ..outlets(&["label"])
        };
        let extension = TypeRecord {
            supertypes: vec!["UITableViewDelegate".into()],
            ..outlets(&["button"])
        };
        let merged = primary.merge(extension);
        let names: Vec<&str> = merged.outlets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["label", "button"]);
        assert_eq!(
            merged.supertypes,
            vec!["UIViewController".to_string(), "UITableViewDelegate".to_string()]
        );
    }

    #[test]
    fn test_merge_type_maps_never_overwrites() {
        let mut a = TypeMap::new();
        a.insert("A".into(), outlets(&["x"]));
        let mut b = TypeMap::new();
        b.insert("A".into(), outlets(&["y"]));
        b.insert("B".into(), outlets(&["z"]));
        let merged = merge_type_maps(a, b);
        assert_eq!(merged["A"].outlets.len(), 2);
        assert_eq!(merged["B"].outlets[0].name, "z");
    }

    #[test]
    fn test_merge_ui_maps_aggregates_per_type() {
        let mut a = UiMap::new();
        a.insert(
            "A".into(),
            UiConnectionRecord {
                outlets: vec![ConnectionPoint::synthetic("label")],
                actions: vec![],
            },
        );
        let mut b = UiMap::new();
        b.insert(
            "A".into(),
            UiConnectionRecord {
                outlets: vec![],
                actions: vec![ConnectionPoint::synthetic("tap:")],
            },
        );
        let merged = merge_ui_maps(a, b);
        assert_eq!(merged["A"].outlets.len(), 1);
        assert_eq!(merged["A"].actions.len(), 1);
    }
}
