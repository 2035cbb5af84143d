//! Outlets that framework base classes expose without any project source.

use crate::models::{ConnectionPoint, TypeMap, TypeRecord};
use std::collections::HashMap;

/// UIKit and friends: base type name to implicitly available outlets.
const FRAMEWORK_OUTLETS: &[(&str, &[&str])] = &[
    ("UITextField", &["delegate"]),
    ("UITableView", &["delegate", "dataSource"]),
    (
        "UITableViewCell",
        &[
            "accessoryView",
            "backgroundView",
            "editingAccessoryView",
            "selectedBackgroundView",
        ],
    ),
    ("UICollectionView", &["delegate", "dataSource", "prefetchDataSource"]),
    ("UICollectionViewCell", &["backgroundView", "selectedBackgroundView"]),
    ("UITextView", &["delegate"]),
    ("UIScrollView", &["delegate"]),
    ("UIPickerView", &["delegate", "dataSource"]),
    ("MKMapView", &["delegate"]),
    ("GLKView", &["delegate"]),
    ("SCNView", &["delegate"]),
    ("UIWebView", &["delegate"]),
    ("UITapGestureRecognizer", &["delegate"]),
    ("UIPinchGestureRecognizer", &["delegate"]),
    ("UIRotationGestureRecognizer", &["delegate"]),
    ("UISwipeGestureRecognizer", &["delegate"]),
    ("UIPanGestureRecognizer", &["delegate"]),
    ("UIScreenEdgePanGestureRecognizer", &["delegate"]),
    ("UILongPressGestureRecognizer", &["delegate"]),
    ("UIGestureRecognizer", &["delegate"]),
    ("UINavigationBar", &["delegate"]),
    (
        "UINavigationItem",
        &["backBarButtonItem", "leftBarButtonItem", "rightBarButtonItem", "titleView"],
    ),
    ("UIToolbar", &["delegate"]),
    ("UITabBar", &["delegate"]),
    ("UISearchBar", &["delegate"]),
];

fn outlet_only(names: impl IntoIterator<Item = impl Into<String>>) -> TypeRecord {
    TypeRecord {
        outlets: names.into_iter().map(ConnectionPoint::synthetic).collect(),
        actions: Vec::new(),
        supertypes: Vec::new(),
    }
}

/// The compiled-in table as a `TypeMap` with no actions and no supertypes.
pub fn builtin_type_map() -> TypeMap {
    FRAMEWORK_OUTLETS
        .iter()
        .map(|(name, outlets)| (name.to_string(), outlet_only(outlets.iter().copied())))
        .collect()
}

/// Compiled-in table with `[builtins]` entries from the config laid over it.
///
/// A configured entry replaces the compiled-in outlets for that type name.
pub fn effective_builtins(extra: &HashMap<String, Vec<String>>) -> TypeMap {
    let mut map = builtin_type_map();
    for (name, outlets) in extra {
        map.insert(name.clone(), outlet_only(outlets.iter().cloned()));
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_view_exposes_delegate_and_data_source() {
        let map = builtin_type_map();
        let tv = &map["UITableView"];
        let names: Vec<&str> = tv.outlets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["delegate", "dataSource"]);
        assert!(tv.actions.is_empty());
        assert!(tv.supertypes.is_empty());
        assert_eq!(tv.outlets[0].line, 0);
    }

    #[test]
    fn test_config_entries_override_and_extend() {
        let mut extra = HashMap::new();
        extra.insert("UITextField".to_string(), vec!["inputDelegate".to_string()]);
        extra.insert("FSCalendar".to_string(), vec!["delegate".to_string(), "dataSource".to_string()]);
        let map = effective_builtins(&extra);
        assert_eq!(map["UITextField"].outlets[0].name, "inputDelegate");
        assert_eq!(map["UITextField"].outlets.len(), 1);
        assert_eq!(map["FSCalendar"].outlets.len(), 2);
        assert!(map.contains_key("UISearchBar"));
    }
}
