//! Interface Builder markup scanner (`.xib` / `.storyboard`).
//!
//! Produces the UI side of the comparison: for each custom class referenced
//! by a layout file, the outlets and actions wired to it.
//!
//! - `<outlet>` / `<outletCollection>` belong to the element whose
//!   `<connections>` block lists them. Only elements with a `customClass`
//!   count; framework objects are never checked on their own.
//! - `<action>` is listed on the sender and points at its target through
//!   `destination`, so it is attributed to the custom class of the element
//!   carrying that id.

use crate::models::{ConnectionPoint, UiConnectionRecord, UiMap};
use crate::position::LineCursor;
use roxmltree::{Document, Node};
use std::collections::HashMap;
use std::path::Path;

enum Wiring<'a> {
    Outlet { owner: &'a str, property: &'a str },
    Action { target: &'a str, selector: &'a str },
}

/// Scan one layout file. `source` is attached to every point for display.
pub fn scan(markup: &str, source: Option<&Path>) -> Result<UiMap, roxmltree::Error> {
    let doc = Document::parse(markup)?;
    let class_by_id: HashMap<&str, &str> = doc
        .descendants()
        .filter(Node::is_element)
        .filter_map(|n| Some((n.attribute("id")?, n.attribute("customClass")?)))
        .collect();

    let mut map = UiMap::new();
    let mut cursor = LineCursor::new(markup);
    for node in doc.descendants().filter(Node::is_element) {
        let Some(wiring) = wiring(node, &class_by_id) else {
            continue;
        };
        let pos = cursor.advance(node.range().start);
        let point = |name: &str| {
            ConnectionPoint::at(name, pos.line, pos.column)
                .with_source(source.map(Path::to_path_buf))
        };
        match wiring {
            Wiring::Outlet { owner, property } => map
                .entry(owner.to_string())
                .or_insert_with(UiConnectionRecord::default)
                .outlets
                .push(point(property)),
            Wiring::Action { target, selector } => map
                .entry(target.to_string())
                .or_insert_with(UiConnectionRecord::default)
                .actions
                .push(point(selector)),
        }
    }
    Ok(map)
}

fn wiring<'a>(node: Node<'a, '_>, class_by_id: &HashMap<&str, &'a str>) -> Option<Wiring<'a>> {
    match node.tag_name().name() {
        "outlet" | "outletCollection" => Some(Wiring::Outlet {
            owner: connections_owner(node)?,
            property: node.attribute("property")?,
        }),
        "action" => Some(Wiring::Action {
            target: class_by_id.get(node.attribute("destination")?).copied()?,
            selector: node.attribute("selector")?,
        }),
        _ => None,
    }
}

/// Custom class of the element that owns the enclosing `<connections>` block.
fn connections_owner<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    let connections = node.parent_element()?;
    if connections.tag_name().name() != "connections" {
        return None;
    }
    connections.parent_element()?.attribute("customClass")
}
