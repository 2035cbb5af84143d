//! Builds the per-type model of declared outlets, actions and supertypes.
//!
//! Walks a `DeclNode` tree. Every class or extension node yields one
//! `TypeRecord` fragment; fragments sharing a type name are concatenated in
//! the order they are met, so a primary declaration and its extensions end
//! up in one record. Nested types become their own entries.

use crate::models::connection::insert_fragment;
use crate::models::{ConnectionPoint, TypeMap, TypeRecord};
use crate::position;
use crate::structure::{AttributeKind, DeclNode};
use std::path::Path;

/// Build the type map for one structure dump and the source text it describes.
///
/// `source` is attached to every connection point as an opaque locator.
pub fn build_type_map(root: &DeclNode, buffer: &str, source: Option<&Path>) -> TypeMap {
    let mut map = TypeMap::new();
    collect(std::slice::from_ref(root), buffer, source, &mut map);
    map
}

fn collect(nodes: &[DeclNode], buffer: &str, source: Option<&Path>, map: &mut TypeMap) {
    for node in nodes {
        // Nested declarations first; containers that are not types still get visited.
        collect(&node.children, buffer, source, map);
        if let Some(name) = node.type_name() {
            insert_fragment(map, name.to_string(), fragment(node, buffer, source));
        }
    }
}

/// The record contributed by a single type-bearing node (direct members only).
fn fragment(node: &DeclNode, buffer: &str, source: Option<&Path>) -> TypeRecord {
    let mut record = TypeRecord {
        supertypes: node.inherited_type_names(),
        ..Default::default()
    };
    for member in &node.children {
        if member.has_attribute(AttributeKind::IbOutlet) {
            if let Some(p) = member
                .name
                .as_deref()
                .and_then(|n| locate(member, n, buffer, source))
            {
                record.outlets.push(p);
            }
        }
        if member.has_attribute(AttributeKind::IbAction) {
            // Wiring refers to the selector; fall back to the declared name.
            let wiring_name = member.selector_name.as_deref().or(member.name.as_deref());
            if let Some(p) = wiring_name.and_then(|n| locate(member, n, buffer, source)) {
                record.actions.push(p);
            }
        }
    }
    record
}

/// Members without a name offset cannot be positioned and are dropped.
fn locate(
    member: &DeclNode,
    name: &str,
    buffer: &str,
    source: Option<&Path>,
) -> Option<ConnectionPoint> {
    let offset = member.name_offset?;
    let pos = position::resolve(buffer, offset);
    Some(ConnectionPoint::at(name, pos.line, pos.column).with_source(source.map(Path::to_path_buf)))
}
