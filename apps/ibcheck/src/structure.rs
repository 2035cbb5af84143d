//! Declaration tree produced by an external source-structure extractor.
//!
//! The shape mirrors SourceKit's `structure` dump: every node is a JSON
//! object keyed with `key.*` names and nested through `key.substructure`.
//! Only the fields the type model needs are kept; everything else in the
//! dump is ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;
use std::collections::HashMap;

const KIND_CLASS: &str = "source.lang.swift.decl.class";
const KIND_EXTENSION: &str = "source.lang.swift.decl.extension";
const KIND_EXTENSION_CLASS: &str = "source.lang.swift.decl.extension.class";

const ATTR_OUTLET: &str = "source.decl.attribute.iboutlet";
const ATTR_ACTION: &str = "source.decl.attribute.ibaction";

#[derive(Debug, Clone, Default, Deserialize)]
/// One declaration (or the file root) in the structure dump.
///
/// Every field is read leniently: a value of the wrong shape counts as
/// absent, and a malformed list entry is skipped without rejecting the file.
pub struct DeclNode {
    #[serde(rename = "key.kind", default, deserialize_with = "lenient")]
    pub kind: Option<String>,
    #[serde(rename = "key.name", default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(rename = "key.attributes", default, deserialize_with = "lenient_seq")]
    pub attributes: Vec<Attribute>,
    #[serde(rename = "key.nameoffset", default, deserialize_with = "lenient")]
    pub name_offset: Option<usize>,
    #[serde(rename = "key.selector_name", default, deserialize_with = "lenient")]
    pub selector_name: Option<String>,
    #[serde(rename = "key.inheritedtypes", default, deserialize_with = "lenient_seq")]
    pub inherited_types: Vec<InheritedType>,
    #[serde(rename = "key.substructure", default, deserialize_with = "lenient_seq")]
    pub children: Vec<DeclNode>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Json::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).unwrap_or_default())
}

fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Json::deserialize(deserializer)? {
        Json::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Attribute tags the type model cares about.
pub enum AttributeKind {
    IbOutlet,
    IbAction,
    Other,
}

impl AttributeKind {
    fn from_token(token: &str) -> AttributeKind {
        match token {
            ATTR_OUTLET => AttributeKind::IbOutlet,
            ATTR_ACTION => AttributeKind::IbAction,
            _ => AttributeKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "HashMap<String, Json>")]
/// A declaration attribute, classified from its raw key/value record.
pub struct Attribute {
    pub kind: AttributeKind,
}

impl From<HashMap<String, Json>> for Attribute {
    fn from(raw: HashMap<String, Json>) -> Self {
        let kind = raw
            .values()
            .filter_map(Json::as_str)
            .map(AttributeKind::from_token)
            .find(|k| *k != AttributeKind::Other)
            .unwrap_or(AttributeKind::Other);
        Attribute { kind }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InheritedType {
    #[serde(rename = "key.name", default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    Extension,
    Other,
}

impl DeclNode {
    pub fn decl_kind(&self) -> DeclKind {
        match self.kind.as_deref() {
            Some(KIND_CLASS) => DeclKind::Class,
            Some(KIND_EXTENSION) | Some(KIND_EXTENSION_CLASS) => DeclKind::Extension,
            _ => DeclKind::Other,
        }
    }

    /// Name of the type this node declares or extends, if it is one.
    pub fn type_name(&self) -> Option<&str> {
        match self.decl_kind() {
            DeclKind::Class | DeclKind::Extension => self.name.as_deref(),
            DeclKind::Other => None,
        }
    }

    pub fn has_attribute(&self, kind: AttributeKind) -> bool {
        self.attributes.iter().any(|a| a.kind == kind)
    }

    pub fn inherited_type_names(&self) -> Vec<String> {
        self.inherited_types
            .iter()
            .filter_map(|t| t.name.clone())
            .collect()
    }
}

/// Parse a structure dump (the JSON root object) into its root node.
///
/// Only text that is not JSON at all, or whose root is not an object, fails.
pub fn parse_structure(json: &str) -> Result<DeclNode, serde_json::Error> {
    serde_json::from_str(json)
}
