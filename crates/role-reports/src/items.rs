//! Report inputs: items, users and roles
//!
//! Items can be loaded from CSV (`id,name,value` header) or from a JSON array.
//! Loading is a convenience for the CLI; the report pipeline only ever sees
//! slices of already-built items.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;

use crate::constants;

/// Input record. Never mutated by the pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub value: f64,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
        }
    }
}

/// An item as it appears in a report, with the admin-only priority flag
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedItem {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub priority: bool,
}

impl AnnotatedItem {
    /// Copy an item without annotation
    pub fn plain(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            value: item.value,
            priority: false,
        }
    }

    /// Copy an item and flag it as priority
    pub fn flagged(item: &Item) -> Self {
        Self {
            priority: true,
            ..Self::plain(item)
        }
    }
}

/// Role identifiers. Anything other than ADMIN/USER is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Role {
    Admin,
    User,
    Unrecognized(String),
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        match raw {
            constants::ROLE_ADMIN => Role::Admin,
            constants::ROLE_USER => Role::User,
            other => Role::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::from(raw.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", constants::ROLE_ADMIN),
            Role::User => write!(f, "{}", constants::ROLE_USER),
            Role::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}

/// The user a report is generated for
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(name: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Ids are opaque; accept both `"7"` and `7` in JSON input
fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

/// CSV row shape. The id stays raw text so "007" is not read as a number.
#[derive(Deserialize)]
struct CsvItemRow {
    id: String,
    name: String,
    value: f64,
}

/// Load items from a CSV file with an `id,name,value` header
pub fn load_from_csv(path: &Path) -> Result<Vec<Item>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open items file: {}", path.display()))?;
    let mut items = Vec::new();
    for (line, result) in rdr.deserialize().enumerate() {
        let row: CsvItemRow =
            result.with_context(|| format!("Invalid item on data row {}", line + 1))?;
        items.push(Item::new(row.id, row.name, row.value));
    }
    Ok(items)
}

/// Load items from a JSON file holding an array of `{id, name, value}`
pub fn load_from_json(path: &Path) -> Result<Vec<Item>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read items file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse items JSON: {}", path.display()))
}

/// Load items, picking the parser from the file extension (CSV unless `.json`)
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        load_from_json(path)
    } else {
        load_from_csv(path)
    }
}
