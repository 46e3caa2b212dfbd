//! Catalogue data model — the YAML document the mind map is drawn from.
//!
//! ```yaml
//! categories:
//!   - name: Theory
//!     papers:
//!       - { authors: "Sugihara, G., May, R.", year: 1990 }
//!     subcategories:
//!       - name: Convergent Cross Mapping
//!         papers: [...]
//! ```
//!
//! Required fields (`name`, `authors`, `year`) are kept as raw YAML values;
//! the typed accessors report a missing or wrong-typed field as malformed
//! input against the record's location.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::error::{MindmapError, Result};

// ─── Catalogue ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalogue {
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

impl Catalogue {
    /// Parse catalogue text. YAML errors are reported against `<inline>`.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|source| MindmapError::Parse {
            path: "<inline>".into(),
            source,
        })
    }

    /// Read and parse the catalogue at `path`.
    ///
    /// A path that does not exist is reported as `MissingSourceFile` before
    /// any read is attempted.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MindmapError::MissingSourceFile(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| MindmapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = serde_yaml::from_str(&text).map_err(|source| MindmapError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded catalogue");
        Ok(catalogue)
    }
}

// ─── Category / Subcategory ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Category {
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub papers: Vec<Paper>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    pub fn new(name: &str, papers: Vec<Paper>, subcategories: Vec<Subcategory>) -> Self {
        Self {
            name: Some(Value::String(name.to_string())),
            papers,
            subcategories,
        }
    }

    /// The node label. `location` names the record in error messages.
    pub fn name_text(&self, location: &str) -> Result<&str> {
        name_field(self.name.as_ref(), location)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subcategory {
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub papers: Vec<Paper>,
}

impl Subcategory {
    pub fn new(name: &str, papers: Vec<Paper>) -> Self {
        Self {
            name: Some(Value::String(name.to_string())),
            papers,
        }
    }

    pub fn name_text(&self, location: &str) -> Result<&str> {
        name_field(self.name.as_ref(), location)
    }
}

// ─── Paper ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paper {
    /// Comma-separated full names, first author first.
    pub authors: Option<Value>,
    /// Integer or string.
    pub year: Option<Value>,
}

impl Paper {
    pub fn new(authors: &str, year: u32) -> Self {
        Self {
            authors: Some(Value::String(authors.to_string())),
            year: Some(Value::from(year)),
        }
    }

    pub fn authors_text(&self, location: &str) -> Result<&str> {
        text_field(self.authors.as_ref(), "authors", location)
    }

    /// The year as display text. Numbers are rendered verbatim, strings
    /// trimmed; a blank string counts as missing.
    pub fn year_text(&self, location: &str) -> Result<String> {
        match self.year.as_ref() {
            None | Some(Value::Null) => Err(MindmapError::malformed(location, "missing `year`")),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(MindmapError::malformed(location, "missing `year`"))
            }
            Some(Value::String(s)) => Ok(s.trim().to_string()),
            Some(_) => Err(MindmapError::malformed(
                location,
                "`year` must be an integer or string",
            )),
        }
    }
}

// ─── Field helpers ───────────────────────────────────────────────────────────

fn text_field<'a>(value: Option<&'a Value>, key: &str, location: &str) -> Result<&'a str> {
    match value {
        None | Some(Value::Null) => Err(MindmapError::malformed(
            location,
            format!("missing `{key}`"),
        )),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(MindmapError::malformed(
            location,
            format!("`{key}` must be a string"),
        )),
    }
}

/// `papers:` with no value reads as an empty list.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn name_field<'a>(value: Option<&'a Value>, location: &str) -> Result<&'a str> {
    let name = text_field(value, "name", location)?;
    if name.trim().is_empty() {
        return Err(MindmapError::malformed(location, "empty `name`"));
    }
    Ok(name)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
