use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::boundary::{EntryLookup, SfxLabel};
use crate::fields::FieldInput;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse catalog at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid catalog: {0}")]
    Syntax(#[from] toml::de::Error),
    #[error("Entry id {0} appears more than once")]
    DuplicateId(u32),
    #[error("Entry ids must be positive")]
    ZeroId,
}

/// One onomatopoeia with its raw, unresolved fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    /// The onomatopoeia itself; also the label cross-references show.
    pub text: String,
    #[serde(default)]
    pub read: String,
    #[serde(default)]
    pub def: String,
    #[serde(default)]
    pub extra: String,
    #[serde(default)]
    pub tl_extra: String,
}

impl CatalogEntry {
    /// The resolver input for this entry.
    pub fn fields(&self) -> FieldInput {
        FieldInput::new(
            self.read.clone(),
            self.def.clone(),
            self.extra.clone(),
            self.tl_extra.clone(),
        )
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "entry")]
    entries: Vec<CatalogEntry>,
}

/// An in-memory set of entries loaded from a TOML file of `[[entry]]` tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<u32, usize>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.id == 0 {
                return Err(CatalogError::ZeroId);
            }
            if index.insert(entry.id, i).is_some() {
                return Err(CatalogError::DuplicateId(entry.id));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.entries)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile =
            toml::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(file.entries)
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&CatalogEntry> {
        self.index.get(&id).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryLookup for Catalog {
    fn lookup(&self, id: u32) -> Option<SfxLabel> {
        self.get(id).map(|entry| SfxLabel {
            id,
            label: entry.text.clone(),
        })
    }
}
