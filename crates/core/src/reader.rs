//! Reading records back from `gav-reader` output
//!
//! An IDE running the tool over a multi-module build gets one record per
//! module on stdout. These helpers turn that stream back into descriptors and
//! index them by descriptor path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::coordinate::gav_string;
use crate::types::descriptor::RawRecord;
use crate::types::{Coordinate, ModuleDescriptor};

/// Parse a single record line
pub fn parse_record(line: &str) -> Result<ModuleDescriptor> {
    parse_line(line, 1)
}

/// Parse every non-blank line of `output` as a record, in order
pub fn parse_records(output: &str) -> Result<Vec<ModuleDescriptor>> {
    output
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

fn parse_line(line: &str, line_no: usize) -> Result<ModuleDescriptor> {
    let malformed = |message: String| Error::MalformedRecord {
        line: line_no,
        message,
    };

    let raw: RawRecord =
        serde_json::from_str(line.trim()).map_err(|e| malformed(e.to_string()))?;

    let coordinate = if raw.gav.is_empty() {
        None
    } else {
        Some(raw.gav.parse::<Coordinate>().map_err(|e| malformed(e.to_string()))?)
    };

    // An empty parent is indistinguishable from no parent
    let parent = if raw.parent_gav.is_empty() {
        None
    } else {
        Some(
            raw.parent_gav
                .parse::<Coordinate>()
                .map_err(|e| malformed(e.to_string()))?,
        )
    };

    ModuleDescriptor::new(coordinate, parent, PathBuf::from(raw.pom_path))
        .map_err(|e| malformed(e.to_string()))
}

/// Records keyed by descriptor path, holding `(gav, parentGav)` strings.
///
/// Entries keep the order their paths were first inserted in.
#[derive(Debug, Default, Clone)]
pub struct RecordIndex {
    entries: Vec<(PathBuf, String, String)>,
    positions: HashMap<PathBuf, usize>,
}

impl RecordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index; a later record for the same path replaces an earlier one
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ModuleDescriptor>) -> Self {
        let mut index = Self::new();
        for record in records {
            index.insert(record);
        }
        index
    }

    pub fn insert(&mut self, record: &ModuleDescriptor) {
        let path = record.descriptor_path().to_path_buf();
        let gav = record.coordinate().to_string();
        let parent_gav = gav_string(record.parent());

        match self.positions.get(&path).copied() {
            Some(pos) => {
                let entry = &mut self.entries[pos];
                debug!("Replacing record {} for {}", entry.1, path.display());
                entry.1 = gav;
                entry.2 = parent_gav;
            }
            None => {
                self.positions.insert(path.clone(), self.entries.len());
                self.entries.push((path, gav, parent_gav));
            }
        }
    }

    pub fn get(&self, descriptor_path: &Path) -> Option<(&str, &str)> {
        let (_, gav, parent_gav) = &self.entries[*self.positions.get(descriptor_path)?];
        Some((gav.as_str(), parent_gav.as_str()))
    }

    /// Find the descriptor path of the module's parent, if the parent was indexed too.
    ///
    /// When several paths share the parent's GAV, the first one inserted wins.
    pub fn parent_of(&self, descriptor_path: &Path) -> Option<&Path> {
        let (_, parent_gav) = self.get(descriptor_path)?;
        if parent_gav.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(_, gav, _)| gav == parent_gav)
            .map(|(path, _, _)| path.as_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
