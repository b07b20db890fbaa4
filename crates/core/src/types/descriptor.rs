use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::coordinate::{Coordinate, gav_string};
use crate::error::{Error, Result};

/// The record emitted for one module: its coordinate, its parent's
/// coordinate if it has one, and the absolute path of its descriptor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    coordinate: Coordinate,
    parent: Option<Coordinate>,
    descriptor_path: PathBuf,
}

/// Wire shape of a record. Field order here is the order on the wire.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RawRecord {
    pub gav: String,
    #[serde(rename = "parentGav")]
    pub parent_gav: String,
    #[serde(rename = "pomPath")]
    pub pom_path: String,
}

impl ModuleDescriptor {
    /// Build a descriptor from values already resolved by the caller.
    ///
    /// A missing module coordinate or a relative descriptor path means the
    /// caller broke its contract; neither is patched up here.
    pub fn new(
        coordinate: Option<Coordinate>,
        parent: Option<Coordinate>,
        descriptor_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let coordinate = coordinate.ok_or(Error::MissingCoordinate)?;
        let descriptor_path = descriptor_path.into();

        if !descriptor_path.is_absolute() {
            return Err(Error::RelativeDescriptorPath(descriptor_path));
        }
        if descriptor_path.to_str().is_none() {
            return Err(Error::NonUtf8Path(descriptor_path));
        }

        Ok(Self {
            coordinate,
            parent,
            descriptor_path,
        })
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn parent(&self) -> Option<&Coordinate> {
        self.parent.as_ref()
    }

    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    /// Serialize to a single-line record, without the line terminator
    pub fn to_record(&self) -> Result<String> {
        let pom_path = self
            .descriptor_path
            .to_str()
            .ok_or_else(|| Error::NonUtf8Path(self.descriptor_path.clone()))?;

        let raw = RawRecord {
            gav: self.coordinate.to_string(),
            parent_gav: gav_string(self.parent.as_ref()),
            pom_path: pom_path.to_string(),
        };
        Ok(serde_json::to_string(&raw)?)
    }

    /// Write the record followed by a newline in one write.
    ///
    /// The line is fully rendered before anything touches `out`.
    pub fn write_record<W: Write>(&self, out: &mut W) -> Result<()> {
        let mut line = self.to_record()?;
        line.push('\n');
        debug!("Writing record for {}", self.descriptor_path.display());

        out.write_all(line.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Format one record from a module coordinate, an optional parent
/// coordinate and an absolute descriptor path.
pub fn format(
    coordinate: Option<Coordinate>,
    parent: Option<Coordinate>,
    descriptor_path: impl Into<PathBuf>,
) -> Result<String> {
    ModuleDescriptor::new(coordinate, parent, descriptor_path)?.to_record()
}
