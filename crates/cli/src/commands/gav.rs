use anyhow::{Context, Result};
use std::io;
use tracing::debug;

use gav_reader_core::{Coordinate, Error, ModuleDescriptor};

use crate::utils::resolve_descriptor_path;

pub fn gav_command(
    gav: Option<&str>,
    parent_gav: Option<&str>,
    pom_path: Option<&str>,
    cwd: Option<&str>,
) -> Result<()> {
    let coordinate = parse_coordinate(gav).context("Invalid --gav")?;
    let parent = parse_coordinate(parent_gav).context("Invalid --parent-gav")?;

    let pom_path = pom_path.ok_or(Error::MissingDescriptorPath)?;
    let descriptor_path = resolve_descriptor_path(pom_path, cwd)?;
    debug!("Resolved descriptor path: {}", descriptor_path.display());

    let descriptor = ModuleDescriptor::new(coordinate, parent, descriptor_path)?;

    let mut stdout = io::stdout().lock();
    descriptor
        .write_record(&mut stdout)
        .context("Failed to write record to stdout")?;

    Ok(())
}

/// An empty argument counts as an absent coordinate
fn parse_coordinate(value: Option<&str>) -> gav_reader_core::Result<Option<Coordinate>> {
    value
        .filter(|v| !v.is_empty())
        .map(str::parse::<Coordinate>)
        .transpose()
}
