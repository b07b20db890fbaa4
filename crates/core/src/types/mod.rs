pub mod coordinate;
pub mod descriptor;

pub use coordinate::{Coordinate, gav_string};
pub use descriptor::{ModuleDescriptor, format};
