pub mod path;

pub use path::resolve_descriptor_path;
