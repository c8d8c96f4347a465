//! Inventory text formats.

mod yaml;

pub use yaml::YamlFormat;
