// Season tables: typed rows, CSV loaders and the per-path snapshot cache.

pub mod cache;
pub mod loader;
pub mod records;
