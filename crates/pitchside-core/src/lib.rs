// Library root: configuration, dataset loading, team resolution and view
// aggregation. No terminal code lives here.

pub mod config;
pub mod data;
pub mod resolver;
pub mod views;
