//! Serializable graph index

pub mod graph_snapshot;

pub use graph_snapshot::{GraphSnapshot, SNAPSHOT_VERSION};
