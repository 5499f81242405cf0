//! Distance metrics over a graph index

pub mod edge_distance;
pub mod resnik;

pub use edge_distance::EdgeDistance;
pub use resnik::ResnikDistance;
