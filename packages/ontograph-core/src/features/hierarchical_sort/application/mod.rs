//! Hierarchical sort application layer

pub mod sorter;

pub use sorter::HierarchicalSorter;
