// Graph Builder Infrastructure
//
// Phases:
// 1. node registration (duplicates)
// 2. edge resolution (dangling endpoints, self-loops, duplicate edges)
// 3. tri-color DFS (cycles) and reachability from the root
// 4. breadth-first index assignment and CSR assembly

pub mod builder;
mod dag_check;
mod edge_resolver;
mod index_builder;
mod issues;
mod node_registry;

pub use builder::GraphBuilder;
