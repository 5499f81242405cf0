//! Validation application layer

pub mod runner;

pub use runner::ValidationRunner;
