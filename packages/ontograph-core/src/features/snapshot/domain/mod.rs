//! Snapshot domain

pub mod fingerprint;

pub use fingerprint::GraphFingerprint;
