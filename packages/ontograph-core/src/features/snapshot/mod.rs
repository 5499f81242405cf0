// Snapshot - content fingerprint and serializable graph index
//
// A snapshot is keyed by the fingerprint of the input it was built from
// and carries a format version. No file I/O happens here.
//
// ## Architecture
// - Domain: GraphFingerprint (blake3 over the normalized input)
// - Infrastructure: GraphSnapshot (capture, JSON, revalidating restore)

pub mod domain;
pub mod infrastructure;

pub use domain::GraphFingerprint;
pub use infrastructure::{GraphSnapshot, SNAPSHOT_VERSION};
