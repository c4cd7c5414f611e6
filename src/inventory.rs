// The per bucket inventory pipeline
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Fetches ACL and encryption metadata through a `RegionBinding`.
mod bucket_inspector;

/// Drives listing, region resolution and inspection of every bucket.
mod orchestrator;

/// Resolves bucket regions into `RegionBinding`s.
mod region_resolver;

/// In memory backend used by the pipeline tests.
#[cfg(test)]
mod memory_backend;

pub use bucket_inspector::*;
pub use orchestrator::*;
pub use region_resolver::*;
