// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::Region;

/// Client configuration.
#[derive(Debug, Default)]
pub struct ClientConfig {
    /// Custom S3 endpoint URL, for S3 compatible services.
    ///
    /// When set, path style addressing is used.
    pub endpoint: Option<String>,

    /// Shared config profile to load credentials from.
    pub profile: Option<String>,

    /// The region that our AWS client should be created in.
    ///
    /// Bucket listing and location lookups are sent here, everything else
    /// goes to the region each bucket lives in.
    pub region: Region,
}
