// Definition of a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::{
    DateTime,
    Utc,
};

/// Represents an S3 bucket as returned by the bucket listing.
///
/// This will always have a `name` and optionally a `creation_date`, older
/// S3 compatible backends don't always return one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BucketDescriptor {
    /// Name of the bucket, unique within the account.
    pub name:          String,

    /// When the bucket was created.
    pub creation_date: Option<DateTime<Utc>>,
}

impl BucketDescriptor {
    /// Return a new `BucketDescriptor` without a creation date.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:          name.into(),
            creation_date: None,
        }
    }
}

/// Convenience type for a list of `BucketDescriptor`.
pub type Buckets = Vec<BucketDescriptor>;
