// Storage client adapter traits
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use super::{
    AclInfo,
    BackendError,
    Buckets,
    EncryptionInfo,
    Region,
};

/// Input for `ListBuckets`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListBucketsRequest;

/// Input for `GetBucketLocation`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetBucketLocationRequest {
    /// Bucket to locate.
    pub bucket: String,
}

impl GetBucketLocationRequest {
    /// Return a new request for `bucket`.
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_owned(),
        }
    }
}

/// Input for the per bucket `GetBucketAcl` and `GetBucketEncryption` calls.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BucketRequest {
    /// Bucket to query.
    pub bucket:                String,

    /// Account ID expected to own the bucket, if checked.
    pub expected_bucket_owner: Option<String>,
}

impl BucketRequest {
    /// Return a new request for `bucket` without an owner check.
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket:                bucket.to_owned(),
            expected_bucket_owner: None,
        }
    }
}

/// Lists the buckets owned by the account.
#[async_trait]
pub trait ListBuckets {
    /// Returns the buckets in the order the backend lists them.
    async fn list_buckets(
        &self,
        cancel:  &CancellationToken,
        request: ListBucketsRequest,
    ) -> Result<Buckets, BackendError>;
}

/// Looks up the location constraint of a bucket.
#[async_trait]
pub trait GetBucketLocation {
    /// Returns the raw location constraint, an empty string if the backend
    /// didn't give one.
    async fn get_bucket_location(
        &self,
        cancel:  &CancellationToken,
        request: GetBucketLocationRequest,
    ) -> Result<String, BackendError>;
}

/// Fetches the ACL of a bucket.
#[async_trait]
pub trait GetBucketAcl {
    /// Returns the bucket ACL.
    async fn get_bucket_acl(
        &self,
        cancel:  &CancellationToken,
        request: BucketRequest,
    ) -> Result<AclInfo, BackendError>;
}

/// Fetches the default encryption configuration of a bucket.
#[async_trait]
pub trait GetBucketEncryption {
    /// Returns the encryption configuration, `None` if it holds no rules.
    ///
    /// S3 reports a bucket without default encryption as an error, so that
    /// case arrives here as `Err`.
    async fn get_bucket_encryption(
        &self,
        cancel:  &CancellationToken,
        request: BucketRequest,
    ) -> Result<Option<EncryptionInfo>, BackendError>;
}

/// Produces client handles that send requests to a single region.
pub trait RegionBinder {
    /// The region bound handle.
    type Bound: GetBucketAcl + GetBucketEncryption + Send + Sync;

    /// Return a new handle targeting `region`.
    fn bind(&self, region: &Region) -> Self::Bound;
}
