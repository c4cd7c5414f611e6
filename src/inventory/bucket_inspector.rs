// Fetches ACL and encryption metadata for a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    AclInfo,
    BackendError,
    BucketRequest,
    EncryptionInfo,
    GetBucketAcl,
    GetBucketEncryption,
    InventoryError,
};
use super::region_resolver::RegionBinding;
use tokio_util::sync::CancellationToken;
use tracing::{
    debug,
    warn,
};

/// Inspects buckets through a `RegionBinding`.
pub struct BucketInspector<'a, B> {
    binding: &'a RegionBinding<B>,
    cancel:  &'a CancellationToken,
}

impl<'a, B> BucketInspector<'a, B>
where
    B: GetBucketAcl + GetBucketEncryption + Sync,
{
    /// Return a new `BucketInspector` sending requests through `binding`.
    pub fn new(
        binding: &'a RegionBinding<B>,
        cancel:  &'a CancellationToken,
    ) -> Self {
        Self {
            binding,
            cancel,
        }
    }

    /// Return the ACL of `bucket`.
    ///
    /// Any failure here aborts the inventory.
    pub async fn fetch_acl(&self, bucket: &str) -> Result<AclInfo, InventoryError> {
        debug!(
            "fetch_acl: Retrieving ACL for '{}' in '{}'",
            bucket,
            self.binding.region(),
        );

        let request = BucketRequest::new(bucket);

        self.binding.handle()
            .get_bucket_acl(self.cancel, request)
            .await
            .map_err(|source| {
                InventoryError::AclLookup {
                    bucket: bucket.to_owned(),
                    source,
                }
            })
    }

    /// Return the default encryption of `bucket`.
    ///
    /// S3 answers with an error when a bucket has no default encryption, so
    /// every failure is logged and treated as "no encryption".
    pub async fn fetch_encryption(&self, bucket: &str) -> Option<EncryptionInfo> {
        debug!(
            "fetch_encryption: Retrieving encryption for '{}' in '{}'",
            bucket,
            self.binding.region(),
        );

        let request = BucketRequest::new(bucket);

        let ret = self.binding.handle()
            .get_bucket_encryption(self.cancel, request)
            .await;

        match ret {
            Ok(encryption) => encryption,
            Err(BackendError::Api { code, message, fault }) => {
                warn!(
                    "Got an API error retrieving bucket encryption, bucket: {}, code: {}, message: {}, fault: {}",
                    bucket,
                    code,
                    message,
                    fault,
                );

                None
            },
            Err(err) => {
                warn!(
                    "Got an error retrieving bucket encryption for '{}': {}",
                    bucket,
                    err,
                );

                None
            },
        }
    }
}
