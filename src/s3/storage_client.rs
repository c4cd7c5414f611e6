// Implement the storage client adapter traits for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use crate::common::{
    AclInfo,
    BackendError,
    BucketRequest,
    Buckets,
    EncryptionInfo,
    GetBucketAcl,
    GetBucketEncryption,
    GetBucketLocation,
    GetBucketLocationRequest,
    ListBuckets,
    ListBucketsRequest,
    Region,
    RegionBinder,
};
use super::bucket_list::BucketList;
use super::client::{
    cancellable,
    Client,
};
use super::bucket_settings::encryption_info;
use tokio_util::sync::CancellationToken;
use tracing::debug;

#[async_trait]
impl ListBuckets for Client {
    /// Return the buckets owned by the account from a single `ListBuckets`
    /// call.
    async fn list_buckets(
        &self,
        cancel:   &CancellationToken,
        _request: ListBucketsRequest,
    ) -> Result<Buckets, BackendError> {
        debug!("list_buckets: Listing in '{}'", self.region.name());

        let output = cancellable(cancel, async {
            self.client.list_buckets()
                .send()
                .await
                .map_err(BackendError::from)
        }).await?;

        let bucket_list: BucketList = output.into();

        Ok(bucket_list.into_buckets())
    }
}

#[async_trait]
impl GetBucketLocation for Client {
    /// Return the location constraint for the requested bucket.
    async fn get_bucket_location(
        &self,
        cancel:  &CancellationToken,
        request: GetBucketLocationRequest,
    ) -> Result<String, BackendError> {
        debug!("get_bucket_location for '{}'", request.bucket);

        let output = cancellable(cancel, async {
            self.client.get_bucket_location()
                .bucket(&request.bucket)
                .send()
                .await
                .map_err(BackendError::from)
        }).await?;

        let location = output.location_constraint()
            .map(|constraint| constraint.as_str())
            .unwrap_or_default();

        debug!("GetBucketLocation API returned '{}'", location);

        Ok(location.to_owned())
    }
}

#[async_trait]
impl GetBucketAcl for Client {
    /// Return a summary of the requested bucket's ACL.
    async fn get_bucket_acl(
        &self,
        cancel:  &CancellationToken,
        request: BucketRequest,
    ) -> Result<AclInfo, BackendError> {
        debug!(
            "get_bucket_acl for '{}' in '{}'",
            request.bucket,
            self.region.name(),
        );

        let output = cancellable(cancel, async {
            self.client.get_bucket_acl()
                .bucket(&request.bucket)
                .set_expected_bucket_owner(request.expected_bucket_owner.clone())
                .send()
                .await
                .map_err(BackendError::from)
        }).await?;

        Ok(output.into())
    }
}

#[async_trait]
impl GetBucketEncryption for Client {
    /// Return the default encryption configuration of the requested bucket.
    async fn get_bucket_encryption(
        &self,
        cancel:  &CancellationToken,
        request: BucketRequest,
    ) -> Result<Option<EncryptionInfo>, BackendError> {
        debug!(
            "get_bucket_encryption for '{}' in '{}'",
            request.bucket,
            self.region.name(),
        );

        let output = cancellable(cancel, async {
            self.client.get_bucket_encryption()
                .bucket(&request.bucket)
                .set_expected_bucket_owner(request.expected_bucket_owner.clone())
                .send()
                .await
                .map_err(BackendError::from)
        }).await?;

        Ok(encryption_info(&output))
    }
}

impl RegionBinder for Client {
    type Bound = Client;

    fn bind(&self, region: &Region) -> Self::Bound {
        self.with_region(region)
    }
}
