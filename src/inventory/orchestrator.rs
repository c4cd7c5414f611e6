// Drives the inventory of every bucket owned by the account
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    BucketDescriptor,
    GetBucketLocation,
    InventoryError,
    InventoryRecord,
    ListBuckets,
    ListBucketsRequest,
    RegionBinder,
    Report,
};
use super::bucket_inspector::BucketInspector;
use super::region_resolver::RegionResolver;
use tokio_util::sync::CancellationToken;
use tracing::{
    debug,
    debug_span,
    info,
    Instrument,
};

/// Runs the inventory against a home region client.
///
/// Buckets are processed one at a time, in the order the listing returned
/// them. Each bucket gets its own `RegionBinding`, resolved from its own
/// location and dropped once its record has been produced.
pub struct Inventory<'a, C> {
    client: &'a C,
    cancel: &'a CancellationToken,
}

impl<'a, C> Inventory<'a, C>
where
    C: ListBuckets + GetBucketLocation + RegionBinder + Sync,
{
    /// Return a new `Inventory` using `client` for listing and location
    /// lookups.
    pub fn new(client: &'a C, cancel: &'a CancellationToken) -> Self {
        Self {
            client,
            cancel,
        }
    }

    /// Return the `Report` for every bucket.
    ///
    /// A failure to list buckets, locate a bucket or read its ACL aborts the
    /// run and no report is returned. Encryption lookup failures only cause
    /// that bucket to be reported without a key.
    pub async fn run(&self) -> Result<Report, InventoryError> {
        debug!("run: Listing buckets");

        let buckets = self.client.list_buckets(self.cancel, ListBucketsRequest)
            .await
            .map_err(InventoryError::Listing)?;

        info!("Found {} buckets", buckets.len());

        let resolver   = RegionResolver::new(self.client, self.cancel);
        let mut report = Report::with_capacity(buckets.len());

        for bucket in &buckets {
            let span = debug_span!("bucket", name = %bucket.name);

            let record = self.inventory_bucket(&resolver, bucket)
                .instrument(span)
                .await?;

            report.push(record);
        }

        info!("Recorded {} buckets", report.len());

        Ok(report)
    }

    // Resolve, inspect and record a single bucket.
    async fn inventory_bucket(
        &self,
        resolver: &RegionResolver<'a, C>,
        bucket:   &BucketDescriptor,
    ) -> Result<InventoryRecord, InventoryError> {
        if self.cancel.is_cancelled() {
            return Err(InventoryError::Cancelled);
        }

        debug!(
            "inventory_bucket: '{}' created {:?}",
            bucket.name,
            bucket.creation_date,
        );

        let binding   = resolver.resolve_region(&bucket.name).await?;
        let inspector = BucketInspector::new(&binding, self.cancel);

        let acl = inspector.fetch_acl(&bucket.name).await?;

        debug!(
            "inventory_bucket: ACL for '{}' owned by {:?} with {} grants",
            bucket.name,
            acl.owner_id,
            acl.grants,
        );

        let encryption = inspector.fetch_encryption(&bucket.name).await;

        // The inspector swallows a cancelled encryption lookup, the run
        // still has to stop.
        if self.cancel.is_cancelled() {
            return Err(InventoryError::Cancelled);
        }

        Ok(InventoryRecord::new(&bucket.name, encryption.as_ref()))
    }
}
