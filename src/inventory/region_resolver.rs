// Resolves the region of a bucket and binds a client to it
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    GetBucketLocation,
    GetBucketLocationRequest,
    InventoryError,
    Region,
    RegionBinder,
};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A client handle bound to the region of one bucket.
///
/// This is handed out per bucket and dropped once that bucket has been
/// inspected, buckets never share a binding.
#[derive(Debug)]
pub struct RegionBinding<B> {
    region: Region,
    handle: B,
}

impl<B> RegionBinding<B> {
    /// The region that `handle` sends requests to.
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The region bound client handle.
    pub fn handle(&self) -> &B {
        &self.handle
    }
}

#[cfg(test)]
impl<B> RegionBinding<B> {
    // Bindings that didn't come from a location lookup.
    pub fn for_tests(region: Region, handle: B) -> Self {
        Self {
            region,
            handle,
        }
    }
}

/// Looks up bucket locations using the home region client.
pub struct RegionResolver<'a, C> {
    client: &'a C,
    cancel: &'a CancellationToken,
}

impl<'a, C> RegionResolver<'a, C>
where
    C: GetBucketLocation + RegionBinder + Sync,
{
    /// Return a new `RegionResolver` querying `client`.
    pub fn new(client: &'a C, cancel: &'a CancellationToken) -> Self {
        Self {
            client,
            cancel,
        }
    }

    /// Return a new `RegionBinding` for the region `bucket` lives in.
    pub async fn resolve_region(
        &self,
        bucket: &str,
    ) -> Result<RegionBinding<C::Bound>, InventoryError> {
        debug!("resolve_region: Retrieving location for '{}'", bucket);

        let request = GetBucketLocationRequest::new(bucket);

        let location = self.client.get_bucket_location(self.cancel, request)
            .await
            .map_err(|source| {
                InventoryError::LocationLookup {
                    bucket: bucket.to_owned(),
                    source,
                }
            })?;

        let region = Region::from_location_constraint(&location);
        let handle = self.client.bind(&region);

        debug!("resolve_region: '{}' is in '{}'", bucket, region);

        Ok(RegionBinding {
            region,
            handle,
        })
    }
}
