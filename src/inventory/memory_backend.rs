// In memory storage backend for exercising the inventory pipeline
use async_trait::async_trait;
use crate::common::{
    AclInfo,
    BackendError,
    BucketDescriptor,
    BucketRequest,
    Buckets,
    EncryptionInfo,
    EncryptionRule,
    Fault,
    GetBucketAcl,
    GetBucketEncryption,
    GetBucketLocation,
    GetBucketLocationRequest,
    ListBuckets,
    ListBucketsRequest,
    Region,
    RegionBinder,
};
use std::sync::{
    Arc,
    Mutex,
};
use tokio_util::sync::CancellationToken;

/// A backend call, along with the region it was sent to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    ListBuckets,
    GetBucketLocation(String),
    GetBucketAcl(String, String),
    GetBucketEncryption(String, String),
}

/// A bucket known to the `MemoryBackend`.
#[derive(Clone, Debug)]
pub struct MemoryBucket {
    pub descriptor: BucketDescriptor,
    pub location:   Result<String, BackendError>,
    pub acl:        Result<AclInfo, BackendError>,
    pub encryption: Result<Option<EncryptionInfo>, BackendError>,
}

impl MemoryBucket {
    /// A bucket in us-east-1 with a readable ACL and no default encryption.
    pub fn new(name: &str) -> Self {
        Self {
            descriptor: BucketDescriptor::new(name),
            location:   Ok(String::new()),
            acl:        Ok(AclInfo::default()),
            encryption: Err(encryption_not_found()),
        }
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = Ok(location.to_owned());
        self
    }

    pub fn location_error(mut self, err: BackendError) -> Self {
        self.location = Err(err);
        self
    }

    pub fn acl_error(mut self, err: BackendError) -> Self {
        self.acl = Err(err);
        self
    }

    pub fn key_id(mut self, key_id: &str) -> Self {
        let rules = vec![
            EncryptionRule::new("aws:kms").with_key_id(key_id),
        ];

        self.encryption = Ok(EncryptionInfo::new(rules));
        self
    }

    pub fn encryption(mut self, encryption: Option<EncryptionInfo>) -> Self {
        self.encryption = Ok(encryption);
        self
    }

    pub fn encryption_error(mut self, err: BackendError) -> Self {
        self.encryption = Err(err);
        self
    }
}

/// The error S3 returns for buckets without default encryption.
pub fn encryption_not_found() -> BackendError {
    BackendError::api(
        "ServerSideEncryptionConfigurationNotFoundError",
        "The server side encryption configuration was not found",
        Fault::Client,
    )
}

#[derive(Debug, Default)]
struct State {
    buckets:    Vec<MemoryBucket>,
    list_error: Option<BackendError>,
    calls:      Vec<Call>,
    cancel_on:  Option<(String, CancellationToken)>,
}

/// A fake S3 holding buckets in memory and recording every call made to it.
///
/// Per bucket calls are answered like S3 does: a handle bound to a region
/// other than the bucket's own gets a `PermanentRedirect` error.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<State>>,
}

impl MemoryBackend {
    pub fn with_bucket(self, bucket: MemoryBucket) -> Self {
        self.state.lock().unwrap().buckets.push(bucket);
        self
    }

    pub fn with_list_error(self, err: BackendError) -> Self {
        self.state.lock().unwrap().list_error = Some(err);
        self
    }

    // Cancel `token` when the encryption of `bucket` is requested.
    pub fn cancel_on_encryption(
        self,
        bucket: &str,
        token:  CancellationToken,
    ) -> Self {
        self.state.lock().unwrap().cancel_on = Some((bucket.to_owned(), token));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn bucket(&self, name: &str) -> Result<MemoryBucket, BackendError> {
        self.state.lock().unwrap()
            .buckets
            .iter()
            .find(|b| b.descriptor.name == name)
            .cloned()
            .ok_or_else(|| {
                BackendError::api(
                    "NoSuchBucket",
                    "The specified bucket does not exist",
                    Fault::Client,
                )
            })
    }

    // The bucket, if `region` is the region it lives in.
    fn bucket_in_region(
        &self,
        name:   &str,
        region: &Region,
    ) -> Result<MemoryBucket, BackendError> {
        let bucket = self.bucket(name)?;

        let location = bucket.location.clone()?;
        let location = Region::from_location_constraint(&location);

        if &location != region {
            return Err(BackendError::api(
                "PermanentRedirect",
                "The bucket you are attempting to access must be addressed using the specified endpoint.",
                Fault::Client,
            ));
        }

        Ok(bucket)
    }
}

#[async_trait]
impl ListBuckets for MemoryBackend {
    async fn list_buckets(
        &self,
        cancel:   &CancellationToken,
        _request: ListBucketsRequest,
    ) -> Result<Buckets, BackendError> {
        self.record(Call::ListBuckets);

        if cancel.is_cancelled() {
            return Err(BackendError::Cancelled);
        }

        let state = self.state.lock().unwrap();

        if let Some(err) = &state.list_error {
            return Err(err.clone());
        }

        let buckets = state.buckets
            .iter()
            .map(|b| b.descriptor.clone())
            .collect();

        Ok(buckets)
    }
}

#[async_trait]
impl GetBucketLocation for MemoryBackend {
    async fn get_bucket_location(
        &self,
        cancel:  &CancellationToken,
        request: GetBucketLocationRequest,
    ) -> Result<String, BackendError> {
        self.record(Call::GetBucketLocation(request.bucket.clone()));

        if cancel.is_cancelled() {
            return Err(BackendError::Cancelled);
        }

        self.bucket(&request.bucket)?.location
    }
}

impl RegionBinder for MemoryBackend {
    type Bound = MemoryBinding;

    fn bind(&self, region: &Region) -> Self::Bound {
        MemoryBinding {
            backend: self.clone(),
            region:  region.to_owned(),
        }
    }
}

/// A `MemoryBackend` handle bound to a single region.
#[derive(Clone, Debug)]
pub struct MemoryBinding {
    backend: MemoryBackend,
    region:  Region,
}

#[async_trait]
impl GetBucketAcl for MemoryBinding {
    async fn get_bucket_acl(
        &self,
        cancel:  &CancellationToken,
        request: BucketRequest,
    ) -> Result<AclInfo, BackendError> {
        self.backend.record(Call::GetBucketAcl(
            request.bucket.clone(),
            self.region.name().to_owned(),
        ));

        if cancel.is_cancelled() {
            return Err(BackendError::Cancelled);
        }

        self.backend.bucket_in_region(&request.bucket, &self.region)?.acl
    }
}

#[async_trait]
impl GetBucketEncryption for MemoryBinding {
    async fn get_bucket_encryption(
        &self,
        cancel:  &CancellationToken,
        request: BucketRequest,
    ) -> Result<Option<EncryptionInfo>, BackendError> {
        self.backend.record(Call::GetBucketEncryption(
            request.bucket.clone(),
            self.region.name().to_owned(),
        ));

        let cancel_on = self.backend.state.lock().unwrap().cancel_on.clone();

        if let Some((bucket, token)) = cancel_on {
            if bucket == request.bucket {
                token.cancel();
            }
        }

        if cancel.is_cancelled() {
            return Err(BackendError::Cancelled);
        }

        self.backend.bucket_in_region(&request.bucket, &self.region)?.encryption
    }
}
