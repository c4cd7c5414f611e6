// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    Context,
    Result,
};
use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::config::retry::RetryConfig;
use crate::common::{
    BackendError,
    ClientConfig,
    Region,
    DEFAULT_REGION,
};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// The S3 `Client`.
#[derive(Clone, Debug)]
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,

    /// `Region` that requests are sent to.
    pub region: Region,
}

impl Client {
    /// Return a new S3 `Client` with the given `ClientConfig`.
    ///
    /// This fails if no credentials can be loaded, before any request is
    /// sent.
    pub async fn new(config: ClientConfig) -> Result<Self> {
        let region = config.region;

        debug!("new: Creating S3Client in region '{}'", region.name());

        let region_provider = RegionProviderChain::first_try(region)
            .or_default_provider()
            .or_else(DEFAULT_REGION);

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider);

        if let Some(profile) = config.profile.as_deref() {
            debug!("new: Using profile '{}'", profile);

            loader = loader.profile_name(profile);
        }

        if let Some(endpoint) = config.endpoint.as_deref() {
            debug!("new: Using custom endpoint '{}'", endpoint);

            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        let credentials = sdk_config.credentials_provider()
            .context("No AWS credentials provider configured")?;

        credentials.provide_credentials()
            .await
            .context("Failed to load AWS credentials")?;

        let region = match sdk_config.region() {
            Some(region) => Region::default().set_region(region.as_ref()),
            None         => Region::default().set_region(DEFAULT_REGION),
        };

        // S3 compatible services rarely support virtual hosted buckets.
        // Every call is a single attempt, failures are handled by the caller.
        let s3_config = S3ConfigBuilder::from(&sdk_config)
            .force_path_style(config.endpoint.is_some())
            .retry_config(RetryConfig::disabled())
            .build();

        Ok(Self {
            client: S3Client::from_conf(s3_config),
            region,
        })
    }

    /// Return a new `Client` with the same configuration, sending requests to
    /// `region`.
    ///
    /// The existing client is left untouched.
    pub fn with_region(&self, region: &Region) -> Self {
        debug!(
            "with_region: Creating S3Client in region '{}'",
            region.name(),
        );

        let conf = self.client.config()
            .to_builder()
            .region(region.aws_region())
            .build();

        Self {
            client: S3Client::from_conf(conf),
            region: region.to_owned(),
        }
    }
}

/// Run `future`, giving up with `BackendError::Cancelled` if `cancel` fires
/// first.
pub async fn cancellable<F, T>(
    cancel: &CancellationToken,
    future: F,
) -> Result<T, BackendError>
where
    F: Future<Output = Result<T, BackendError>>,
{
    tokio::select! {
        biased;

        _      = cancel.cancelled() => Err(BackendError::Cancelled),
        result = future             => result,
    }
}
