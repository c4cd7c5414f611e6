// Imports all of the components needed for s3::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Conversion from `ListBucketsOutput` to our own bucket list.
mod bucket_list;

/// Conversions from ACL and encryption outputs.
mod bucket_settings;

/// S3 `Client`.
mod client;

/// Conversion from AWS SDK errors to `BackendError`.
mod error;

/// Implementation of the storage client adapter traits for our S3 `Client`.
mod storage_client;

pub use client::*;
