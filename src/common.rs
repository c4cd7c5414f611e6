// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
mod client_config;
mod encryption;
mod error;
mod inventory_record;
mod region;
mod storage_client;

pub use bucket::*;
pub use client_config::*;
pub use encryption::*;
pub use error::*;
pub use inventory_record::*;
pub use region::*;
pub use storage_client::*;
