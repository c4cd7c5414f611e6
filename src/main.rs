// s3inv: A tool for reporting the default encryption of your AWS S3 buckets.
#![forbid(unsafe_code)]
use anyhow::{
    Context,
    Result,
};
use tokio_util::sync::CancellationToken;
use tracing::{
    debug,
    warn,
};
use tracing_subscriber::EnvFilter;

mod cli;
mod common;
mod inventory;
mod s3;

use inventory::Inventory;

// Log level used when RUST_LOG isn't set. Encryption lookup failures are
// logged at warn.
const DEFAULT_LOG_FILTER: &str = "warn";

// Cancel the inventory when we're interrupted.
fn cancel_on_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling inventory");

            cancel.cancel();
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let matches = cli::parse_args();
    let config  = cli::client_config(&matches);

    debug!("Client config: {:?}", config);

    let client = s3::Client::new(config)
        .await
        .context("Failed to configure the S3 client")?;

    let cancel = CancellationToken::new();
    cancel_on_ctrl_c(cancel.clone());

    let report = Inventory::new(&client, &cancel)
        .run()
        .await
        .context("Inventory failed")?;

    println!("Buckets:\n");

    for record in report {
        println!("{}", record);
    }

    Ok(())
}
