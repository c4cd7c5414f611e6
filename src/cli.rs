// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::{
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgAction,
    ArgMatches,
    Command,
};
use crate::common::{
    ClientConfig,
    Region,
};
use tracing::debug;

// Ensures that the endpoint we're given looks like a URL.
fn is_valid_endpoint(s: &str) -> Result<String, String> {
    if s.starts_with("http://") || s.starts_with("https://") {
        Ok(s.to_string())
    }
    else {
        Err("Endpoint must start with http:// or https://".into())
    }
}

// Create the clap app
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("ENDPOINT")
                .env("S3INV_ENDPOINT")
                .hide_env_values(true)
                .long("endpoint")
                .short('e')
                .value_name("URL")
                .help("Set a custom endpoint for S3 compatible services.")
                .action(ArgAction::Set)
                .value_parser(is_valid_endpoint)
        )
        .arg(
            Arg::new("PROFILE")
                .env("AWS_PROFILE")
                .hide_env_values(true)
                .long("profile")
                .short('p')
                .value_name("PROFILE")
                .help("Load credentials from the given shared config profile.")
                .action(ArgAction::Set)
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to list buckets in.")
                .action(ArgAction::Set)
        )
}

/// Parse the command line arguments.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}

/// Build a `ClientConfig` from the parsed arguments.
pub fn client_config(matches: &ArgMatches) -> ClientConfig {
    let region = match matches.get_one::<String>("REGION") {
        Some(region) => Region::new().set_region(region),
        None         => Region::new(),
    };

    ClientConfig {
        endpoint: matches.get_one::<String>("ENDPOINT").cloned(),
        profile:  matches.get_one::<String>("PROFILE").cloned(),
        region,
    }
}
