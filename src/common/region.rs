// Handles region things
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use std::env;
use std::fmt;
use tracing::debug;

/// The region that S3 reports buckets with an empty location constraint in.
pub const DEFAULT_REGION: &str = "us-east-1";

// Buckets created with the legacy `EU` constraint live here.
const LEGACY_EU_REGION: &str = "eu-west-1";

/// An optional AWS region.
///
/// An unset region defers to the usual AWS SDK region provider chain.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Region {
    region: Option<region::Region>,
}

impl Region {
    /// Returns a `Region` taken from the environment, if one is set there.
    pub fn new() -> Self {
        // By default, we try to get a region from the environment, this might
        // be overridden later depending on CLI options.
        let possibilities = vec![
            env::var("AWS_REGION"),
            env::var("AWS_DEFAULT_REGION"),
        ];

        let region = possibilities
            .iter()
            .find_map(|region| region.as_ref().ok())
            .map(|region| region::Region::new(region.to_owned()));

        debug!("AWS_REGION in environment is: {:?}", region);

        Self {
            region,
        }
    }

    /// Returns the `Region` that a bucket's location constraint refers to.
    ///
    /// S3 encodes `us-east-1` as an empty location constraint, and very old
    /// buckets in `eu-west-1` may report the legacy `EU` constraint.
    pub fn from_location_constraint(constraint: &str) -> Self {
        let region = match constraint {
            ""   => DEFAULT_REGION,
            "EU" => LEGACY_EU_REGION,
            _    => constraint,
        };

        debug!(
            "from_location_constraint: '{}' resolves to '{}'",
            constraint,
            region,
        );

        Self::default().set_region(region)
    }

    /// Returns the region name.
    pub fn name(&self) -> &str {
        match &self.region {
            Some(region) => region.as_ref(),
            None         => "default",
        }
    }

    /// Returns the AWS SDK region, if one is set.
    pub fn aws_region(&self) -> Option<region::Region> {
        self.region.to_owned()
    }

    /// Set the region name.
    pub fn set_region(mut self, region: &str) -> Self {
        debug!("Region set to: {:?}", region);

        let region = region::Region::new(region.to_string());
        self.region = Some(region);
        self
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ProvideRegion for Region {
    // Takes our region string and returns a proper AWS Region, this should
    // allow us to pass our Region into AWS SDK functions expecting an AWS
    // Region.
    fn region(&self) -> future::ProvideRegion<'_> {
        future::ProvideRegion::ready(self.region.to_owned())
    }
}
