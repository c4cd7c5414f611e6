// Easily handle converting from a ListBucketsOutput into our own BucketList
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::{
    BucketDescriptor,
    Buckets,
};

/// Holds the discovered S3 buckets, in listing order.
pub struct BucketList(Buckets);

/// Implement a conversion from `ListBucketsOutput` to `BucketList`.
///
/// Buckets without a name are skipped, a creation date that can't be
/// represented is dropped.
impl From<ListBucketsOutput> for BucketList {
    fn from(output: ListBucketsOutput) -> Self {
        let buckets = output.buckets()
            .iter()
            .filter_map(|bucket| {
                let name = bucket.name()?;

                let creation_date = bucket.creation_date()
                    .and_then(|date| date.to_chrono_utc().ok());

                Some(BucketDescriptor {
                    name:          name.to_owned(),
                    creation_date,
                })
            })
            .collect();

        BucketList(buckets)
    }
}

impl BucketList {
    /// Consume the `BucketList`, returning its `Buckets`.
    pub fn into_buckets(self) -> Buckets {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::primitives::{
        DateTime,
        DateTimeFormat,
    };
    use aws_sdk_s3::types::{
        Bucket,
        Owner,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bucketlist_from() {
        let creation_date = DateTime::from_str(
            "2020-03-12T14:45:00Z",
            DateTimeFormat::DateTime,
        ).unwrap();

        let buckets = vec![
            Bucket::builder()
                .name("z-bucket")
                .creation_date(creation_date)
                .build(),
            Bucket::builder()
                .build(),
            Bucket::builder()
                .name("a-bucket")
                .build(),
        ];

        let owner = Owner::builder()
            .display_name("aws")
            .id("1936a5d8a2b189cda450d1d1d514f3861b3adc2df515")
            .build();

        let output = ListBucketsOutput::builder()
            .set_buckets(Some(buckets))
            .owner(owner)
            .build();

        let bucket_list: BucketList = output.into();
        let buckets = bucket_list.into_buckets();

        let names: Vec<&str> = buckets.iter()
            .map(|b| b.name.as_str())
            .collect();

        // Listing order is kept
        assert_eq!(names, vec!["z-bucket", "a-bucket"]);

        assert_eq!(
            buckets[0].creation_date.map(|d| d.to_rfc3339()),
            Some("2020-03-12T14:45:00+00:00".to_string()),
        );
        assert_eq!(buckets[1].creation_date, None);
    }
}
