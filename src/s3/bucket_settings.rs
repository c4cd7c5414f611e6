// Conversions from S3 ACL and encryption outputs to our own types
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::operation::get_bucket_acl::GetBucketAclOutput;
use aws_sdk_s3::operation::get_bucket_encryption::GetBucketEncryptionOutput;
use crate::common::{
    AclInfo,
    EncryptionInfo,
    EncryptionRule,
};

/// Return the `EncryptionInfo` described by a `GetBucketEncryption` output.
///
/// Rules without an `ApplyServerSideEncryptionByDefault` block are skipped,
/// if no rules remain there's no default encryption to report.
pub fn encryption_info(
    output: &GetBucketEncryptionOutput,
) -> Option<EncryptionInfo> {
    let configuration = output.server_side_encryption_configuration()?;

    let rules = configuration.rules()
        .iter()
        .filter_map(|rule| {
            let default = rule.apply_server_side_encryption_by_default()?;

            Some(EncryptionRule {
                algorithm:          default.sse_algorithm().as_str().to_owned(),
                kms_master_key_id:  default.kms_master_key_id()
                    .map(ToOwned::to_owned),
                bucket_key_enabled: rule.bucket_key_enabled(),
            })
        })
        .collect();

    EncryptionInfo::new(rules)
}

/// Implement a conversion from `GetBucketAclOutput` to `AclInfo`.
impl From<GetBucketAclOutput> for AclInfo {
    fn from(output: GetBucketAclOutput) -> Self {
        Self {
            owner_id: output.owner()
                .and_then(|owner| owner.id())
                .map(ToOwned::to_owned),
            grants:   output.grants().len(),
        }
    }
}
