// Bucket default encryption and ACL payloads
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// A single default encryption rule of a bucket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncryptionRule {
    /// Server side encryption algorithm, eg. `AES256` or `aws:kms`.
    pub algorithm:          String,

    /// KMS key used for `aws:kms` encryption, if any.
    pub kms_master_key_id:  Option<String>,

    /// Whether an S3 Bucket Key is used for SSE-KMS.
    pub bucket_key_enabled: Option<bool>,
}

impl EncryptionRule {
    /// Return a new `EncryptionRule` using `algorithm` and no key.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm:          algorithm.into(),
            kms_master_key_id:  None,
            bucket_key_enabled: None,
        }
    }

    /// Set the KMS key ID of the rule.
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.kms_master_key_id = Some(key_id.into());
        self
    }
}

/// Default encryption configuration of a bucket.
///
/// This always holds at least one rule, the first of which is the default.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncryptionInfo {
    rules: Vec<EncryptionRule>,
}

impl EncryptionInfo {
    /// Returns `EncryptionInfo` for the given `rules`, or `None` if there are
    /// no rules.
    pub fn new(rules: Vec<EncryptionRule>) -> Option<Self> {
        if rules.is_empty() {
            return None;
        }

        Some(Self {
            rules,
        })
    }

    /// Returns the default encryption rule.
    pub fn default_rule(&self) -> &EncryptionRule {
        // Construction guarantees at least one rule.
        &self.rules[0]
    }

    /// Returns the KMS key ID of the default rule, if it has one.
    pub fn default_key_id(&self) -> Option<&str> {
        self.default_rule().kms_master_key_id.as_deref()
    }

    /// Returns all rules in the order the backend returned them.
    pub fn rules(&self) -> &[EncryptionRule] {
        &self.rules
    }
}

/// Access control list of a bucket.
///
/// This is only fetched to confirm that the ACL is readable, so we keep a
/// small summary rather than the whole grant list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AclInfo {
    /// Canonical ID of the bucket owner.
    pub owner_id: Option<String>,

    /// Number of grants in the ACL.
    pub grants:   usize,
}
