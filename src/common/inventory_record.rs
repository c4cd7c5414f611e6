// Per bucket output of an inventory run
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::fmt;
use super::EncryptionInfo;

// Printed in place of a key ID when a bucket has none.
const NO_KEY_ID: &str = "none";

/// The inventory result for a single bucket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InventoryRecord {
    /// Name of the bucket.
    pub name:   String,

    /// KMS key ID of the bucket's default encryption rule.
    ///
    /// `None` if the bucket has no default encryption, the rule has no key,
    /// or the encryption lookup failed.
    pub key_id: Option<String>,
}

impl InventoryRecord {
    /// Build a record for `name` from its encryption lookup result.
    pub fn new(name: &str, encryption: Option<&EncryptionInfo>) -> Self {
        let key_id = encryption
            .and_then(|info| info.default_key_id())
            .map(ToOwned::to_owned);

        Self {
            name: name.to_owned(),
            key_id,
        }
    }
}

impl fmt::Display for InventoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key_id = self.key_id.as_deref().unwrap_or(NO_KEY_ID);

        write!(f, "Bucket: {}\tKeyID: {}", self.name, key_id)
    }
}

/// The inventory of every listed bucket, in listing order.
pub type Report = Vec<InventoryRecord>;
