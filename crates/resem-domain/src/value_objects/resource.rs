//! Resource record value object

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A structured record describing an infrastructure resource, as produced
/// by the external feed. Immutable once read.
///
/// `attributes` is expected to be a JSON object mapping attribute names to
/// scalar or nested values; embedding generation treats missing and null
/// values as defaults, so a sparse object is always acceptable.
///
/// ## Example
///
/// ```rust
/// use resem_domain::ResourceRecord;
/// use serde_json::json;
///
/// let record = ResourceRecord::new(
///     "ec2_instance",
///     "i-0abc1234",
///     json!({ "instance_type": "t3.micro", "team": "backend" }),
/// );
/// assert_eq!(record.resource_type, "ec2_instance");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceRecord {
    /// Resource category tag (e.g., "ec2_instance", "s3_bucket")
    pub resource_type: String,
    /// Stable identifier within the resource type
    pub resource_id: String,
    /// Attribute mapping describing the resource
    pub attributes: Value,
}

impl ResourceRecord {
    /// Create a new resource record
    pub fn new<T: Into<String>, I: Into<String>>(
        resource_type: T,
        resource_id: I,
        attributes: Value,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
            attributes,
        }
    }
}
