//! Generic identity-bearing record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EntityId;
use crate::Result;
use crate::error::InvalidInputError;

/// A domain record with a stable identifier.
///
/// `Entity` owns its props exclusively and never inspects them. The id is
/// fixed at construction: generated when absent, kept verbatim otherwise.
/// There is no equality operator; compare snapshots instead.
///
/// Props are flattened next to `id` when serialized, so `P` must serialize
/// as an object without its own `id` key.
///
/// # Example
///
/// ```
/// use roster_core::Entity;
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Tag {
///     label: String,
/// }
///
/// let tag = Entity::with_id(Tag { label: "rust".into() }, "tag-1");
/// assert_eq!(tag.to_snapshot().unwrap(), json!({ "id": "tag-1", "label": "rust" }));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity<P> {
    id: EntityId,
    #[serde(flatten)]
    props: P,
}

impl<P> Entity<P> {
    /// Create a record with a freshly generated id.
    pub fn new(props: P) -> Self {
        Self {
            id: EntityId::generate(),
            props,
        }
    }

    /// Create a record with a caller-supplied id.
    pub fn with_id(props: P, id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            props,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    /// Mutable access for domain update operations. The id stays untouched.
    pub fn props_mut(&mut self) -> &mut P {
        &mut self.props
    }

    pub fn into_props(self) -> P {
        self.props
    }

    pub fn into_parts(self) -> (EntityId, P) {
        (self.id, self.props)
    }
}

impl<P: Serialize> Entity<P> {
    /// Flatten the record into `{ "id": ..., ...props }`.
    ///
    /// # Errors
    ///
    /// Returns an error if `P` does not serialize as a JSON object.
    pub fn to_snapshot(&self) -> Result<Value> {
        let value = serde_json::to_value(self).map_err(|e| InvalidInputError::Snapshot {
            reason: e.to_string(),
        })?;

        if !value.is_object() {
            return Err(InvalidInputError::Snapshot {
                reason: "props must serialize as an object".to_string(),
            }
            .into());
        }

        Ok(value)
    }
}
