//! Flat user shape returned by use cases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::User;

/// Every user field, including the password hash.
///
/// Presentation layers decide what to hide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOutput {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserOutput {
    fn from(user: &User) -> Self {
        let props = user.props();
        Self {
            id: user.id().to_string(),
            name: props.name.clone(),
            email: props.email.clone(),
            password: props.password.clone(),
            created_at: props.created_at,
        }
    }
}

impl From<User> for UserOutput {
    fn from(user: User) -> Self {
        let (id, props) = user.into_parts();
        Self {
            id: id.into(),
            name: props.name,
            email: props.email,
            password: props.password,
            created_at: props.created_at,
        }
    }
}
