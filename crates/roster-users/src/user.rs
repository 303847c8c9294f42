//! The user record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use roster_core::{Entity, Props, Searchable, SortValue};

use crate::validation::{
    NAME_MAX_LEN, PASSWORD_MAX_LEN, ValidationErrors, check_email, check_text,
};

/// A stored user.
pub type User = Entity<UserProps>;

/// User attributes. `password` always holds a hash once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProps {
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl UserProps {
    /// New props stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Check every field rule, collecting all failures.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_text(&mut errors, "name", &self.name, NAME_MAX_LEN);
        check_email(&mut errors, &self.email);
        check_text(&mut errors, "password", &self.password, PASSWORD_MAX_LEN);
        errors.into_result()
    }

    /// Validate and wrap in a new record with a generated id.
    pub fn into_user(self) -> Result<User, ValidationErrors> {
        self.validate()?;
        Ok(Entity::new(self))
    }

    /// Change the name. Nothing changes if the result would be invalid.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), ValidationErrors> {
        let candidate = Self {
            name: name.into(),
            ..self.clone()
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// Replace the stored password hash. Nothing changes if invalid.
    pub fn change_password(&mut self, hash: impl Into<String>) -> Result<(), ValidationErrors> {
        let candidate = Self {
            password: hash.into(),
            ..self.clone()
        };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}

impl Props for UserProps {
    const KIND: &'static str = "User";
}

impl Searchable for UserProps {
    const SORTABLE_FIELDS: &'static [&'static str] = &["name", "createdAt"];

    fn filter_field(&self) -> &str {
        &self.name
    }

    fn sort_value(&self, field: &str) -> Option<SortValue<'_>> {
        match field {
            "name" => Some(SortValue::from(self.name.as_str())),
            "createdAt" => Some(SortValue::from(self.created_at)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn props() -> UserProps {
        UserProps::new("Ana", "ana@example.com", "secret")
    }

    #[test]
    fn created_at_defaults_to_now() {
        let before = Utc::now();
        let props = props();
        assert!(props.created_at >= before);
        assert!(props.created_at <= Utc::now());
    }

    #[test]
    fn valid_props_pass() {
        assert!(props().validate().is_ok());
    }

    #[test]
    fn every_failing_field_is_reported() {
        let props = UserProps::new("", "nope", "x".repeat(101));
        let errors = props.validate().unwrap_err();
        assert_eq!(errors.field("name").len(), 1);
        assert_eq!(errors.field("email"), ["email must be an email"]);
        assert_eq!(errors.field("password").len(), 1);
    }

    #[test]
    fn limits_are_inclusive() {
        let email = format!("{}@a.com", "a".repeat(249));
        assert_eq!(email.len(), 255);
        let props = UserProps::new("n".repeat(255), email, "p".repeat(100));
        assert!(props.validate().is_ok());

        let props = UserProps::new("n".repeat(256), "a@a.com", "p");
        assert!(props.validate().is_err());
    }

    #[test]
    fn rename_validates_before_changing() {
        let mut props = props();
        assert!(props.rename("").is_err());
        assert_eq!(props.name, "Ana");

        props.rename("Bia").unwrap();
        assert_eq!(props.name, "Bia");
    }

    #[test]
    fn change_password_validates_before_changing() {
        let mut props = props();
        assert!(props.change_password("").is_err());
        assert_eq!(props.password, "secret");

        props.change_password("hash").unwrap();
        assert_eq!(props.password, "hash");
    }

    #[test]
    fn snapshot_uses_camel_case() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let user = Entity::with_id(props().with_created_at(at), "u1");
        assert_eq!(
            user.to_snapshot().unwrap(),
            json!({
                "id": "u1",
                "name": "Ana",
                "email": "ana@example.com",
                "password": "secret",
                "createdAt": "2024-05-01T12:00:00Z",
            })
        );
    }

    #[test]
    fn sort_values() {
        let props = props();
        assert_eq!(props.sort_value("name"), Some(SortValue::Text("Ana")));
        assert!(matches!(props.sort_value("createdAt"), Some(SortValue::Timestamp(_))));
        assert_eq!(props.sort_value("email"), None);
        assert_eq!(UserProps::KIND, "User");
    }
}
