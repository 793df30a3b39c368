use crate::admin_user_update::AdminUserUpdate;
use derive_getters::Getters;
use serde::Serialize;

/// JSON body posted to confirm an action.
/// Only the fields the action needs are serialized, next to the password.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct ConfirmationPayload {
    password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_email: Option<String>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    user: Option<AdminUserUpdate>,
}

impl ConfirmationPayload {
    pub fn new(password: String) -> Self {
        Self {
            password,
            subscription_id: None,
            new_email: None,
            user: None,
        }
    }

    pub fn with_subscription_id(mut self, subscription_id: String) -> Self {
        self.subscription_id = Some(subscription_id);
        self
    }

    pub fn with_new_email(mut self, new_email: String) -> Self {
        self.new_email = Some(new_email);
        self
    }

    pub fn with_user(mut self, user: AdminUserUpdate) -> Self {
        self.user = Some(user);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_serialize_password_only() {
        let payload = ConfirmationPayload::new("secret".to_owned());

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(json!({"password": "secret"}), value);
    }

    #[test]
    fn should_serialize_subscription_id() {
        let payload = ConfirmationPayload::new("secret".to_owned())
            .with_subscription_id("sub_42".to_owned());

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json!({"password": "secret", "subscription_id": "sub_42"}),
            value
        );
    }

    #[test]
    fn should_serialize_new_email() {
        let payload = ConfirmationPayload::new("secret".to_owned())
            .with_new_email("new@address.com".to_owned());

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json!({"password": "secret", "new_email": "new@address.com"}),
            value
        );
    }

    #[test]
    fn should_flatten_admin_user_fields() {
        let user = AdminUserUpdate::new("jane".to_owned(), "jane@address.com".to_owned(), true);
        let payload = ConfirmationPayload::new("secret".to_owned()).with_user(user);

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json!({
                "password": "secret",
                "username": "jane",
                "email": "jane@address.com",
                "is_staff": true,
            }),
            value
        );
    }
}
