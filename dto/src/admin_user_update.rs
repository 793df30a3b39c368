use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Values of the admin user edit form, as they are when the confirmation is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AdminUserUpdate {
    username: String,
    email: String,
    is_staff: bool,
}

impl AdminUserUpdate {
    pub fn new(username: String, email: String, is_staff: bool) -> Self {
        Self {
            username,
            email,
            is_staff,
        }
    }
}
