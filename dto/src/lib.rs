pub mod action_response;
pub mod admin_user_update;
pub mod confirmation_payload;
