use crate::descriptor::ConfiguredUrl;
use derive_getters::Getters;
use serde::Deserialize;

const DEFAULT_DELETE_ACCOUNT_URL: &str = "/accounts/secure_delete_account/";
const DEFAULT_DELETE_ADDRESS_BASE_URL: &str = "/accounts/secure_delete_address/";
const DEFAULT_CANCEL_SUBSCRIPTION_URL: &str = "/orders/cancel-subscription/";
const DEFAULT_CHANGE_EMAIL_URL: &str = "/accounts/change_email/";
const DEFAULT_ORPHANED_BULK_DELETE_URL: &str = "/dashboard/orphaned_products/";

/// Configuration rendered by the server into the page.
///
/// In the browser it is read from `window.GLOBALS`:
/// `{"csrfToken": "...", "urls": {"deleteAccount": "...", ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default)]
    csrf_token: String,
    #[serde(default)]
    urls: Endpoints,
}

impl PageConfig {
    pub fn new(csrf_token: String, urls: Endpoints) -> Self {
        Self { csrf_token, urls }
    }
}

/// URLs which depend on the deployment. Any missing entry falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoints {
    delete_account: String,
    delete_address_base: String,
    cancel_subscription: String,
    change_email: String,
    orphaned_bulk_delete: String,
}

impl Endpoints {
    pub fn get(&self, url: ConfiguredUrl) -> &str {
        match url {
            ConfiguredUrl::DeleteAccount => &self.delete_account,
            ConfiguredUrl::DeleteAddressBase => &self.delete_address_base,
            ConfiguredUrl::CancelSubscription => &self.cancel_subscription,
            ConfiguredUrl::ChangeEmail => &self.change_email,
            ConfiguredUrl::OrphanedBulkDelete => &self.orphaned_bulk_delete,
        }
    }

    pub fn set(&mut self, url: ConfiguredUrl, value: String) {
        let field = match url {
            ConfiguredUrl::DeleteAccount => &mut self.delete_account,
            ConfiguredUrl::DeleteAddressBase => &mut self.delete_address_base,
            ConfiguredUrl::CancelSubscription => &mut self.cancel_subscription,
            ConfiguredUrl::ChangeEmail => &mut self.change_email,
            ConfiguredUrl::OrphanedBulkDelete => &mut self.orphaned_bulk_delete,
        };
        *field = value;
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            delete_account: DEFAULT_DELETE_ACCOUNT_URL.to_owned(),
            delete_address_base: DEFAULT_DELETE_ADDRESS_BASE_URL.to_owned(),
            cancel_subscription: DEFAULT_CANCEL_SUBSCRIPTION_URL.to_owned(),
            change_email: DEFAULT_CHANGE_EMAIL_URL.to_owned(),
            orphaned_bulk_delete: DEFAULT_ORPHANED_BULK_DELETE_URL.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_page_globals() {
        let globals = r#"{
            "csrfToken": "token",
            "urls": {
                "deleteAccount": "/users/delete/",
                "deleteAddressBase": "/users/address/delete/",
                "cancelSubscription": "/subscriptions/cancel/",
                "changeEmail": "/users/email/",
                "orphanedBulkDelete": "/admin/orphans/"
            }
        }"#;

        let config: PageConfig = serde_json::from_str(globals).unwrap();

        assert_eq!("token", config.csrf_token().as_str());
        assert_eq!("/users/delete/", config.urls().delete_account().as_str());
        assert_eq!(
            "/users/address/delete/",
            config.urls().get(ConfiguredUrl::DeleteAddressBase)
        );
        assert_eq!("/subscriptions/cancel/", config.urls().cancel_subscription().as_str());
        assert_eq!("/users/email/", config.urls().change_email().as_str());
        assert_eq!("/admin/orphans/", config.urls().orphaned_bulk_delete().as_str());
    }

    #[test]
    fn should_fill_missing_urls_with_defaults() {
        let globals = r#"{"csrfToken": "token", "urls": {"deleteAccount": "/users/delete/"}}"#;

        let config: PageConfig = serde_json::from_str(globals).unwrap();

        assert_eq!("/users/delete/", config.urls().delete_account().as_str());
        assert_eq!(
            DEFAULT_CHANGE_EMAIL_URL,
            config.urls().get(ConfiguredUrl::ChangeEmail)
        );
    }

    #[test]
    fn should_deserialize_empty_globals() {
        let config: PageConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(PageConfig::default(), config);
    }

    #[test]
    fn should_override_url() {
        let mut endpoints = Endpoints::default();
        endpoints.set(ConfiguredUrl::OrphanedBulkDelete, "/orphans/".to_owned());

        assert_eq!("/orphans/", endpoints.get(ConfiguredUrl::OrphanedBulkDelete));
    }
}
