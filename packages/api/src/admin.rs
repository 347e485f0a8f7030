use reqwest::Method;
use serde_json::json;
use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::AdminUser;

/// `/admin` endpoints. The server answers 403 unless the caller really is an
/// admin, whatever the token payload claims.
pub struct Admin<'a, S> {
    client: &'a ApiClient<S>,
}

impl<'a, S: SessionStore> Admin<'a, S> {
    pub(crate) fn new(client: &'a ApiClient<S>) -> Self {
        Self { client }
    }

    pub async fn users(&self) -> Result<Vec<AdminUser>, ApiError> {
        let request = self.client.request(Method::GET, "/admin/users");
        self.client.send_json(request).await
    }

    pub async fn make_admin(&self, user_id: i64) -> Result<AdminUser, ApiError> {
        self.set_role(&format!("/admin/make-admin/{user_id}")).await
    }

    pub async fn remove_admin(&self, user_id: i64) -> Result<AdminUser, ApiError> {
        self.set_role(&format!("/admin/remove-admin/{user_id}")).await
    }

    async fn set_role(&self, path: &str) -> Result<AdminUser, ApiError> {
        let request = self.client.request(Method::PATCH, path).json(&json!({}));
        self.client.send_json(request).await
    }
}
