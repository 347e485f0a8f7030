use reqwest::Method;
use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Category, NewCategory};

/// `/categories` endpoints.
pub struct Categories<'a, S> {
    client: &'a ApiClient<S>,
}

impl<'a, S: SessionStore> Categories<'a, S> {
    pub(crate) fn new(client: &'a ApiClient<S>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let request = self.client.request(Method::GET, "/categories/");
        self.client.send_json(request).await
    }

    pub async fn create(&self, category: &NewCategory) -> Result<Category, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/categories/")
            .json(category);
        self.client.send_json(request).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/categories/{id}"));
        self.client.send_unit(request).await
    }
}
