use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::Method;
use store::SessionStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Export, NewTransaction, Summary, Transaction};

/// `/transactions` endpoints.
pub struct Transactions<'a, S> {
    client: &'a ApiClient<S>,
}

impl<'a, S: SessionStore> Transactions<'a, S> {
    pub(crate) fn new(client: &'a ApiClient<S>) -> Self {
        Self { client }
    }

    /// All transactions of the current user, in server order.
    pub async fn list(&self) -> Result<Vec<Transaction>, ApiError> {
        let request = self.client.request(Method::GET, "/transactions/");
        self.client.send_json(request).await
    }

    pub async fn create(&self, txn: &NewTransaction) -> Result<Transaction, ApiError> {
        let request = self
            .client
            .request(Method::POST, "/transactions/")
            .json(txn);
        self.client.send_json(request).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/transactions/{id}"));
        self.client.send_unit(request).await
    }

    /// Server-computed totals.
    pub async fn summary(&self) -> Result<Summary, ApiError> {
        let request = self.client.request(Method::GET, "/transactions/summary");
        self.client.send_json(request).await
    }

    /// Download the export file as raw bytes.
    pub async fn export(&self) -> Result<Export, ApiError> {
        let request = self.client.request(Method::GET, "/transactions/export");
        let response = self.client.send(request).await?;

        let headers = response.headers();
        let filename = headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| Export::DEFAULT_FILENAME.to_string());
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?.to_vec();
        Ok(Export {
            filename,
            content_type,
            bytes,
        })
    }
}

/// Pull `filename` out of a `Content-Disposition` header value.
fn filename_from_disposition(value: &str) -> Option<String> {
    value.split(';').find_map(|part| {
        let (key, raw) = part.trim().split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("filename") {
            return None;
        }
        let name = raw.trim().trim_matches('"');
        // Strip any directory part a server might send.
        let name = name.rsplit(['/', '\\']).next().unwrap_or(name);
        (!name.is_empty()).then(|| name.to_string())
    })
}
