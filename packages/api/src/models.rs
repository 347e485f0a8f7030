//! # Request and response bodies
//!
//! Mirrors the JSON the backend speaks. Response types tolerate missing
//! optional fields; request types leave out `None` fields entirely.
//!
//! | Struct | Endpoint(s) |
//! |--------|-------------|
//! | [`TokenResponse`] | `POST /auth/login` |
//! | [`Credentials`] | `POST /auth/register` (body) |
//! | [`RegisteredUser`] | `POST /auth/register` |
//! | [`Transaction`] / [`NewTransaction`] | `/transactions/` |
//! | [`Summary`] | `GET /transactions/summary` |
//! | [`Export`] | `GET /transactions/export` |
//! | [`Category`] / [`NewCategory`] | `/categories/` |
//! | [`AdminUser`] | `/admin/...` |

use serde::{Deserialize, Serialize};
use store::AccessToken;

/// Only the token is read; `token_type` is always `bearer`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: AccessToken,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Server timestamp, ISO 8601.
    pub date: String,
    /// Signed amount.
    pub amount: f64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    /// Label the backend files the transaction under, e.g. `Income`.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub owner_id: i64,
}

impl Transaction {
    /// Calendar date part of [`date`](Self::date).
    pub fn day(&self) -> &str {
        self.date.get(..10).unwrap_or(self.date.as_str())
    }

    /// Category to display: the resolved name if the backend sent one,
    /// otherwise the raw label.
    pub fn category_label(&self) -> Option<&str> {
        self.category_name.as_deref().or(self.category.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewTransaction {
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Category label, for backends that file transactions by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub net_savings: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub user_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Raw export file.
#[derive(Clone, Debug, PartialEq)]
pub struct Export {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Export {
    pub const DEFAULT_FILENAME: &'static str = "transactions.csv";
}
