//! # API crate: typed REST client for the finance tracker backend
//!
//! Every network call the web frontend makes goes through [`ApiClient`]. The
//! client owns the [`Session`] (the explicit session context holding the bearer
//! token) and decorates each outgoing request with it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Login, registration, logout and the advisory role queries |
//! | [`claims`] | Unverified decoding of the token payload into a [`RoleHint`] |
//! | [`client`] | [`ApiClient`], the outbound request decorator and status handling |
//! | [`config`] | [`ClientConfig`] (`base_url`, session key), TOML or build-time env |
//! | [`guard`] | [`Access`] levels and the synchronous route decision |
//! | [`session`] | [`Session`], the token context shared by the client and views |
//! | [`transactions`], [`categories`], [`admin`] | Domain clients over fixed REST paths |
//! | [`models`] | Request/response bodies |
//!
//! ## Endpoints
//!
//! | Method | Path | Client call |
//! |--------|------|-------------|
//! | POST | `/auth/login` | [`Auth::login`] (form-encoded) |
//! | POST | `/auth/register` | [`Auth::register`] (JSON) |
//! | GET/POST | `/categories/` | [`Categories::list`] / [`Categories::create`] |
//! | DELETE | `/categories/{id}` | [`Categories::delete`] |
//! | GET/POST | `/transactions/` | [`Transactions::list`] / [`Transactions::create`] |
//! | DELETE | `/transactions/{id}` | [`Transactions::delete`] |
//! | GET | `/transactions/export` | [`Transactions::export`] |
//! | GET | `/transactions/summary` | [`Transactions::summary`] |
//! | GET | `/admin/users` | [`Admin::users`] |
//! | PATCH | `/admin/make-admin/{id}`, `/admin/remove-admin/{id}` | [`Admin::make_admin`] / [`Admin::remove_admin`] |
//!
//! Nothing here retries. A failed request comes back as an [`ApiError`] and the
//! calling view decides what to tell the user.

pub mod admin;
pub mod auth;
pub mod categories;
pub mod claims;
pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod session;
pub mod transactions;

pub use admin::Admin;
pub use auth::Auth;
pub use categories::Categories;
pub use claims::{Claims, RoleHint, TokenError};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use guard::Access;
pub use models::{
    AdminUser, Category, Export, NewCategory, NewTransaction, RegisteredUser, Summary,
    TokenResponse, Transaction,
};
pub use session::Session;
pub use transactions::Transactions;

pub use store::{AccessToken, SessionStore};
