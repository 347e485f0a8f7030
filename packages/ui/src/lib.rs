//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::{make_client, make_client_with, AppClient, AppStore};

mod auth;
pub use auth::{use_api, use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

pub mod notice;
pub use notice::{alert, report_and_alert, report_error};

pub mod view_list;
pub use view_list::{Identified, LoadState, ViewList};

mod detached;
pub use detached::{set_live, spawn_detached, try_claim, update_live};

mod download;
pub use download::save_export;
