//! Route guards, applied as router layouts.
//!
//! The check runs during render, before any child route is built, and needs no
//! network round-trip. It reads the stored token only, so it gates what the
//! client shows; the backend still enforces access on every request.

use api::Access;
use dioxus::prelude::*;
use tracing::warn;
use ui::{use_api, use_auth};

use crate::Route;

/// Layout for views that need a signed-in user.
#[component]
pub fn RequireAuth() -> Element {
    guarded(Access::Authenticated)
}

/// Layout for views that need the admin hint.
#[component]
pub fn RequireAdmin() -> Element {
    guarded(Access::AdminOnly)
}

fn guarded(access: Access) -> Element {
    let client = use_api();
    let nav = use_navigator();
    // Re-run the check whenever the user logs in or out.
    let _ = use_auth().read();

    if !client.session().can_enter(access) {
        warn!(?access, "access denied, redirecting to login");
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
