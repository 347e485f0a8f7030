use dioxus::prelude::*;

use crate::auth::use_auth;

/// Top bar with the app title, the signed-in user, and caller-supplied actions.
#[component]
pub fn Navbar(children: Element) -> Element {
    let auth = use_auth();

    rsx! {
        div {
            class: "navbar",
            span { class: "navbar-title", "Finance Tracker" }
            if let Some(name) = auth().username {
                span { class: "navbar-user", "Signed in as {name}" }
            }
            div {
                class: "navbar-actions",
                {children}
            }
        }
    }
}
