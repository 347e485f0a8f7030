//! Login page view with username/password form.

use dioxus::prelude::*;
use ui::{report_and_alert, set_live, spawn_detached, use_api, use_auth, AuthState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let client = use_api();
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to the dashboard
    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let Some((u, p)) = super::filled_credentials(username(), password()) else {
            return;
        };

        let client = client.clone();
        loading.set(true);
        spawn_detached(async move {
            match client.auth().login(&u, &p).await {
                Ok(token) => {
                    client.auth().begin_session(token);
                    auth.set(AuthState::read(&client));
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    set_live(loading, false);
                    report_and_alert("Login failed", &e, "Invalid username or password");
                }
            }
        });
    };

    rsx! {
        div {
            class: "page-centered",

            h1 { "Finance Tracker" }
            p { class: "muted", "Sign in to see your transactions." }

            form {
                class: "auth-form",
                onsubmit: handle_login,

                input {
                    r#type: "text",
                    placeholder: "Username",
                    autocomplete: "username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "muted",
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
