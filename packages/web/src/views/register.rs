//! Registration page view.

use dioxus::prelude::*;
use ui::{alert, report_and_alert, set_live, spawn_detached, use_api};

use crate::Route;

/// Register page component. Registration does not sign the user in.
#[component]
pub fn Register() -> Element {
    let client = use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let Some((u, p)) = super::filled_credentials(username(), password()) else {
            return;
        };

        let client = client.clone();
        loading.set(true);
        spawn_detached(async move {
            let result = client.auth().register(&u, &p).await;
            set_live(loading, false);
            match result {
                Ok(_) => {
                    alert("Registration successful! Please login.");
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    report_and_alert(
                        "Registration failed",
                        &e,
                        "Registration failed. Try a different username.",
                    );
                }
            }
        });
    };

    rsx! {
        div {
            class: "page-centered",

            h1 { "Create Account" }
            p { class: "muted", "Pick a username and password." }

            form {
                class: "auth-form",
                onsubmit: handle_register,

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
                    autocomplete: "new-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "muted",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
