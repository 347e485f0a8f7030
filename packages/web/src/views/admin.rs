//! Admin panel: list users and toggle their admin flag.
//!
//! The list is re-fetched after every role change rather than patched locally.
//! Role changes finish even if the admin navigates away mid-request.
//! A forged admin hint gets this far, but the server answers 403 to every call.

use api::AdminUser;
use dioxus::prelude::*;
use ui::icons::{FaUserMinus, FaUserShield};
use ui::{
    report_error, set_live, spawn_detached, use_api, AppClient, Icon, LoadState, LogoutButton,
    Navbar,
};

use crate::Route;

#[component]
pub fn Admin() -> Element {
    let client = use_api();
    let nav = use_navigator();
    let users = use_signal(Vec::<AdminUser>::new);
    let state = use_signal(LoadState::default);

    use_hook(|| {
        spawn_detached(load_users(client.clone(), users, state));
    });

    let set_role = use_callback({
        let client = client.clone();
        move |(id, promote): (i64, bool)| {
            let client = client.clone();
            spawn_detached(async move {
                let admin = client.admin();
                let result = if promote {
                    admin.make_admin(id).await
                } else {
                    admin.remove_admin(id).await
                };
                match result {
                    Ok(_) => load_users(client.clone(), users, state).await,
                    Err(e) if promote => report_error("Failed to promote user", &e),
                    Err(e) => report_error("Failed to demote user", &e),
                }
            });
        }
    });

    rsx! {
        Navbar {
            Link { to: Route::Dashboard {}, "Dashboard" }
            LogoutButton {
                class: "secondary",
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
        }

        div {
            class: "page",
            h2 { "Users" }

            match state() {
                LoadState::Loading => rsx! {
                    p { class: "muted", "Loading users..." }
                },
                LoadState::Failed(message) => rsx! {
                    div { class: "error-banner", "Could not load users: {message}" }
                },
                LoadState::Loaded => rsx! {
                    table {
                        thead {
                            tr {
                                th { "ID" }
                                th { "Username" }
                                th { "Role" }
                                th {}
                            }
                        }
                        tbody {
                            for user in users.read().iter() {
                                tr {
                                    key: "{user.id}",
                                    td { "{user.id}" }
                                    td { "{user.username}" }
                                    td { if user.is_admin { "Admin" } else { "User" } }
                                    td {
                                        if user.is_admin {
                                            button {
                                                class: "danger",
                                                onclick: {
                                                    let id = user.id;
                                                    move |_| set_role.call((id, false))
                                                },
                                                Icon { icon: FaUserMinus, width: 12, height: 12 }
                                                " Remove admin"
                                            }
                                        } else {
                                            button {
                                                class: "secondary",
                                                onclick: {
                                                    let id = user.id;
                                                    move |_| set_role.call((id, true))
                                                },
                                                Icon { icon: FaUserShield, width: 12, height: 12 }
                                                " Make admin"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

async fn load_users(client: AppClient, users: Signal<Vec<AdminUser>>, state: Signal<LoadState>) {
    match client.admin().users().await {
        Ok(list) => {
            set_live(users, list);
            set_live(state, LoadState::Loaded);
        }
        Err(e) => {
            report_error("Failed to load users", &e);
            set_live(state, LoadState::Failed(e.to_string()));
        }
    }
}
