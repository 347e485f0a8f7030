//! Authentication context and hooks for the UI.

use api::RoleHint;
use dioxus::prelude::*;

use crate::client::{make_client, AppClient};
use crate::Icon;
use crate::icons::FaRightFromBracket;

/// What the views know about the signed-in user.
///
/// A snapshot of the session taken after login, logout, and on startup. The
/// role comes from the unverified token payload and only decides what to show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub role: RoleHint,
    pub username: Option<String>,
}

impl AuthState {
    /// Snapshot the client's current session.
    pub fn read(client: &AppClient) -> Self {
        let auth = client.auth();
        Self {
            role: auth.role_hint(),
            username: auth.username(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// The shared API client provided by [`AuthProvider`].
pub fn use_api() -> AppClient {
    use_context::<AppClient>()
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the API client and the session snapshot.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context_provider(make_client);
    let auth_state = use_signal(|| AuthState::read(&client));

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Forgets the token locally, then hands control to `on_logout` (usually a
/// redirect to the login view). The server is not contacted.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_api();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        client.auth().logout();
        auth_state.set(AuthState::default());
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 12, height: 12 }
            " {label}"
        }
    }
}
