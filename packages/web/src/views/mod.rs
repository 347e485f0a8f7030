mod guard;
pub use guard::{RequireAdmin, RequireAuth};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod admin;
pub use admin::Admin;

/// The username and password as typed, or `None` if either is empty.
///
/// Usernames are not trimmed; the backend compares them verbatim.
fn filled_credentials(username: String, password: String) -> Option<(String, String)> {
    (!username.is_empty() && !password.is_empty()).then_some((username, password))
}
