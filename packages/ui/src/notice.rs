//! Failure reporting at the view boundary.
//!
//! Views log every failed request and may additionally interrupt the user with
//! a blocking browser alert. Nothing is retried or queued.

use std::fmt::Display;

use tracing::{error, info};

/// Log a failed operation.
pub fn report_error(context: &str, err: &impl Display) {
    error!("{context}: {err}");
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    web_sys::console::error_1(&format!("{context}: {err}").into());
}

/// Log a failed operation and tell the user with `message`.
pub fn report_and_alert(context: &str, err: &impl Display, message: &str) {
    report_error(context, err);
    alert(message);
}

/// Blocking browser alert. Native builds only log the message.
pub fn alert(message: &str) {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    info!("alert: {message}");
}
