//! Requests that outlive the view that started them.
//!
//! Navigating away never aborts a request. Requests run on the root scope and
//! write their results back through [`update_live`], which skips state owned
//! by a view that has since unmounted.

use std::future::Future;

use dioxus::dioxus_core::spawn_forever;
use dioxus::prelude::*;
use tracing::debug;

/// Run `request` to completion even if the calling view unmounts first.
pub fn spawn_detached(request: impl Future<Output = ()> + 'static) {
    let _ = spawn_forever(request);
}

/// Apply `f` to a view's signal if the view is still mounted.
///
/// Returns `false` when the owning view is gone and the update was dropped.
pub fn update_live<T: 'static>(mut signal: Signal<T>, f: impl FnOnce(&mut T)) -> bool {
    match signal.try_write() {
        Ok(mut value) => {
            f(&mut value);
            true
        }
        Err(e) => {
            debug!("dropping result for unmounted view: {e}");
            false
        }
    }
}

/// [`update_live`] that replaces the value.
pub fn set_live<T: 'static>(signal: Signal<T>, value: T) -> bool {
    update_live(signal, |slot| *slot = value)
}

/// Set `busy` and return `true`, or return `false` if it was already set.
///
/// Call it in the event handler, before spawning, so the flag is up before
/// the next click can be handled.
pub fn try_claim(mut busy: Signal<bool>) -> bool {
    if *busy.peek() {
        return false;
    }
    busy.set(true);
    true
}
