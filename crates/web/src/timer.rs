//! Browser timers as futures.

#[cfg(not(target_arch = "wasm32"))]
use leptos::task;

/// Resolve after `delay_ms` on the browser event loop.
#[cfg(target_arch = "wasm32")]
pub async fn wait_for_timeout(delay_ms: i32) {
    use js_sys::{Function, Promise};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use wasm_bindgen_futures::JsFuture;

    let mut executor = move |resolve: Function, _reject: Function| {
        let Some(window) = web_sys::window() else {
            let _resolved = resolve.call0(&JsValue::NULL);
            return;
        };

        let callback = Closure::once_into_js(move || {
            let _resolved = resolve.call0(&JsValue::NULL);
        });

        let _timer = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    };

    let _settled = JsFuture::from(Promise::new(&mut executor)).await;
}

/// Off the browser there is no event loop to wait on; yield once instead.
#[cfg(not(target_arch = "wasm32"))]
pub async fn wait_for_timeout(_delay_ms: i32) {
    task::tick().await;
}
