//! Browser clock for notification expiry.

use std::time::Duration;

use async_trait::async_trait;

use trolley::notifications::DismissTimer;

/// Waits on `setTimeout` in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BrowserTimer;

/// Delay in whole milliseconds, saturating at the `setTimeout` maximum.
pub(crate) fn timeout_ms(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

#[async_trait(?Send)]
impl DismissTimer for BrowserTimer {
    #[cfg(target_arch = "wasm32")]
    async fn wait(&self, delay: Duration) {
        use js_sys::{Function, Promise};
        use wasm_bindgen::JsValue;
        use wasm_bindgen_futures::JsFuture;

        let delay_ms = timeout_ms(delay);

        // `resolve` is handed to `setTimeout` directly; without a window it
        // resolves at once.
        let mut schedule = move |resolve: Function, _reject: Function| {
            let scheduled = web_sys::window().is_some_and(|window| {
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay_ms)
                    .is_ok()
            });

            if !scheduled {
                let _resolved = resolve.call0(&JsValue::NULL);
            }
        };

        let _settled = JsFuture::from(Promise::new(&mut schedule)).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn wait(&self, delay: Duration) {
        let delay_ms = u64::from(timeout_ms(delay).unsigned_abs());

        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
