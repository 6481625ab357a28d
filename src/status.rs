// File: ./src/status.rs
//! Screen-reader status region (`role="status"`).
//!
//! An announcement stays visible for a fixed delay and is then cleared by a
//! one-shot background task. Clears are not cancelled: announcing twice in
//! quick succession lets the first timer blank the second message early.
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct StatusRegion {
    text: Arc<Mutex<String>>,
}

impl StatusRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of the region ("" when nothing is announced).
    pub fn text(&self) -> String {
        self.text.lock().map(|t| t.clone()).unwrap_or_default()
    }

    /// Sets `message` and schedules a clear after `clear_after`.
    ///
    /// Outside a Tokio runtime the message simply stays until the next call.
    pub fn announce(&self, message: String, clear_after: Duration) {
        if let Ok(mut t) = self.text.lock() {
            *t = message;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let text = Arc::clone(&self.text);
                handle.spawn(async move {
                    tokio::time::sleep(clear_after).await;
                    if let Ok(mut t) = text.lock() {
                        t.clear();
                    }
                });
            }
            Err(_) => log::debug!("No runtime, status message will not auto-clear"),
        }
    }
}
