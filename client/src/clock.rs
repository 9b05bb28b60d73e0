use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    gloo_timers::future::sleep(duration).await;
}

/// Milliseconds since the Unix epoch, used to mint ids.
pub fn unix_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
