//! Welcome API handler

/// GET /
/// Fixed greeting; doubles as a liveness probe
pub async fn welcome() -> &'static str {
    "Welcome to the Task Management App!"
}
