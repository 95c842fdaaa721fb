pub mod client;
pub mod config;
pub mod modules;
pub mod services;

/// Shared per-process state. The provider credential is deliberately not
/// resolved here: each request reads it, so a missing key surfaces as a
/// configuration error response instead of a failed boot.
#[derive(Clone, Default)]
pub struct AppState {
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
