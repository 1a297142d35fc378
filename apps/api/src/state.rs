use crate::hr_client::HrClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Client for the external HR analysis/scheduling service. Both intake
    /// flows forward through it; no other module issues upstream requests.
    pub hr: HrClient,
}
