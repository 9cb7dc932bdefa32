use serde::Serialize;
use utoipa::ToSchema;

/// Health check response body.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Simple health service usable by any API surface.
///
/// Provides a standardised way to check the health status of the matsya
/// system, used for monitoring and load balancer health checks.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance.
    ///
    /// This is the preferred method for health checks as it doesn't require
    /// instantiating the service.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "matsya is alive".into(),
        }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}
