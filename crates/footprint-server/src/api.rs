//! Routes and handlers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use footprint_core::{
    compute, EmissionFactor, EmissionFactors, FootprintInput, FootprintReport, FootprintRequest,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiResult;

/// Shared application state.
///
/// The calculator itself is stateless; this only carries what `/health`
/// reports.
#[derive(Debug)]
pub struct AppState {
    version: &'static str,
    calculations: AtomicU64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            calculations: AtomicU64::new(0),
        }
    }

    /// Counts a successful calculation, returning the new total.
    fn record_calculation(&self) -> u64 {
        self.calculations.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Successful calculations since startup.
    pub fn calculations(&self) -> u64 {
        self.calculations.load(Ordering::Relaxed)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub calculations: u64,
}

/// Builds the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/calcular_pegada", post(calculate))
        .route("/fatores", get(factors))
        .route("/health", get(health))
        .with_state(state)
}

/// POST /calcular_pegada - Computes the footprint of one household.
async fn calculate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<FootprintRequest>, JsonRejection>,
) -> ApiResult<Json<FootprintReport>> {
    let Json(request) = payload.inspect_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Request body rejected");
    })?;

    let input = FootprintInput::try_from(&request).inspect_err(|err| {
        warn!(error = %err, "Input rejected");
    })?;

    let result = compute(&input);
    let breakdown = result.breakdown;
    let calculation = state.record_calculation();

    info!(
        calculation,
        fuel = input.fuel.wire_name(),
        diet = input.diet.wire_name().unwrap_or("desconhecida"),
        total_tonnes = result.total_tonnes(),
        energy_kg = breakdown.energy_kg,
        transport_kg = breakdown.transport_kg,
        diet_kg = breakdown.diet_kg,
        waste_kg = breakdown.waste_kg,
        "Footprint calculated"
    );

    Ok(Json(FootprintReport::from(&result)))
}

/// GET /fatores - Lists the emission factor table.
async fn factors() -> Json<Vec<EmissionFactor>> {
    Json(EmissionFactors::standard().entries().to_vec())
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.to_string(),
        calculations: state.calculations(),
    })
}
