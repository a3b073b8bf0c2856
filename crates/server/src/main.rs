// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use roster_api::{
    ApiError, AssignRosterRequest, AssignRosterResponse, BuildRosterRequest, GenerateSlotsRequest,
    GenerateSlotsResponse, RotationRequest, RotationResponse, RuleCatalogueResponse,
    assign_roster, build_roster, generate_coverage_slots, rotation, rule_catalogue_response,
};
use serde::{Deserialize, Serialize};
use tokio::task::JoinError;
use tracing::{error, info};

/// Roster Server - HTTP host for the shift roster engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
        }
    }
}

impl From<JoinError> for HttpError {
    fn from(err: JoinError) -> Self {
        error!(error = %err, "Roster worker failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: String::from("Roster worker failed"),
        }
    }
}

/// Runs an engine call off the async workers.
///
/// Assignment is CPU-bound, so it runs on the blocking pool where many
/// independent requests can proceed in parallel.
async fn run_blocking<T, F>(work: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    Ok(tokio::task::spawn_blocking(work).await??)
}

/// Handler for POST `/coverage/slots` endpoint.
///
/// Expands a coverage plan into dated slots.
async fn handle_generate_slots(
    Json(req): Json<GenerateSlotsRequest>,
) -> Result<Json<GenerateSlotsResponse>, HttpError> {
    info!(
        rules = req.rules.len(),
        range_start = %req.range_start,
        range_end = %req.range_end,
        "Handling generate_coverage_slots request"
    );

    let response: GenerateSlotsResponse = generate_coverage_slots(&req)?;

    info!(slots = response.slots.len(), "Generated coverage slots");
    Ok(Json(response))
}

/// Handler for POST `/roster/assign` endpoint.
///
/// Fills supplied slots from an employee pool.
async fn handle_assign_roster(
    Json(req): Json<AssignRosterRequest>,
) -> Result<Json<AssignRosterResponse>, HttpError> {
    info!(
        slots = req.slots.len(),
        employees = req.employees.len(),
        rotation_offset = req.rotation_offset,
        "Handling assign_roster request"
    );

    let response: AssignRosterResponse = run_blocking(move || assign_roster(&req)).await?;

    info!(
        assigned = response.summary.assigned_slots,
        unassigned = response.summary.unassigned_slots,
        "Assigned roster"
    );
    Ok(Json(response))
}

/// Handler for POST `/roster/build` endpoint.
///
/// Generates slots for a coverage plan and fills them.
async fn handle_build_roster(
    Json(req): Json<BuildRosterRequest>,
) -> Result<Json<AssignRosterResponse>, HttpError> {
    info!(
        range_start = %req.range_start,
        range_end = %req.range_end,
        employees = req.employees.len(),
        "Handling build_roster request"
    );

    let response: AssignRosterResponse = run_blocking(move || build_roster(&req)).await?;

    info!(
        assigned = response.summary.assigned_slots,
        unassigned = response.summary.unassigned_slots,
        "Built roster"
    );
    Ok(Json(response))
}

/// Handler for POST `/rotation` endpoint.
async fn handle_rotation(
    Json(req): Json<RotationRequest>,
) -> Result<Json<RotationResponse>, HttpError> {
    info!(
        employees = req.employees.len(),
        offset = req.offset,
        "Handling rotation request"
    );

    Ok(Json(rotation(&req)?))
}

/// Handler for GET `/rules/catalogue` endpoint.
async fn handle_rule_catalogue() -> Json<RuleCatalogueResponse> {
    info!("Handling rule_catalogue request");
    Json(rule_catalogue_response())
}

/// Builds the application router.
fn build_router() -> Router {
    Router::new()
        .route("/coverage/slots", post(handle_generate_slots))
        .route("/roster/assign", post(handle_assign_roster))
        .route("/roster/build", post(handle_build_roster))
        .route("/rotation", post(handle_rotation))
        .route("/rules/catalogue", get(handle_rule_catalogue))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Roster Server");

    let app: Router = build_router();

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
