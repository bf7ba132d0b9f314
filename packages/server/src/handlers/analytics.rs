use axum::Json;
use axum::extract::State;
use common::RegistrationStatus;
use common::reports::{compute_demographics, compute_revenue, revenue_by_event, revenue_by_mode};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::models::analytics::{AnalyticsResponse, StatsResponse};
use crate::snapshot;
use crate::state::AppState;

const TOP_EVENTS: usize = 5;

#[utoipa::path(
    get,
    path = "/analytics",
    tag = "Admin",
    operation_id = "getAnalytics",
    summary = "Full registration analytics",
    description = "Returns deduplicated revenue figures and demographic breakdowns over all registrations. Requires the `admin` role.",
    responses(
        (status = 200, description = "Aggregated analytics", body = AnalyticsResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn get_analytics(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    auth_user.require_admin()?;

    let registrations = snapshot::load_registrations(&state.db).await?;

    Ok(Json(AnalyticsResponse {
        total_registrations: registrations.len() as u64,
        total_revenue: compute_revenue(&registrations),
        revenue_by_mode: revenue_by_mode(&registrations)
            .into_iter()
            .map(Into::into)
            .collect(),
        revenue_by_event: revenue_by_event(&registrations)
            .into_iter()
            .map(Into::into)
            .collect(),
        demographics: compute_demographics(&registrations),
    }))
}

#[utoipa::path(
    get,
    path = "/stats",
    tag = "Admin",
    operation_id = "getStats",
    summary = "Dashboard summary",
    description = "Returns registration counts, total revenue, and the most popular events. Requires the `admin` role.",
    responses(
        (status = 200, description = "Dashboard summary", body = StatsResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn get_stats(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    auth_user.require_admin()?;

    let registrations = snapshot::load_registrations(&state.db).await?;

    let confirmed = registrations
        .iter()
        .filter(|r| r.status == Some(RegistrationStatus::Confirmed))
        .count() as u64;
    let pending = registrations
        .iter()
        .filter(|r| r.status == Some(RegistrationStatus::Pending))
        .count() as u64;
    let teams = registrations.iter().filter(|r| r.is_leader()).count() as u64;

    let mut top_events = compute_demographics(&registrations).event_popularity;
    top_events.truncate(TOP_EVENTS);

    Ok(Json(StatsResponse {
        total_registrations: registrations.len() as u64,
        confirmed_registrations: confirmed,
        pending_registrations: pending,
        total_teams: teams,
        total_revenue: compute_revenue(&registrations),
        top_events,
    }))
}
