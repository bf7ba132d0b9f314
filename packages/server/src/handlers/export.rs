use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use common::Subcategory;
use common::reports::{
    INDIVIDUAL_COLUMNS, PAYMENT_COLUMNS, TEAM_COLUMNS, generate_nba_csv,
    individual_participants_rows, payment_rows, rows_to_csv, team_participants_rows,
};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::snapshot;
use crate::state::AppState;
use crate::utils::filename::{csv_attachment, export_filename};

fn csv_response(report: &str, csv: String) -> Response {
    let filename = export_filename(report, Utc::now().date_naive());
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, csv_attachment(&filename)),
        ],
        csv,
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/export/individual",
    tag = "Admin",
    operation_id = "exportIndividualParticipants",
    summary = "Export individual participants CSV",
    description = "Downloads every registration for Individual-subcategory events, grouped by category and event. Requires the `admin` role.",
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv", body = String),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn export_individual(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    auth_user.require_admin()?;

    let registrations: Vec<_> = snapshot::load_registrations(&state.db)
        .await?
        .into_iter()
        .filter(|r| r.subcategory() == Some(Subcategory::Individual))
        .collect();

    let rows = individual_participants_rows(&registrations);
    Ok(csv_response(
        "individual_participants",
        rows_to_csv(INDIVIDUAL_COLUMNS, &rows),
    ))
}

#[utoipa::path(
    get,
    path = "/export/teams",
    tag = "Admin",
    operation_id = "exportTeamParticipants",
    summary = "Export team participants CSV",
    description = "Downloads every team for Group-subcategory events, one block per team reconstructed from the leader's member list. Requires the `admin` role.",
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv", body = String),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn export_teams(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    auth_user.require_admin()?;

    let registrations: Vec<_> = snapshot::load_registrations(&state.db)
        .await?
        .into_iter()
        .filter(|r| r.subcategory() == Some(Subcategory::Group))
        .collect();

    let rows = team_participants_rows(&registrations);
    Ok(csv_response(
        "team_participants",
        rows_to_csv(TEAM_COLUMNS, &rows),
    ))
}

#[utoipa::path(
    get,
    path = "/export/payments",
    tag = "Admin",
    operation_id = "exportPayments",
    summary = "Export payment ledger CSV",
    description = "Downloads the payment ledger (one row per charged registration) with payment-mode, per-event, and grand-total summaries. Requires the `admin` role.",
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv", body = String),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn export_payments(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    auth_user.require_admin()?;

    let registrations = snapshot::load_registrations(&state.db).await?;
    let rows = payment_rows(&registrations);
    Ok(csv_response("payments", rows_to_csv(PAYMENT_COLUMNS, &rows)))
}

#[utoipa::path(
    get,
    path = "/export/nba",
    tag = "Admin",
    operation_id = "exportNbaRequirements",
    summary = "Export NBA requirements CSV",
    description = "Downloads the accreditation report: per-category solo/team counts plus the NBA requirements summary table. Requires the `admin` role.",
    responses(
        (status = 200, description = "CSV attachment", content_type = "text/csv", body = String),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Forbidden (PERMISSION_DENIED)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user))]
pub async fn export_nba(
    auth_user: AuthUser,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    auth_user.require_admin()?;

    let registrations = snapshot::load_registrations(&state.db).await?;
    Ok(csv_response("nba_requirements", generate_nba_csv(&registrations)))
}
