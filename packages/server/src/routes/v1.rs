use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/admin", admin_routes())
}

fn admin_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::analytics::get_analytics))
        .routes(routes!(handlers::analytics::get_stats))
        .routes(routes!(handlers::export::export_individual))
        .routes(routes!(handlers::export::export_teams))
        .routes(routes!(handlers::export::export_payments))
        .routes(routes!(handlers::export::export_nba))
}
