use common::reports::{Demographics, EventPopularity};
use serde::Serialize;

/// One labeled revenue bucket (a payment mode or an event).
#[derive(Serialize, utoipa::ToSchema)]
pub struct RevenueSlice {
    #[schema(example = "online")]
    pub label: String,
    #[schema(example = 1850.0)]
    pub amount: f64,
}

impl From<(String, f64)> for RevenueSlice {
    fn from((label, amount): (String, f64)) -> Self {
        Self { label, amount }
    }
}

/// Full aggregation over the registration snapshot.
#[derive(Serialize, utoipa::ToSchema)]
pub struct AnalyticsResponse {
    /// Number of registration rows, team members included.
    pub total_registrations: u64,
    /// Deduplicated revenue: each team billed once via its leader row.
    pub total_revenue: f64,
    pub revenue_by_mode: Vec<RevenueSlice>,
    pub revenue_by_event: Vec<RevenueSlice>,
    pub demographics: Demographics,
}

/// Dashboard summary card data.
#[derive(Serialize, utoipa::ToSchema)]
pub struct StatsResponse {
    pub total_registrations: u64,
    pub confirmed_registrations: u64,
    pub pending_registrations: u64,
    /// Number of teams (leader rows).
    pub total_teams: u64,
    pub total_revenue: f64,
    /// Most popular events, descending by registration count.
    pub top_events: Vec<EventPopularity>,
}
