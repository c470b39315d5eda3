use serde::{Deserialize, Serialize};

/// Headline figures served by `GET /dashboard/stats`. The backend computes
/// these over its full collections; the remaining dashboard widgets are
/// derived client-side from the fetched lists.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct DashboardStats {
    pub total_investors: u64,
    pub total_investments: u64,
    pub total_portfolio_value: f64,
}
