use common::model::dashboard::DashboardStats;
use common::model::investment::Investment;
use common::model::investor::Investor;

/// State for the dashboard screen: the server headline and the two
/// collections the local widgets are derived from.
pub struct DashboardComponent {
    pub stats: Option<DashboardStats>,
    pub investors: Vec<Investor>,
    pub investments: Vec<Investment>,
    pub loading: bool,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            stats: None,
            investors: Vec::new(),
            investments: Vec::new(),
            loading: true,
        }
    }

    pub fn investor_name(&self, investor_id: &str) -> &str {
        self.investors
            .iter()
            .find(|investor| investor.id == investor_id)
            .map(|investor| investor.name.as_str())
            .unwrap_or("Unknown")
    }
}
