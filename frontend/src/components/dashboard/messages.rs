use common::model::dashboard::DashboardStats;
use common::model::investment::Investment;
use common::model::investor::Investor;

pub enum Msg {
    Refresh,
    StatsLoaded(DashboardStats),
    CollectionsLoaded {
        investors: Vec<Investor>,
        investments: Vec<Investment>,
    },
    LoadFailed(String),
}
