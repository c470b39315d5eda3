use common::model::investment::{Investment, InvestmentType};
use common::model::investor::Investor;

use super::state::ViewMode;

pub enum Msg {
    InvestorsLoaded(Vec<Investor>),
    InvestmentsLoaded(Vec<Investment>),
    LoadFailed(String),
    ViewModeChanged(ViewMode),
    InvestorFilterChanged(String),
    TypeFilterChanged(Option<InvestmentType>),
    ClearFilters,
}
