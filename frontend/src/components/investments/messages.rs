use common::model::investment::{Investment, InvestmentType};
use common::model::investor::Investor;

pub enum Msg {
    Loaded {
        investments: Vec<Investment>,
        investors: Vec<Investor>,
    },
    LoadFailed(String),

    SearchChanged(String),
    InvestorFilterChanged(String),
    TypeFilterChanged(Option<InvestmentType>),

    RequestDelete(Investment),
    CancelDelete,
    ConfirmDelete,
    DeleteSettled {
        id: String,
        label: String,
        result: Result<(), String>,
    },
}
