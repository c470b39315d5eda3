use yew::NodeRef;

use common::model::investment::{Investment, InvestmentType};
use common::model::investor::Investor;

pub struct InvestmentsComponent {
    pub investments: Vec<Investment>,
    pub investors: Vec<Investor>,
    pub loading: bool,

    pub search: String,
    /// Investor id to narrow to; empty means all.
    pub investor_filter: String,
    pub type_filter: Option<InvestmentType>,

    pub pending_delete: Option<Investment>,
    pub confirm_ref: NodeRef,
}

impl InvestmentsComponent {
    pub fn new() -> Self {
        Self {
            investments: Vec::new(),
            investors: Vec::new(),
            loading: true,
            search: String::new(),
            investor_filter: String::new(),
            type_filter: None,
            pending_delete: None,
            confirm_ref: NodeRef::default(),
        }
    }

    pub fn investor_name(&self, investor_id: &str) -> &str {
        self.investors
            .iter()
            .find(|investor| investor.id == investor_id)
            .map(|investor| investor.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Types present in the fetched data, for the filter dropdown.
    pub fn types_present(&self) -> Vec<InvestmentType> {
        let mut types: Vec<InvestmentType> = Vec::new();
        for investment in &self.investments {
            if !types.contains(&investment.investment_type) {
                types.push(investment.investment_type);
            }
        }
        types.sort_by_key(|t| t.as_str());
        types
    }

    pub fn filtered(&self) -> Vec<&Investment> {
        let needle = self.search.to_lowercase();
        self.investments
            .iter()
            .filter(|investment| {
                let matches_search = needle.is_empty()
                    || investment.investment_name.to_lowercase().contains(&needle)
                    || investment
                        .investment_type
                        .as_str()
                        .to_lowercase()
                        .contains(&needle)
                    || investment
                        .issuer
                        .as_deref()
                        .is_some_and(|issuer| issuer.to_lowercase().contains(&needle))
                    || self
                        .investor_name(&investment.investor_id)
                        .to_lowercase()
                        .contains(&needle);
                let matches_investor = self.investor_filter.is_empty()
                    || investment.investor_id == self.investor_filter;
                let matches_type = self
                    .type_filter
                    .is_none_or(|kind| investment.investment_type == kind);
                matches_search && matches_investor && matches_type
            })
            .collect()
    }
}
