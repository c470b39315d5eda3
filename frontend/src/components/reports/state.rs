use common::model::investment::{Investment, InvestmentType};
use common::model::investor::Investor;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Summary,
    List,
    Table,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Summary, ViewMode::List, ViewMode::Table];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Summary => "Summary Report",
            ViewMode::List => "List View",
            ViewMode::Table => "Table View",
        }
    }

    pub fn parse(value: &str) -> Option<ViewMode> {
        ViewMode::ALL.iter().find(|m| m.label() == value).copied()
    }
}

pub struct ReportsComponent {
    pub investors: Vec<Investor>,
    /// Investments as last fetched with the active filters applied
    /// server-side.
    pub investments: Vec<Investment>,
    pub loading: bool,
    pub view_mode: ViewMode,
    pub investor_filter: String,
    pub type_filter: Option<InvestmentType>,
}

impl ReportsComponent {
    pub fn new() -> Self {
        Self {
            investors: Vec::new(),
            investments: Vec::new(),
            loading: true,
            view_mode: ViewMode::Summary,
            investor_filter: String::new(),
            type_filter: None,
        }
    }

    pub fn investor_name(&self, investor_id: &str) -> &str {
        self.investors
            .iter()
            .find(|investor| investor.id == investor_id)
            .map(|investor| investor.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Investors narrowed to the active filter, so the summary ranking
    /// matches the investment list being shown.
    pub fn scoped_investors(&self) -> Vec<Investor> {
        self.investors
            .iter()
            .filter(|investor| {
                self.investor_filter.is_empty() || investor.id == self.investor_filter
            })
            .cloned()
            .collect()
    }
}
