use std::collections::BTreeMap;

use common::model::custom_field::CustomField;
use common::model::investor::Investor;

pub struct AddInvestmentComponent {
    pub investors: Vec<Investor>,
    pub custom_fields: Vec<CustomField>,
    pub loading: bool,
    pub submitting: bool,
    pub form: InvestmentForm,
}

/// Raw form state, as typed. Parsing and validation happen at submit.
#[derive(Clone, Default, PartialEq)]
pub struct InvestmentForm {
    pub investor_id: String,
    pub investment_name: String,
    pub investment_type: String,
    pub amount: String,
    pub interest_rate: String,
    pub interest_date: String,
    pub purchase_date: String,
    pub maturity_date: String,
    pub description: String,
    pub issuer: String,
    pub custom_values: BTreeMap<String, String>,
}

impl AddInvestmentComponent {
    pub fn new() -> Self {
        Self {
            investors: Vec::new(),
            custom_fields: Vec::new(),
            loading: true,
            submitting: false,
            form: InvestmentForm::default(),
        }
    }
}
