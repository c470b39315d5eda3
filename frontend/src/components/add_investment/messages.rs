use common::model::custom_field::CustomField;
use common::model::investment::Investment;
use common::model::investor::Investor;

#[derive(Clone, Copy)]
pub enum FormField {
    InvestorId,
    InvestmentName,
    InvestmentType,
    Amount,
    InterestRate,
    InterestDate,
    PurchaseDate,
    MaturityDate,
    Description,
    Issuer,
}

pub enum Msg {
    Loaded {
        investors: Vec<Investor>,
        custom_fields: Vec<CustomField>,
    },
    LoadFailed(String),
    FormChanged(FormField, String),
    CustomValueChanged(String, String),
    Submit,
    Saved(Investment),
    SaveFailed(String),
}
