use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::custom_field::FieldValue;

/// A single financial holding owned by one investor.
///
/// `amount` defaults to zero when the backend omits it, so a sparse record
/// can never poison aggregation with `NaN`. The record is created through
/// the add-investment form and deleted independently; there is no in-place
/// update.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Investment {
    pub id: String,
    pub investor_id: String,
    pub investment_name: String,
    pub investment_type: InvestmentType,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    /// Day and month the interest is credited, as a `DDMM` string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<String, FieldValue>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Closed list of investment categories, spelled exactly as the backend
/// stores them.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvestmentType {
    #[serde(rename = "Mutual Funds")]
    MutualFunds,
    Stocks,
    Bonds,
    #[serde(rename = "Fixed Deposits")]
    FixedDeposits,
    #[serde(rename = "PPF")]
    Ppf,
    #[serde(rename = "NSC")]
    Nsc,
    #[serde(rename = "ELSS")]
    Elss,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Gold,
    #[serde(rename = "Government Securities")]
    GovernmentSecurities,
    #[serde(rename = "Insurance Policies")]
    InsurancePolicies,
    #[serde(rename = "Corporate Bonds")]
    CorporateBonds,
    #[serde(rename = "ULIPs")]
    Ulips,
    #[serde(rename = "NPS")]
    Nps,
    Other,
}

impl InvestmentType {
    pub const ALL: [InvestmentType; 15] = [
        InvestmentType::MutualFunds,
        InvestmentType::Stocks,
        InvestmentType::Bonds,
        InvestmentType::FixedDeposits,
        InvestmentType::Ppf,
        InvestmentType::Nsc,
        InvestmentType::Elss,
        InvestmentType::RealEstate,
        InvestmentType::Gold,
        InvestmentType::GovernmentSecurities,
        InvestmentType::InsurancePolicies,
        InvestmentType::CorporateBonds,
        InvestmentType::Ulips,
        InvestmentType::Nps,
        InvestmentType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InvestmentType::MutualFunds => "Mutual Funds",
            InvestmentType::Stocks => "Stocks",
            InvestmentType::Bonds => "Bonds",
            InvestmentType::FixedDeposits => "Fixed Deposits",
            InvestmentType::Ppf => "PPF",
            InvestmentType::Nsc => "NSC",
            InvestmentType::Elss => "ELSS",
            InvestmentType::RealEstate => "Real Estate",
            InvestmentType::Gold => "Gold",
            InvestmentType::GovernmentSecurities => "Government Securities",
            InvestmentType::InsurancePolicies => "Insurance Policies",
            InvestmentType::CorporateBonds => "Corporate Bonds",
            InvestmentType::Ulips => "ULIPs",
            InvestmentType::Nps => "NPS",
            InvestmentType::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<InvestmentType> {
        InvestmentType::ALL.iter().find(|t| t.as_str() == value).copied()
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_round_trips_through_wire_names() {
        for investment_type in InvestmentType::ALL {
            let json = serde_json::to_string(&investment_type).unwrap();
            assert_eq!(json, format!("\"{}\"", investment_type.as_str()));
            let back: InvestmentType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, investment_type);
        }
    }

    #[test]
    fn missing_amount_deserializes_to_zero() {
        let json = r#"{
            "id": "inv-1",
            "investor_id": "p-1",
            "investment_name": "HDFC Top 100",
            "investment_type": "Mutual Funds",
            "created_at": "2024-03-01T09:30:00",
            "updated_at": "2024-03-01T09:30:00"
        }"#;
        let investment: Investment = serde_json::from_str(json).unwrap();
        assert_eq!(investment.amount, 0.0);
        assert!(investment.custom_fields.is_empty());
    }
}
