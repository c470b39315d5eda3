//! Request payloads sent by the client, and the error envelope it reads
//! back from failed calls.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::custom_field::{EntityKind, FieldKind, FieldValue};
use crate::model::investment::InvestmentType;
use crate::model::investor::Relationship;

/// Body of `POST /investors` and `PUT /investors/:id`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InvestorPayload {
    pub name: String,
    pub relationship: Relationship,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<String, FieldValue>,
}

/// Body of `POST /investments`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct InvestmentPayload {
    pub investor_id: String,
    pub investment_name: String,
    pub investment_type: InvestmentType,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<String, FieldValue>,
}

/// Body of `POST /custom-fields`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CustomFieldPayload {
    pub entity_type: EntityKind,
    pub field_name: String,
    pub field_type: FieldKind,
    pub is_required: bool,
    pub options: Vec<String>,
}

/// Error body shape of failed calls: `{ "detail": "..." }`. The `detail`
/// string is what delete-failure discrimination inspects.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ApiErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optional_fields_stay_off_the_wire() {
        let payload = InvestorPayload {
            name: "Asha".to_string(),
            relationship: Relationship::Spouse,
            email: None,
            phone: None,
            address: None,
            pan_number: None,
            date_of_birth: None,
            occupation: None,
            photo_url: None,
            custom_fields: BTreeMap::new(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"Asha","relationship":"Spouse"}"#);
    }

    #[test]
    fn investment_payload_carries_the_foreign_key_by_its_canonical_name() {
        let payload = InvestmentPayload {
            investor_id: "p-1".to_string(),
            investment_name: "NSC 2029".to_string(),
            investment_type: InvestmentType::Nsc,
            amount: 50_000.0,
            interest_rate: Some(7.7),
            interest_date: Some("0104".to_string()),
            purchase_date: None,
            maturity_date: None,
            description: None,
            issuer: None,
            photo_url: None,
            custom_fields: BTreeMap::new(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"investor_id\":\"p-1\""));
        assert!(json.contains("\"investment_type\":\"NSC\""));
        assert!(!json.contains("family_member_id"));
    }
}
