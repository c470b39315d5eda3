use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::custom_field::FieldValue;

/// A person who owns investments. All fields besides `name` and
/// `relationship` are optional contact metadata.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Investor {
    pub id: String,
    pub name: String,
    pub relationship: Relationship,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_fields: BTreeMap<String, FieldValue>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// How an investor relates to the account holder.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relationship {
    #[serde(rename = "Self")]
    Myself,
    Spouse,
    Child,
    Parent,
    Sibling,
    Grandparent,
    Grandchild,
    #[serde(rename = "Business Partner")]
    BusinessPartner,
    Trust,
    Other,
}

impl Relationship {
    pub const ALL: [Relationship; 10] = [
        Relationship::Myself,
        Relationship::Spouse,
        Relationship::Child,
        Relationship::Parent,
        Relationship::Sibling,
        Relationship::Grandparent,
        Relationship::Grandchild,
        Relationship::BusinessPartner,
        Relationship::Trust,
        Relationship::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Myself => "Self",
            Relationship::Spouse => "Spouse",
            Relationship::Child => "Child",
            Relationship::Parent => "Parent",
            Relationship::Sibling => "Sibling",
            Relationship::Grandparent => "Grandparent",
            Relationship::Grandchild => "Grandchild",
            Relationship::BusinessPartner => "Business Partner",
            Relationship::Trust => "Trust",
            Relationship::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Relationship> {
        Relationship::ALL.iter().find(|r| r.as_str() == value).copied()
    }
}

impl Default for Relationship {
    fn default() -> Self {
        Relationship::Myself
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_round_trips_through_wire_names() {
        for relationship in Relationship::ALL {
            let json = serde_json::to_string(&relationship).unwrap();
            assert_eq!(json, format!("\"{}\"", relationship.as_str()));
            let back: Relationship = serde_json::from_str(&json).unwrap();
            assert_eq!(back, relationship);
        }
    }

    #[test]
    fn parse_accepts_the_two_word_labels() {
        assert_eq!(
            Relationship::parse("Business Partner"),
            Some(Relationship::BusinessPartner)
        );
        assert_eq!(Relationship::parse("Self"), Some(Relationship::Myself));
        assert_eq!(Relationship::parse("Cousin"), None);
    }
}
