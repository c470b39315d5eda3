use std::collections::BTreeMap;

use serde::Serialize;
use yew::NodeRef;

use common::model::custom_field::CustomField;
use common::model::investment::Investment;
use common::model::investor::{Investor, Relationship};

/// State for the investors screen.
///
/// The screen holds the investments list as well: the cards show how many
/// holdings each investor has, the delete confirmation warns when that
/// count is non-zero, and a confirmed delete cascades the local
/// projection.
pub struct InvestorsComponent {
    pub investors: Vec<Investor>,
    pub investments: Vec<Investment>,
    pub custom_fields: Vec<CustomField>,
    pub loading: bool,
    pub search: String,

    /// `Some` while the editor sheet is open; carries the investor being
    /// edited, or `None` inside when creating a new one.
    pub editing: Option<Option<Investor>>,
    pub form: InvestorForm,
    /// Fingerprint of the form as it was opened, for the unsaved-changes dot.
    pub baseline: String,
    pub editor_ref: NodeRef,

    pub pending_delete: Option<Investor>,
    pub confirm_ref: NodeRef,
}

/// Raw form state, exactly as typed. Serialized only to fingerprint the
/// form for dirty tracking.
#[derive(Serialize, Clone, Default, PartialEq)]
pub struct InvestorForm {
    pub name: String,
    pub relationship: Relationship,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub pan_number: String,
    pub date_of_birth: String,
    pub occupation: String,
    pub photo_url: String,
    pub custom_values: BTreeMap<String, String>,
}

impl InvestorForm {
    pub fn from_investor(investor: &Investor) -> Self {
        Self {
            name: investor.name.clone(),
            relationship: investor.relationship,
            email: investor.email.clone().unwrap_or_default(),
            phone: investor.phone.clone().unwrap_or_default(),
            address: investor.address.clone().unwrap_or_default(),
            pan_number: investor.pan_number.clone().unwrap_or_default(),
            date_of_birth: investor
                .date_of_birth
                .map(|d| d.to_string())
                .unwrap_or_default(),
            occupation: investor.occupation.clone().unwrap_or_default(),
            photo_url: investor.photo_url.clone().unwrap_or_default(),
            custom_values: investor
                .custom_fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_string()))
                .collect(),
        }
    }

    pub fn fingerprint(&self) -> String {
        let serialized = serde_json::to_string(self).unwrap_or_default();
        format!("{:x}", md5::compute(serialized))
    }
}

impl InvestorsComponent {
    pub fn new() -> Self {
        Self {
            investors: Vec::new(),
            investments: Vec::new(),
            custom_fields: Vec::new(),
            loading: true,
            search: String::new(),
            editing: None,
            form: InvestorForm::default(),
            baseline: String::new(),
            editor_ref: NodeRef::default(),
            pending_delete: None,
            confirm_ref: NodeRef::default(),
        }
    }

    pub fn filtered(&self) -> Vec<&Investor> {
        let needle = self.search.to_lowercase();
        self.investors
            .iter()
            .filter(|investor| {
                needle.is_empty()
                    || investor.name.to_lowercase().contains(&needle)
                    || investor
                        .relationship
                        .as_str()
                        .to_lowercase()
                        .contains(&needle)
                    || investor
                        .email
                        .as_deref()
                        .is_some_and(|email| email.to_lowercase().contains(&needle))
                    || investor
                        .occupation
                        .as_deref()
                        .is_some_and(|occupation| occupation.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn investment_count(&self, investor_id: &str) -> usize {
        self.investments
            .iter()
            .filter(|inv| inv.investor_id == investor_id)
            .count()
    }

    pub fn form_dirty(&self) -> bool {
        self.editing.is_some() && self.form.fingerprint() != self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_tracks_every_form_field() {
        let mut form = InvestorForm::default();
        let baseline = form.fingerprint();
        assert_eq!(baseline, InvestorForm::default().fingerprint());

        form.name = "Asha".to_string();
        assert_ne!(form.fingerprint(), baseline);

        let typed = form.fingerprint();
        form.custom_values
            .insert("Risk Level".to_string(), "Low".to_string());
        assert_ne!(form.fingerprint(), typed);
    }
}
