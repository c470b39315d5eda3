//! Confirm-then-commit updates for the locally held collections.
//!
//! Every mutation issued by a view settles into a `Result` from the
//! backend, and only that settled result is allowed to change local state:
//! a confirmed delete removes the entry, a rejected one leaves the
//! collection exactly as it was and comes back as a classified
//! [`DeleteFailure`] for the view to report. There is no speculative
//! removal, so there is nothing to roll back and a rejected delete can
//! simply be retried.

use crate::model::custom_field::CustomField;
use crate::model::investment::Investment;
use crate::model::investor::Investor;

/// Records that carry a server-assigned identifier.
pub trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Investor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for Investment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl HasId for CustomField {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A delete the backend refused, split into the one case the UI words
/// differently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteFailure {
    /// The backend reported dependent records (its detail message mentions
    /// investments), so the entry must keep existing locally too.
    DependentRecords(String),
    Other(String),
}

impl DeleteFailure {
    /// Classifies a backend failure detail by substring, the only contract
    /// the backend offers for dependency conflicts.
    pub fn classify(detail: String) -> DeleteFailure {
        if detail.contains("investments") {
            DeleteFailure::DependentRecords(detail)
        } else {
            DeleteFailure::Other(detail)
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            DeleteFailure::DependentRecords(detail) | DeleteFailure::Other(detail) => detail,
        }
    }
}

/// Commits a freshly created record. If the backend echoed a record that is
/// already present (a retried submit, for instance), the existing entry is
/// replaced instead of duplicated.
pub fn push_created<T: HasId>(items: &mut Vec<T>, created: T) {
    match items.iter_mut().find(|item| item.id() == created.id()) {
        Some(existing) => *existing = created,
        None => items.push(created),
    }
}

/// Commits an updated record by replacing the entry with the same id. An
/// update for an id the collection no longer holds is appended, so the
/// server-confirmed record is never lost.
pub fn replace_updated<T: HasId>(items: &mut Vec<T>, updated: T) {
    push_created(items, updated);
}

fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: &str) {
    items.retain(|item| item.id() != id);
}

/// Applies the settled result of an investor delete.
///
/// On success the investor is removed along with every locally held
/// investment that references it (a client-side projection of the
/// backend's authoritative cascade); the number of cascaded investments is
/// returned. On failure both collections are left untouched.
pub fn settle_investor_delete(
    investors: &mut Vec<Investor>,
    investments: &mut Vec<Investment>,
    investor_id: &str,
    result: Result<(), String>,
) -> Result<usize, DeleteFailure> {
    match result {
        Ok(()) => {
            remove_by_id(investors, investor_id);
            let before = investments.len();
            investments.retain(|inv| inv.investor_id != investor_id);
            Ok(before - investments.len())
        }
        Err(detail) => Err(DeleteFailure::classify(detail)),
    }
}

/// Applies the settled result of an investment delete. Investments have no
/// dependents, so failures are never reclassified.
pub fn settle_investment_delete(
    investments: &mut Vec<Investment>,
    investment_id: &str,
    result: Result<(), String>,
) -> Result<(), DeleteFailure> {
    match result {
        Ok(()) => {
            remove_by_id(investments, investment_id);
            Ok(())
        }
        Err(detail) => Err(DeleteFailure::Other(detail)),
    }
}

/// Applies the settled result of a custom-field delete.
pub fn settle_custom_field_delete(
    fields: &mut Vec<CustomField>,
    field_id: &str,
    result: Result<(), String>,
) -> Result<(), DeleteFailure> {
    match result {
        Ok(()) => {
            remove_by_id(fields, field_id);
            Ok(())
        }
        Err(detail) => Err(DeleteFailure::Other(detail)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::*;
    use crate::model::investment::InvestmentType;
    use crate::model::investor::Relationship;

    fn investor(id: &str, name: &str) -> Investor {
        let at = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Investor {
            id: id.to_string(),
            name: name.to_string(),
            relationship: Relationship::Child,
            email: None,
            phone: None,
            address: None,
            pan_number: None,
            date_of_birth: None,
            occupation: None,
            photo_url: None,
            custom_fields: BTreeMap::new(),
            created_at: at,
            updated_at: at,
        }
    }

    fn investment(id: &str, owner: &str, amount: f64) -> Investment {
        let at = NaiveDate::from_ymd_opt(2024, 6, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        Investment {
            id: id.to_string(),
            investor_id: owner.to_string(),
            investment_name: format!("holding {id}"),
            investment_type: InvestmentType::Stocks,
            amount,
            interest_rate: None,
            interest_date: None,
            purchase_date: None,
            maturity_date: None,
            description: None,
            issuer: None,
            photo_url: None,
            custom_fields: BTreeMap::new(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn confirmed_delete_removes_the_entry() {
        let mut investments = vec![investment("10", "1", 100.0), investment("11", "2", 50.0)];
        let outcome = settle_investment_delete(&mut investments, "10", Ok(()));
        assert!(outcome.is_ok());
        assert_eq!(investments.len(), 1);
        assert_eq!(investments[0].id, "11");
    }

    #[test]
    fn rejected_delete_leaves_the_entry_in_place() {
        let mut investments = vec![investment("10", "1", 100.0)];
        let outcome =
            settle_investment_delete(&mut investments, "10", Err("server exploded".to_string()));
        assert_eq!(
            outcome,
            Err(DeleteFailure::Other("server exploded".to_string()))
        );
        assert_eq!(investments.len(), 1);
    }

    #[test]
    fn confirmed_investor_delete_cascades_local_investments() {
        let mut investors = vec![investor("1", "A"), investor("2", "B")];
        let mut investments = vec![
            investment("10", "1", 100.0),
            investment("11", "1", 200.0),
            investment("12", "2", 300.0),
        ];
        let cascaded =
            settle_investor_delete(&mut investors, &mut investments, "1", Ok(())).unwrap();
        assert_eq!(cascaded, 2);
        assert_eq!(investors.len(), 1);
        assert_eq!(investors[0].id, "2");
        assert_eq!(investments.len(), 1);
        assert_eq!(investments[0].id, "12");
    }

    #[test]
    fn dependent_records_rejection_keeps_the_investor() {
        let mut investors = vec![investor("1", "A")];
        let mut investments = vec![investment("10", "1", 100.0)];
        let outcome = settle_investor_delete(
            &mut investors,
            &mut investments,
            "1",
            Err("Cannot delete investor with existing investments".to_string()),
        );
        assert!(matches!(outcome, Err(DeleteFailure::DependentRecords(_))));
        assert_eq!(investors.len(), 1);
        assert_eq!(investments.len(), 1);
    }

    #[test]
    fn a_failed_delete_can_simply_be_retried() {
        let mut investors = vec![investor("1", "A")];
        let mut investments = Vec::new();

        let first = settle_investor_delete(
            &mut investors,
            &mut investments,
            "1",
            Err("temporary outage".to_string()),
        );
        assert!(matches!(first, Err(DeleteFailure::Other(_))));
        assert_eq!(investors.len(), 1);

        let second = settle_investor_delete(&mut investors, &mut investments, "1", Ok(()));
        assert_eq!(second, Ok(0));
        assert!(investors.is_empty());
    }

    #[test]
    fn classify_discriminates_on_the_detail_substring() {
        assert!(matches!(
            DeleteFailure::classify("has 3 linked investments".to_string()),
            DeleteFailure::DependentRecords(_)
        ));
        assert!(matches!(
            DeleteFailure::classify("not found".to_string()),
            DeleteFailure::Other(_)
        ));
    }

    #[test]
    fn push_created_replaces_an_echoed_duplicate() {
        let mut investors = vec![investor("1", "A")];
        let mut renamed = investor("1", "A (updated)");
        renamed.relationship = Relationship::Spouse;
        push_created(&mut investors, renamed);
        assert_eq!(investors.len(), 1);
        assert_eq!(investors[0].name, "A (updated)");

        push_created(&mut investors, investor("2", "B"));
        assert_eq!(investors.len(), 2);
    }

    #[test]
    fn replace_updated_swaps_the_matching_entry() {
        let mut investors = vec![investor("1", "A"), investor("2", "B")];
        replace_updated(&mut investors, investor("2", "B renamed"));
        assert_eq!(investors[1].name, "B renamed");
        assert_eq!(investors.len(), 2);
    }
}
