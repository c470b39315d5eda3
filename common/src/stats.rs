//! Pure aggregation over the fetched collections.
//!
//! Everything here is a stateless recomputation: the views call these
//! functions on every render with whatever arrays they last fetched, and
//! there is no caching or invalidation to get wrong. Division by zero is
//! guarded throughout (an empty portfolio reports 0% shares and a zero
//! average, never `NaN`), and non-finite amounts count as zero.

use crate::model::investment::{Investment, InvestmentType};
use crate::model::investor::Investor;

/// Per-type slice of the portfolio.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeBreakdown {
    pub investment_type: InvestmentType,
    pub count: usize,
    pub total: f64,
    pub average: f64,
    /// This type's share of the grand total, in percent. Zero when the
    /// grand total is zero.
    pub share_pct: f64,
}

/// Per-investor totals, ordered by the ranking in [`rank_investors`].
#[derive(Clone, Debug, PartialEq)]
pub struct InvestorBreakdown {
    pub investor_id: String,
    pub investor_name: String,
    pub investment_count: usize,
    pub total_amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportTotals {
    pub total_investors: usize,
    pub total_investments: usize,
    pub total_portfolio_value: f64,
    pub average_per_investor: f64,
}

/// Everything the reports screen renders, derived in one pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioReport {
    pub totals: ReportTotals,
    pub by_investor: Vec<InvestorBreakdown>,
    pub by_type: Vec<TypeBreakdown>,
}

fn safe_amount(amount: f64) -> f64 {
    if amount.is_finite() { amount } else { 0.0 }
}

/// Sum of all investment amounts.
pub fn portfolio_total(investments: &[Investment]) -> f64 {
    investments.iter().map(|inv| safe_amount(inv.amount)).sum()
}

/// Groups investments by type, in order of first appearance.
pub fn by_type(investments: &[Investment]) -> Vec<TypeBreakdown> {
    let grand_total = portfolio_total(investments);
    let mut groups: Vec<TypeBreakdown> = Vec::new();

    for investment in investments {
        let amount = safe_amount(investment.amount);
        match groups
            .iter_mut()
            .find(|g| g.investment_type == investment.investment_type)
        {
            Some(group) => {
                group.count += 1;
                group.total += amount;
            }
            None => groups.push(TypeBreakdown {
                investment_type: investment.investment_type,
                count: 1,
                total: amount,
                average: 0.0,
                share_pct: 0.0,
            }),
        }
    }

    for group in &mut groups {
        group.average = group.total / group.count as f64;
        group.share_pct = if grand_total > 0.0 {
            group.total / grand_total * 100.0
        } else {
            0.0
        };
    }
    groups
}

/// Per-investor count and total, sorted descending by total. The sort is
/// stable, so investors with equal totals keep their original order.
/// Investors without investments rank last with a zero total.
pub fn rank_investors(investors: &[Investor], investments: &[Investment]) -> Vec<InvestorBreakdown> {
    let mut ranking: Vec<InvestorBreakdown> = investors
        .iter()
        .map(|investor| {
            let owned = investments.iter().filter(|inv| inv.investor_id == investor.id);
            let (count, total) = owned.fold((0usize, 0.0f64), |(count, total), inv| {
                (count + 1, total + safe_amount(inv.amount))
            });
            InvestorBreakdown {
                investor_id: investor.id.clone(),
                investor_name: investor.name.clone(),
                investment_count: count,
                total_amount: total,
            }
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.total_amount
            .partial_cmp(&a.total_amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranking
}

/// The `n` most recently created investments, newest first. Entries with
/// equal timestamps keep their original relative order.
pub fn recent(investments: &[Investment], n: usize) -> Vec<Investment> {
    let mut sorted: Vec<Investment> = investments.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}

/// Builds the full report for the reports screen.
pub fn report(investors: &[Investor], investments: &[Investment]) -> PortfolioReport {
    let total_portfolio_value = portfolio_total(investments);
    let average_per_investor = if investors.is_empty() {
        0.0
    } else {
        total_portfolio_value / investors.len() as f64
    };

    PortfolioReport {
        totals: ReportTotals {
            total_investors: investors.len(),
            total_investments: investments.len(),
            total_portfolio_value,
            average_per_investor,
        },
        by_investor: rank_investors(investors, investments),
        by_type: by_type(investments),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::model::investor::Relationship;

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn investor(id: &str, name: &str) -> Investor {
        Investor {
            id: id.to_string(),
            name: name.to_string(),
            relationship: Relationship::Myself,
            email: None,
            phone: None,
            address: None,
            pan_number: None,
            date_of_birth: None,
            occupation: None,
            photo_url: None,
            custom_fields: BTreeMap::new(),
            created_at: ts(1, 0),
            updated_at: ts(1, 0),
        }
    }

    fn investment(id: &str, owner: &str, kind: InvestmentType, amount: f64, day: u32) -> Investment {
        Investment {
            id: id.to_string(),
            investor_id: owner.to_string(),
            investment_name: format!("holding {id}"),
            investment_type: kind,
            amount,
            interest_rate: None,
            interest_date: None,
            purchase_date: None,
            maturity_date: None,
            description: None,
            issuer: None,
            photo_url: None,
            custom_fields: BTreeMap::new(),
            created_at: ts(day, 9),
            updated_at: ts(day, 9),
        }
    }

    #[test]
    fn group_totals_sum_to_the_portfolio_total() {
        let investments = vec![
            investment("a", "1", InvestmentType::Stocks, 120.5, 1),
            investment("b", "1", InvestmentType::Gold, 79.5, 2),
            investment("c", "2", InvestmentType::Stocks, 300.0, 3),
            investment("d", "2", InvestmentType::Ppf, 0.0, 4),
        ];
        let grouped_sum: f64 = by_type(&investments).iter().map(|g| g.total).sum();
        assert_eq!(grouped_sum, portfolio_total(&investments));
        assert_eq!(grouped_sum, 500.0);
    }

    #[test]
    fn zero_total_short_circuits_every_share_to_zero() {
        let investments = vec![
            investment("a", "1", InvestmentType::Stocks, 0.0, 1),
            investment("b", "1", InvestmentType::Bonds, 0.0, 2),
        ];
        for group in by_type(&investments) {
            assert_eq!(group.share_pct, 0.0);
            assert!(group.share_pct.is_finite());
        }
    }

    #[test]
    fn non_finite_amounts_count_as_zero() {
        let investments = vec![
            investment("a", "1", InvestmentType::Stocks, f64::NAN, 1),
            investment("b", "1", InvestmentType::Stocks, 100.0, 2),
        ];
        assert_eq!(portfolio_total(&investments), 100.0);
        let groups = by_type(&investments);
        assert!(groups[0].total.is_finite());
        assert!(groups[0].share_pct.is_finite());
    }

    #[test]
    fn type_grouping_scenario() {
        let investments = vec![
            investment("a", "1", InvestmentType::Stocks, 100.0, 1),
            investment("b", "1", InvestmentType::Stocks, 300.0, 2),
            investment("c", "2", InvestmentType::Bonds, 200.0, 3),
        ];
        let groups = by_type(&investments);
        assert_eq!(groups.len(), 2);

        let stocks = &groups[0];
        assert_eq!(stocks.investment_type, InvestmentType::Stocks);
        assert_eq!(stocks.count, 2);
        assert_eq!(stocks.total, 400.0);
        assert_eq!(stocks.average, 200.0);
        assert_eq!((stocks.share_pct * 10.0).round() / 10.0, 66.7);

        let bonds = &groups[1];
        assert_eq!(bonds.count, 1);
        assert_eq!(bonds.total, 200.0);
        assert_eq!(bonds.average, 200.0);

        assert_eq!(portfolio_total(&investments), 600.0);
    }

    #[test]
    fn ranking_scenario_orders_by_total_descending() {
        let investors = vec![investor("1", "A"), investor("2", "B")];
        let investments = vec![
            investment("10", "1", InvestmentType::Stocks, 100.0, 1),
            investment("11", "2", InvestmentType::Bonds, 300.0, 2),
        ];
        let ranking = rank_investors(&investors, &investments);
        assert_eq!(ranking[0].investor_name, "B");
        assert_eq!(ranking[0].total_amount, 300.0);
        assert_eq!(ranking[1].investor_name, "A");
        assert_eq!(ranking[1].total_amount, 100.0);
        assert_eq!(portfolio_total(&investments), 400.0);
    }

    #[test]
    fn ranking_is_stable_for_equal_totals() {
        let investors = vec![
            investor("1", "First"),
            investor("2", "Second"),
            investor("3", "Third"),
        ];
        let investments = vec![
            investment("a", "1", InvestmentType::Gold, 250.0, 1),
            investment("b", "2", InvestmentType::Gold, 250.0, 2),
            investment("c", "3", InvestmentType::Gold, 250.0, 3),
        ];
        let names: Vec<String> = rank_investors(&investors, &investments)
            .into_iter()
            .map(|r| r.investor_name)
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn recent_returns_newest_first_and_respects_the_limit() {
        let investments = vec![
            investment("old", "1", InvestmentType::Stocks, 1.0, 1),
            investment("mid", "1", InvestmentType::Stocks, 2.0, 5),
            investment("new", "1", InvestmentType::Stocks, 3.0, 9),
        ];
        let latest = recent(&investments, 2);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].id, "new");
        assert_eq!(latest[1].id, "mid");
    }

    #[test]
    fn report_averages_guard_against_zero_investors() {
        let report = report(&[], &[]);
        assert_eq!(report.totals.average_per_investor, 0.0);
        assert!(report.totals.average_per_investor.is_finite());
        assert!(report.by_investor.is_empty());
        assert!(report.by_type.is_empty());
    }

    #[test]
    fn report_combines_totals_and_breakdowns() {
        let investors = vec![investor("1", "A"), investor("2", "B")];
        let investments = vec![
            investment("10", "1", InvestmentType::Stocks, 100.0, 1),
            investment("11", "2", InvestmentType::Bonds, 300.0, 2),
        ];
        let report = report(&investors, &investments);
        assert_eq!(report.totals.total_investors, 2);
        assert_eq!(report.totals.total_investments, 2);
        assert_eq!(report.totals.total_portfolio_value, 400.0);
        assert_eq!(report.totals.average_per_investor, 200.0);
        assert_eq!(report.by_investor[0].investor_name, "B");
        assert_eq!(report.by_type.len(), 2);
    }
}
