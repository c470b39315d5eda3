use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::investment::{Investment, InvestmentType};
use common::stats;

use crate::format::{inr, percent};

use super::messages::Msg;
use super::state::{ReportsComponent, ViewMode};

pub fn view(component: &ReportsComponent, ctx: &Context<ReportsComponent>) -> Html {
    if component.loading && component.investments.is_empty() && component.investors.is_empty() {
        return html! { <div class="loading-spinner" /> };
    }

    let link = ctx.link();

    html! {
        <div class="screen reports">
            <div class="screen-header">
                <div>
                    <h1>{"Investment Reports"}</h1>
                    <p class="screen-subtitle">{"Portfolio analysis and insights"}</p>
                </div>
            </div>

            { filter_card(component, link) }

            {
                match component.view_mode {
                    ViewMode::Summary => summary_view(component),
                    ViewMode::List => list_view(component),
                    ViewMode::Table => table_view(component),
                }
            }
        </div>
    }
}

fn filter_card(component: &ReportsComponent, link: &Scope<ReportsComponent>) -> Html {
    html! {
        <div class="card">
            <h3>{"Report Filters & View Options"}</h3>
            <div class="filter-row">
                <label class="form-field">
                    <span>{"View Type"}</span>
                    <select onchange={link.callback(|e: Event| {
                        let value = select_value(&e);
                        Msg::ViewModeChanged(ViewMode::parse(&value).unwrap_or(ViewMode::Summary))
                    })}>
                        {
                            for ViewMode::ALL.iter().map(|mode| html! {
                                <option
                                    value={mode.label()}
                                    selected={component.view_mode == *mode}
                                >
                                    { mode.label() }
                                </option>
                            })
                        }
                    </select>
                </label>
                <label class="form-field">
                    <span>{"Filter by Investor"}</span>
                    <select onchange={link.callback(|e: Event| {
                        Msg::InvestorFilterChanged(select_value(&e))
                    })}>
                        <option value="" selected={component.investor_filter.is_empty()}>
                            {"All Investors"}
                        </option>
                        {
                            for component.investors.iter().map(|investor| html! {
                                <option
                                    value={investor.id.clone()}
                                    selected={component.investor_filter == investor.id}
                                >
                                    { investor.name.clone() }
                                </option>
                            })
                        }
                    </select>
                </label>
                <label class="form-field">
                    <span>{"Filter by Type"}</span>
                    <select onchange={link.callback(|e: Event| {
                        Msg::TypeFilterChanged(InvestmentType::parse(&select_value(&e)))
                    })}>
                        <option value="" selected={component.type_filter.is_none()}>
                            {"All Types"}
                        </option>
                        {
                            for InvestmentType::ALL.iter().map(|kind| html! {
                                <option
                                    value={kind.as_str()}
                                    selected={component.type_filter == Some(*kind)}
                                >
                                    { kind.as_str() }
                                </option>
                            })
                        }
                    </select>
                </label>
                <button onclick={link.callback(|_| Msg::ClearFilters)}>
                    {"Clear Filters"}
                </button>
            </div>
        </div>
    }
}

fn summary_view(component: &ReportsComponent) -> Html {
    let scoped = component.scoped_investors();
    let report = stats::report(&scoped, &component.investments);

    html! {
        <>
            <div class="card overview-card">
                <h3>{"Portfolio Overview"}</h3>
                <div class="stat-cards">
                    <div class="stat-card">
                        <div class="stat-value">{ report.totals.total_investors }</div>
                        <p class="stat-hint">{"Total Investors"}</p>
                    </div>
                    <div class="stat-card">
                        <div class="stat-value">{ report.totals.total_investments }</div>
                        <p class="stat-hint">{"Total Investments"}</p>
                    </div>
                    <div class="stat-card">
                        <div class="stat-value">{ inr(report.totals.total_portfolio_value) }</div>
                        <p class="stat-hint">{"Portfolio Value"}</p>
                    </div>
                    <div class="stat-card">
                        <div class="stat-value">{ inr(report.totals.average_per_investor) }</div>
                        <p class="stat-hint">{"Avg per Investor"}</p>
                    </div>
                </div>
            </div>

            <div class="card">
                <h3>{"Investor-wise Performance"}</h3>
                <div class="row-list">
                    {
                        for report.by_investor.iter().enumerate().map(|(index, entry)| html! {
                            <div class="entity-row">
                                <span class={if index < 3 { "rank-badge top" } else { "rank-badge" }}>
                                    { index + 1 }
                                </span>
                                <div class="entity-row-main">
                                    <h4>{ entry.investor_name.clone() }</h4>
                                    <p class="muted">
                                        { format!(
                                            "{} investment{}",
                                            entry.investment_count,
                                            if entry.investment_count == 1 { "" } else { "s" }
                                        ) }
                                    </p>
                                </div>
                                <p class="amount">{ inr(entry.total_amount) }</p>
                            </div>
                        })
                    }
                </div>
            </div>

            <div class="card">
                <h3>{"Investment Type Distribution"}</h3>
                <div class="type-grid">
                    {
                        for report.by_type.iter().map(|group| html! {
                            <div class="type-tile">
                                <div class="type-name">{ group.investment_type.as_str() }</div>
                                <div class="type-count">{ format!("{} holding{}", group.count, if group.count == 1 { "" } else { "s" }) }</div>
                                <div class="type-total">{ inr(group.total) }</div>
                                <div class="muted">{ format!("Avg: {}", inr(group.average)) }</div>
                                <div class="type-share">{ percent(group.share_pct) }</div>
                            </div>
                        })
                    }
                </div>
            </div>
        </>
    }
}

fn list_view(component: &ReportsComponent) -> Html {
    html! {
        <div class="card">
            <h3>{"Investment List"}</h3>
            <div class="row-list">
                { for component.investments.iter().map(|investment| list_row(component, investment)) }
            </div>
        </div>
    }
}

fn list_row(component: &ReportsComponent, investment: &Investment) -> Html {
    html! {
        <div class="entity-row">
            <div class="entity-row-main">
                <h4>{ investment.investment_name.clone() }</h4>
                <p class="muted">
                    { component.investor_name(&investment.investor_id).to_string() }
                    { " • " }
                    { investment.investment_type.as_str() }
                </p>
            </div>
            <div class="entity-row-figures">
                <p class="amount">{ inr(investment.amount) }</p>
                {
                    match investment.interest_rate {
                        Some(rate) => html! { <p class="muted">{ format!("{rate}% interest") }</p> },
                        None => html! {},
                    }
                }
            </div>
        </div>
    }
}

fn table_view(component: &ReportsComponent) -> Html {
    html! {
        <div class="card">
            <h3>{"Investment Table"}</h3>
            <table class="report-table">
                <thead>
                    <tr>
                        <th>{"Investment Name"}</th>
                        <th>{"Type"}</th>
                        <th>{"Investor"}</th>
                        <th>{"Amount"}</th>
                        <th>{"Interest Rate"}</th>
                        <th>{"Purchase Date"}</th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for component.investments.iter().map(|investment| html! {
                            <tr>
                                <td>{ investment.investment_name.clone() }</td>
                                <td>{ investment.investment_type.as_str() }</td>
                                <td>{ component.investor_name(&investment.investor_id).to_string() }</td>
                                <td>{ inr(investment.amount) }</td>
                                <td>
                                    {
                                        match investment.interest_rate {
                                            Some(rate) => format!("{rate}%"),
                                            None => "-".to_string(),
                                        }
                                    }
                                </td>
                                <td>
                                    {
                                        match investment.purchase_date {
                                            Some(date) => date.format("%d/%m/%Y").to_string(),
                                            None => "-".to_string(),
                                        }
                                    }
                                </td>
                            </tr>
                        })
                    }
                </tbody>
            </table>
        </div>
    }
}

fn select_value(event: &Event) -> String {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}
