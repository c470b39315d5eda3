use yew::prelude::*;

use common::stats;

use crate::app::Screen;
use crate::format::{inr, percent};

use super::messages::Msg;
use super::state::DashboardComponent;

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    if component.loading && component.stats.is_none() {
        return html! { <div class="loading-spinner" /> };
    }

    let link = ctx.link();
    let on_navigate = &ctx.props().on_navigate;

    let (total_investors, total_investments, total_value) = match &component.stats {
        Some(stats) => (
            stats.total_investors,
            stats.total_investments,
            stats.total_portfolio_value,
        ),
        // Stats endpoint unavailable: fall back to the fetched collections.
        None => (
            component.investors.len() as u64,
            component.investments.len() as u64,
            stats::portfolio_total(&component.investments),
        ),
    };

    let distribution = stats::by_type(&component.investments);
    let top_investors = stats::rank_investors(&component.investors, &component.investments);
    let recent = stats::recent(&component.investments, 5);

    html! {
        <div class="screen dashboard">
            <div class="screen-header">
                <div>
                    <h1>{"Investment Portfolio Dashboard"}</h1>
                    <p class="screen-subtitle">{"Family wealth overview"}</p>
                </div>
                <button
                    class="primary-btn"
                    onclick={nav_callback(on_navigate, Screen::AddInvestment)}
                >
                    {"Add Investment"}
                </button>
            </div>

            <div class="stat-cards">
                <div class="card stat-card">
                    <h3>{"Investors"}</h3>
                    <div class="stat-value">{ total_investors }</div>
                    <p class="stat-hint">{"Family members tracked"}</p>
                </div>
                <div class="card stat-card">
                    <h3>{"Total Investments"}</h3>
                    <div class="stat-value">{ total_investments }</div>
                    <p class="stat-hint">{"Investment records"}</p>
                </div>
                <div class="card stat-card">
                    <h3>{"Portfolio Value"}</h3>
                    <div class="stat-value">{ inr(total_value) }</div>
                    <p class="stat-hint">{"Across all holdings"}</p>
                </div>
            </div>

            <div class="card">
                <h3>{"Quick Actions"}</h3>
                <div class="quick-actions">
                    <button onclick={nav_callback(on_navigate, Screen::Investors)}>
                        {"Manage Investors"}
                    </button>
                    <button onclick={nav_callback(on_navigate, Screen::Investments)}>
                        {"View Investments"}
                    </button>
                    <button onclick={nav_callback(on_navigate, Screen::Reports)}>
                        {"Open Reports"}
                    </button>
                    <button onclick={link.callback(|_| Msg::Refresh)}>
                        {"Refresh Data"}
                    </button>
                </div>
            </div>

            {
                if distribution.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="card">
                            <h3>{"Investment Types"}</h3>
                            <div class="type-grid">
                                {
                                    for distribution.iter().map(|group| html! {
                                        <div class="type-tile">
                                            <div class="type-count">{ group.count }</div>
                                            <div class="type-name">{ group.investment_type.as_str() }</div>
                                            <div class="type-share">{ percent(group.share_pct) }</div>
                                        </div>
                                    })
                                }
                            </div>
                        </div>
                    }
                }
            }

            {
                if top_investors.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="card">
                            <h3>{"Top Investors"}</h3>
                            <ul class="ranking-list">
                                {
                                    for top_investors.iter().take(3).map(|entry| html! {
                                        <li>
                                            <span class="ranking-name">{ entry.investor_name.clone() }</span>
                                            <span class="ranking-total">{ inr(entry.total_amount) }</span>
                                        </li>
                                    })
                                }
                            </ul>
                        </div>
                    }
                }
            }

            {
                if recent.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="card">
                            <div class="card-header-row">
                                <h3>{"Recent Investments"}</h3>
                                <button onclick={nav_callback(on_navigate, Screen::Investments)}>
                                    {"View All"}
                                </button>
                            </div>
                            <div class="recent-list">
                                {
                                    for recent.iter().map(|investment| html! {
                                        <div class="recent-row">
                                            <div>
                                                <h4>{ investment.investment_name.clone() }</h4>
                                                <p class="muted">
                                                    { component.investor_name(&investment.investor_id).to_string() }
                                                    { " • " }
                                                    { investment.investment_type.as_str() }
                                                </p>
                                            </div>
                                            <div class="recent-amount">
                                                <p>{ inr(investment.amount) }</p>
                                                <p class="muted">
                                                    { investment.created_at.format("%d %b %Y").to_string() }
                                                </p>
                                            </div>
                                        </div>
                                    })
                                }
                            </div>
                        </div>
                    }
                }
            }
        </div>
    }
}

fn nav_callback(on_navigate: &Callback<Screen>, screen: Screen) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |_| on_navigate.emit(screen))
}
