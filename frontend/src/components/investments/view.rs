use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::investment::{Investment, InvestmentType};

use crate::app::Screen;
use crate::format::inr;
use crate::sheet::Sheet;

use super::messages::Msg;
use super::state::InvestmentsComponent;

pub fn view(component: &InvestmentsComponent, ctx: &Context<InvestmentsComponent>) -> Html {
    if component.loading {
        return html! { <div class="loading-spinner" /> };
    }

    let link = ctx.link();
    let filtered = component.filtered();
    let filtered_total: f64 = filtered
        .iter()
        .map(|inv| if inv.amount.is_finite() { inv.amount } else { 0.0 })
        .sum();
    let on_navigate = ctx.props().on_navigate.clone();

    html! {
        <div class="screen investments">
            <div class="screen-header">
                <div>
                    <h1>{"Investments"}</h1>
                    <p class="screen-subtitle">{"All family holdings"}</p>
                </div>
                <button
                    class="primary-btn"
                    onclick={Callback::from(move |_| on_navigate.emit(Screen::AddInvestment))}
                >
                    {"Add Investment"}
                </button>
            </div>

            <div class="card">
                <h3>{"Filters & Search"}</h3>
                <div class="filter-row">
                    <input
                        class="search-input"
                        placeholder="Search investments..."
                        value={component.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SearchChanged(input_value(&e))
                        })}
                    />
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
                    <select onchange={link.callback(|e: Event| {
                        Msg::TypeFilterChanged(InvestmentType::parse(&select_value(&e)))
                    })}>
                        <option value="" selected={component.type_filter.is_none()}>
                            {"All Types"}
                        </option>
                        {
                            for component.types_present().into_iter().map(|kind| html! {
                                <option
                                    value={kind.as_str()}
                                    selected={component.type_filter == Some(kind)}
                                >
                                    { kind.as_str() }
                                </option>
                            })
                        }
                    </select>
                </div>
            </div>

            <div class="card">
                <div class="card-header-row">
                    <h3>{ format!("Holdings ({})", filtered.len()) }</h3>
                    <span class="filtered-total">{ format!("Total: {}", inr(filtered_total)) }</span>
                </div>
                {
                    if filtered.is_empty() {
                        html! {
                            <div class="empty-state">
                                <h3>{"No investments found"}</h3>
                                <p class="muted">{"Adjust the filters or add a new investment."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="row-list">
                                { for filtered.iter().map(|investment| investment_row(component, link, investment)) }
                            </div>
                        }
                    }
                }
            </div>

            { confirm_sheet(component, link) }
        </div>
    }
}

fn investment_row(
    component: &InvestmentsComponent,
    link: &Scope<InvestmentsComponent>,
    investment: &Investment,
) -> Html {
    let delete_target = (*investment).clone();

    html! {
        <div class="entity-row">
            <div class="entity-row-main">
                <h4>{ investment.investment_name.clone() }</h4>
                <p class="muted">
                    { component.investor_name(&investment.investor_id).to_string() }
                    { " • " }
                    { investment.investment_type.as_str() }
                    {
                        match &investment.issuer {
                            Some(issuer) => format!(" • {issuer}"),
                            None => String::new(),
                        }
                    }
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
                {
                    match investment.purchase_date {
                        Some(date) => html! {
                            <p class="muted">{ format!("Bought {}", date.format("%d/%m/%Y")) }</p>
                        },
                        None => html! {},
                    }
                }
            </div>
            <button
                class="danger-btn"
                onclick={link.callback(move |_| Msg::RequestDelete(delete_target.clone()))}
            >
                {"Delete"}
            </button>
        </div>
    }
}

fn confirm_sheet(component: &InvestmentsComponent, link: &Scope<InvestmentsComponent>) -> Html {
    let name = component
        .pending_delete
        .as_ref()
        .map(|investment| investment.investment_name.clone())
        .unwrap_or_default();

    html! {
        <Sheet node_ref={component.confirm_ref.clone()}>
            <div class="sheet-body confirm">
                <h3>{"Delete Investment"}</h3>
                <p>
                    { format!("Are you sure you want to delete {name}? This action cannot be undone.") }
                </p>
                <div class="confirm-actions">
                    <button onclick={link.callback(|_| Msg::CancelDelete)}>{"Cancel"}</button>
                    <button class="danger-btn" onclick={link.callback(|_| Msg::ConfirmDelete)}>
                        {"Delete"}
                    </button>
                </div>
            </div>
        </Sheet>
    }
}

fn input_value(event: &InputEvent) -> String {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

fn select_value(event: &Event) -> String {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}
