use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::custom_field::{CustomField, FieldKind};
use common::model::investment::InvestmentType;

use crate::app::Screen;

use super::messages::{FormField, Msg};
use super::state::AddInvestmentComponent;

pub fn view(component: &AddInvestmentComponent, ctx: &Context<AddInvestmentComponent>) -> Html {
    if component.loading {
        return html! { <div class="loading-spinner" /> };
    }

    let link = ctx.link();
    let back = ctx.props().on_navigate.clone();
    let form = &component.form;

    if component.investors.is_empty() {
        let to_investors = ctx.props().on_navigate.clone();
        return html! {
            <div class="screen add-investment">
                <div class="card empty-state">
                    <h3>{"No Investors Found"}</h3>
                    <p class="muted">{"Add investors before recording investments."}</p>
                    <button
                        class="primary-btn"
                        onclick={Callback::from(move |_| to_investors.emit(Screen::Investors))}
                    >
                        {"Add Investors First"}
                    </button>
                </div>
            </div>
        };
    }

    html! {
        <div class="screen add-investment">
            <div class="screen-header">
                <div>
                    <h1>{"Add New Investment"}</h1>
                    <p class="screen-subtitle">{"Record a holding for a family member"}</p>
                </div>
                <button onclick={Callback::from(move |_| back.emit(Screen::Investments))}>
                    {"Back to Investments"}
                </button>
            </div>

            <div class="card">
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <div class="form-grid">
                        <label class="form-field">
                            <span>{"Investor *"}</span>
                            <select onchange={link.callback(|e: Event| {
                                Msg::FormChanged(FormField::InvestorId, select_value(&e))
                            })}>
                                <option value="" selected={form.investor_id.is_empty()}>
                                    {"Select investor"}
                                </option>
                                {
                                    for component.investors.iter().map(|investor| html! {
                                        <option
                                            value={investor.id.clone()}
                                            selected={form.investor_id == investor.id}
                                        >
                                            { format!("{} ({})", investor.name, investor.relationship) }
                                        </option>
                                    })
                                }
                            </select>
                        </label>
                        <label class="form-field">
                            <span>{"Investment Type *"}</span>
                            <select onchange={link.callback(|e: Event| {
                                Msg::FormChanged(FormField::InvestmentType, select_value(&e))
                            })}>
                                <option value="" selected={form.investment_type.is_empty()}>
                                    {"Select investment type"}
                                </option>
                                {
                                    for InvestmentType::ALL.iter().map(|kind| html! {
                                        <option
                                            value={kind.as_str()}
                                            selected={form.investment_type == kind.as_str()}
                                        >
                                            { kind.as_str() }
                                        </option>
                                    })
                                }
                            </select>
                        </label>
                        { text_field(link, "Investment Name *", "e.g., HDFC Top 100 Fund", FormField::InvestmentName, &form.investment_name, "text") }
                        { text_field(link, "Issuer/Company", "e.g., HDFC Mutual Fund", FormField::Issuer, &form.issuer, "text") }
                        { text_field(link, "Investment Amount (₹) *", "50000", FormField::Amount, &form.amount, "number") }
                        { text_field(link, "Interest Rate (%)", "7.5", FormField::InterestRate, &form.interest_rate, "number") }
                        { text_field(link, "Interest Date (DDMM)", "0104", FormField::InterestDate, &form.interest_date, "text") }
                        { text_field(link, "Purchase Date", "", FormField::PurchaseDate, &form.purchase_date, "date") }
                        { text_field(link, "Maturity Date (if applicable)", "", FormField::MaturityDate, &form.maturity_date, "date") }
                        { for component.custom_fields.iter().map(|field| custom_field_input(link, field, component)) }
                    </div>
                    <label class="form-field">
                        <span>{"Description"}</span>
                        <textarea
                            rows="3"
                            placeholder="Additional details about this investment..."
                            value={form.description.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                Msg::FormChanged(FormField::Description, textarea_value(&e))
                            })}
                        />
                    </label>
                    <button
                        type="submit"
                        class="primary-btn full-width"
                        disabled={component.submitting}
                    >
                        { if component.submitting { "Creating Investment..." } else { "Create Investment" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

fn text_field(
    link: &Scope<AddInvestmentComponent>,
    label: &str,
    placeholder: &str,
    field: FormField,
    value: &str,
    input_type: &'static str,
) -> Html {
    html! {
        <label class="form-field">
            <span>{ label.to_string() }</span>
            <input
                type={input_type}
                placeholder={placeholder.to_string()}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::FormChanged(field, input_value(&e))
                })}
            />
        </label>
    }
}

fn custom_field_input(
    link: &Scope<AddInvestmentComponent>,
    field: &CustomField,
    component: &AddInvestmentComponent,
) -> Html {
    let name = field.field_name.clone();
    let value = component
        .form
        .custom_values
        .get(&field.field_name)
        .cloned()
        .unwrap_or_default();
    let label = if field.is_required {
        format!("{} *", field.field_name)
    } else {
        field.field_name.clone()
    };

    if field.field_type == FieldKind::Dropdown {
        return html! {
            <label class="form-field">
                <span>{ label }</span>
                <select onchange={link.callback(move |e: Event| {
                    Msg::CustomValueChanged(name.clone(), select_value(&e))
                })}>
                    <option value="" selected={value.is_empty()}>{"Select..."}</option>
                    {
                        for field.options.iter().map(|option| html! {
                            <option value={option.clone()} selected={*option == value}>
                                { option.clone() }
                            </option>
                        })
                    }
                </select>
            </label>
        };
    }

    html! {
        <label class="form-field">
            <span>{ label }</span>
            <input
                type={field.field_type.input_type()}
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    Msg::CustomValueChanged(name.clone(), input_value(&e))
                })}
            />
        </label>
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

fn textarea_value(event: &InputEvent) -> String {
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
        .unwrap_or_default()
}
