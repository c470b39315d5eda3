use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::custom_field::{CustomField, FieldKind};
use common::model::investor::{Investor, Relationship};

use crate::sheet::Sheet;

use super::messages::{FormField, Msg};
use super::state::InvestorsComponent;

pub fn view(component: &InvestorsComponent, ctx: &Context<InvestorsComponent>) -> Html {
    if component.loading {
        return html! { <div class="loading-spinner" /> };
    }

    let link = ctx.link();
    let filtered = component.filtered();

    html! {
        <div class="screen investors">
            <div class="screen-header">
                <div>
                    <h1>{"Investor Management"}</h1>
                    <p class="screen-subtitle">{"People and their contact details"}</p>
                </div>
                <button class="primary-btn" onclick={link.callback(|_| Msg::OpenCreate)}>
                    {"Add Investor"}
                </button>
            </div>

            <div class="card">
                <div class="card-header-row">
                    <h3>{ format!("Investors ({})", filtered.len()) }</h3>
                    <input
                        class="search-input"
                        placeholder="Search investors..."
                        value={component.search.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SearchChanged(input_value(&e))
                        })}
                    />
                </div>
                {
                    if filtered.is_empty() {
                        empty_state(component, link)
                    } else {
                        html! {
                            <div class="card-grid">
                                { for filtered.iter().map(|investor| investor_card(component, link, investor)) }
                            </div>
                        }
                    }
                }
            </div>

            { editor_sheet(component, link) }
            { confirm_sheet(component, link) }
        </div>
    }
}

fn empty_state(component: &InvestorsComponent, link: &Scope<InvestorsComponent>) -> Html {
    html! {
        <div class="empty-state">
            <h3>
                {
                    if component.search.is_empty() {
                        "No investors yet"
                    } else {
                        "No matching investors found"
                    }
                }
            </h3>
            <p class="muted">
                {
                    if component.search.is_empty() {
                        "Start by adding the first investor."
                    } else {
                        "Try adjusting the search term."
                    }
                }
            </p>
            {
                if component.search.is_empty() {
                    html! {
                        <button class="primary-btn" onclick={link.callback(|_| Msg::OpenCreate)}>
                            {"Add the first investor"}
                        </button>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn investor_card(
    component: &InvestorsComponent,
    link: &Scope<InvestorsComponent>,
    investor: &Investor,
) -> Html {
    let holdings = component.investment_count(&investor.id);
    let edit_target = investor.clone();
    let delete_target = investor.clone();

    html! {
        <div class="card entity-card">
            <div class="entity-card-top">
                {
                    match &investor.photo_url {
                        Some(url) => html! { <img class="avatar" src={url.clone()} alt={investor.name.clone()} /> },
                        None => html! {
                            <div class="avatar avatar-placeholder">
                                { investor.name.chars().next().unwrap_or('?').to_string() }
                            </div>
                        },
                    }
                }
                <div class="entity-card-title">
                    <h4>{ investor.name.clone() }</h4>
                    <p class="relationship">{ investor.relationship.as_str() }</p>
                </div>
                <div class="entity-card-actions">
                    <button onclick={link.callback(move |_| Msg::OpenEdit(edit_target.clone()))}>
                        {"Edit"}
                    </button>
                    <button
                        class="danger-btn"
                        onclick={link.callback(move |_| Msg::RequestDelete(delete_target.clone()))}
                    >
                        {"Delete"}
                    </button>
                </div>
            </div>
            <div class="entity-card-details">
                { detail_line("Email", investor.email.as_deref()) }
                { detail_line("Phone", investor.phone.as_deref()) }
                { detail_line("PAN", investor.pan_number.as_deref()) }
                { detail_line("Occupation", investor.occupation.as_deref()) }
                { detail_line("Address", investor.address.as_deref()) }
                {
                    for investor.custom_fields.iter().map(|(name, value)| {
                        html! {
                            <p class="detail-line">
                                <span class="detail-label">{ name.clone() }</span>
                                { value.to_string() }
                            </p>
                        }
                    })
                }
                <p class="detail-line muted">
                    { format!("{holdings} investment{}", if holdings == 1 { "" } else { "s" }) }
                </p>
            </div>
        </div>
    }
}

fn detail_line(label: &str, value: Option<&str>) -> Html {
    match value {
        Some(value) => html! {
            <p class="detail-line">
                <span class="detail-label">{ label.to_string() }</span>
                { value.to_string() }
            </p>
        },
        None => html! {},
    }
}

fn editor_sheet(component: &InvestorsComponent, link: &Scope<InvestorsComponent>) -> Html {
    let is_update = matches!(component.editing, Some(Some(_)));
    let form = &component.form;

    html! {
        <Sheet node_ref={component.editor_ref.clone()}>
            <div class="sheet-body">
                <div class="sheet-header">
                    <h3>
                        { if is_update { "Edit Investor" } else { "Add New Investor" } }
                        {
                            if component.form_dirty() {
                                html! { <span class="dirty-dot" title="Unsaved changes" /> }
                            } else {
                                html! {}
                            }
                        }
                    </h3>
                    <button onclick={link.callback(|_| Msg::CloseEditor)}>{"Close"}</button>
                </div>
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <div class="form-grid">
                        { text_field(link, "Full Name *", "Enter full name", FormField::Name, &form.name, "text") }
                        <label class="form-field">
                            <span>{"Relationship"}</span>
                            <select onchange={link.callback(|e: Event| {
                                Msg::FormChanged(FormField::Relationship, select_value(&e))
                            })}>
                                {
                                    for Relationship::ALL.iter().map(|relationship| html! {
                                        <option
                                            value={relationship.as_str()}
                                            selected={*relationship == form.relationship}
                                        >
                                            { relationship.as_str() }
                                        </option>
                                    })
                                }
                            </select>
                        </label>
                        { text_field(link, "Email Address", "Email address", FormField::Email, &form.email, "email") }
                        { text_field(link, "Phone Number", "Phone number", FormField::Phone, &form.phone, "tel") }
                        { text_field(link, "PAN Number", "PAN Number (ABCDE1234F)", FormField::PanNumber, &form.pan_number, "text") }
                        { text_field(link, "Date of Birth", "", FormField::DateOfBirth, &form.date_of_birth, "date") }
                        { text_field(link, "Address", "Full address", FormField::Address, &form.address, "text") }
                        { text_field(link, "Occupation", "Occupation/Business", FormField::Occupation, &form.occupation, "text") }
                        { text_field(link, "Photo URL", "Photo URL (optional)", FormField::PhotoUrl, &form.photo_url, "text") }
                        { for component.custom_fields.iter().map(|field| custom_field_input(link, field, form)) }
                    </div>
                    <button type="submit" class="primary-btn full-width">
                        { if is_update { "Update Investor" } else { "Add Investor" } }
                    </button>
                </form>
            </div>
        </Sheet>
    }
}

fn text_field(
    link: &Scope<InvestorsComponent>,
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
    link: &Scope<InvestorsComponent>,
    field: &CustomField,
    form: &super::state::InvestorForm,
) -> Html {
    let name = field.field_name.clone();
    let value = form
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

fn confirm_sheet(component: &InvestorsComponent, link: &Scope<InvestorsComponent>) -> Html {
    let (name, holdings) = match &component.pending_delete {
        Some(investor) => (
            investor.name.clone(),
            component.investment_count(&investor.id),
        ),
        None => (String::new(), 0),
    };

    html! {
        <Sheet node_ref={component.confirm_ref.clone()}>
            <div class="sheet-body confirm">
                <h3>{"Delete Investor"}</h3>
                <p>
                    { format!("Are you sure you want to delete {name}? This action cannot be undone.") }
                </p>
                {
                    if holdings > 0 {
                        html! {
                            <p class="warning">
                                { format!(
                                    "{name} has {holdings} investment{}; the backend will refuse this delete until they are removed.",
                                    if holdings == 1 { "" } else { "s" }
                                ) }
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
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
