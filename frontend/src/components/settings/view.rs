use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::custom_field::{CustomField, EntityKind, FieldKind};

use crate::sheet::Sheet;

use super::messages::Msg;
use super::state::SettingsComponent;

pub fn view(component: &SettingsComponent, ctx: &Context<SettingsComponent>) -> Html {
    if component.loading {
        return html! { <div class="loading-spinner" /> };
    }

    let link = ctx.link();

    html! {
        <div class="screen settings">
            <div class="screen-header">
                <div>
                    <h1>{"Settings & Configuration"}</h1>
                    <p class="screen-subtitle">{"Custom fields for investors and investments"}</p>
                </div>
                <button class="primary-btn" onclick={link.callback(|_| Msg::OpenForm)}>
                    {"Add Custom Field"}
                </button>
            </div>

            <div class="card">
                <h3>{"Investor Custom Fields"}</h3>
                { field_list(link, &component.investor_fields, EntityKind::Investor) }
            </div>

            <div class="card">
                <h3>{"Investment Custom Fields"}</h3>
                { field_list(link, &component.investment_fields, EntityKind::Investment) }
            </div>

            { form_sheet(component, link) }
        </div>
    }
}

fn field_list(
    link: &Scope<SettingsComponent>,
    fields: &[CustomField],
    entity: EntityKind,
) -> Html {
    if fields.is_empty() {
        let noun = match entity {
            EntityKind::Investor => "investors",
            EntityKind::Investment => "investments",
        };
        return html! {
            <p class="muted">{ format!("No custom fields defined for {noun}") }</p>
        };
    }

    html! {
        <div class="row-list">
            {
                for fields.iter().map(|field| {
                    let id = field.id.clone();
                    html! {
                        <div class="entity-row">
                            <div class="entity-row-main">
                                <h4>{ field.field_name.clone() }</h4>
                                <p class="muted">
                                    { field.field_type.label() }
                                    {
                                        if field.is_required {
                                            " • required"
                                        } else {
                                            ""
                                        }
                                    }
                                    {
                                        if field.options.is_empty() {
                                            String::new()
                                        } else {
                                            format!(" • {}", field.options.join(", "))
                                        }
                                    }
                                </p>
                            </div>
                            <button
                                class="danger-btn"
                                onclick={link.callback(move |_| Msg::Delete {
                                    id: id.clone(),
                                    entity,
                                })}
                            >
                                {"Delete"}
                            </button>
                        </div>
                    }
                })
            }
        </div>
    }
}

fn form_sheet(component: &SettingsComponent, link: &Scope<SettingsComponent>) -> Html {
    let form = &component.form;

    html! {
        <Sheet node_ref={component.sheet_ref.clone()}>
            <div class="sheet-body">
                <div class="sheet-header">
                    <h3>{"Add Custom Field"}</h3>
                    <button onclick={link.callback(|_| Msg::CloseForm)}>{"Close"}</button>
                </div>
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <div class="form-grid">
                        <label class="form-field">
                            <span>{"Apply To"}</span>
                            <select onchange={link.callback(|e: Event| {
                                let entity = match select_value(&e).as_str() {
                                    "investment" => EntityKind::Investment,
                                    _ => EntityKind::Investor,
                                };
                                Msg::EntityChanged(entity)
                            })}>
                                <option
                                    value="investor"
                                    selected={form.entity_type == EntityKind::Investor}
                                >
                                    {"Investors"}
                                </option>
                                <option
                                    value="investment"
                                    selected={form.entity_type == EntityKind::Investment}
                                >
                                    {"Investments"}
                                </option>
                            </select>
                        </label>
                        <label class="form-field">
                            <span>{"Field Name"}</span>
                            <input
                                placeholder="e.g., Risk Level, Investment Goal"
                                value={form.field_name.clone()}
                                oninput={link.callback(|e: InputEvent| {
                                    Msg::NameChanged(input_value(&e))
                                })}
                            />
                        </label>
                        <label class="form-field">
                            <span>{"Field Type"}</span>
                            <select onchange={link.callback(|e: Event| {
                                let value = select_value(&e).to_lowercase();
                                Msg::KindChanged(
                                    FieldKind::parse(&value).unwrap_or(FieldKind::Text),
                                )
                            })}>
                                {
                                    for FieldKind::ALL.iter().map(|kind| html! {
                                        <option
                                            value={kind.label().to_lowercase()}
                                            selected={form.field_type == *kind}
                                        >
                                            { kind.label() }
                                        </option>
                                    })
                                }
                            </select>
                        </label>
                        {
                            if form.field_type == FieldKind::Dropdown {
                                html! {
                                    <label class="form-field">
                                        <span>{"Options (comma separated)"}</span>
                                        <input
                                            placeholder="Low, Medium, High"
                                            value={form.options_raw.clone()}
                                            oninput={link.callback(|e: InputEvent| {
                                                Msg::OptionsChanged(input_value(&e))
                                            })}
                                        />
                                    </label>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <label class="form-field checkbox-field">
                            <input
                                type="checkbox"
                                checked={form.is_required}
                                onchange={link.callback(|e: Event| {
                                    Msg::RequiredToggled(checkbox_checked(&e))
                                })}
                            />
                            <span>{"Required Field"}</span>
                        </label>
                    </div>
                    <button type="submit" class="primary-btn full-width">
                        {"Add Custom Field"}
                    </button>
                </form>
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

fn checkbox_checked(event: &Event) -> bool {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false)
}
