use std::str::FromStr;

use chrono::NaiveDate;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::custom_field::EntityKind;
use common::model::investment::InvestmentType;
use common::requests::InvestmentPayload;

use crate::api;
use crate::app::Screen;
use crate::fields::{is_valid_ddmm, validate_custom_fields};
use crate::toast::{show_error, show_success};

use super::messages::{FormField, Msg};
use super::state::AddInvestmentComponent;

pub fn update(
    component: &mut AddInvestmentComponent,
    ctx: &Context<AddInvestmentComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded {
            investors,
            custom_fields,
        } => {
            component.investors = investors;
            component.custom_fields = custom_fields;
            component.loading = false;
            true
        }
        Msg::LoadFailed(detail) => {
            component.loading = false;
            gloo_console::error!(format!("add-investment load failed: {detail}"));
            show_error("Failed to load investors");
            true
        }
        Msg::FormChanged(field, value) => {
            apply_form_change(component, field, value);
            true
        }
        Msg::CustomValueChanged(name, value) => {
            component.form.custom_values.insert(name, value);
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            if let Some(payload) = build_payload(component) {
                component.submitting = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::investments::create(&payload).await {
                        Ok(investment) => link.send_message(Msg::Saved(investment)),
                        Err(err) => link.send_message(Msg::SaveFailed(err.detail())),
                    }
                });
                true
            } else {
                false
            }
        }
        Msg::Saved(investment) => {
            component.submitting = false;
            show_success(&format!(
                "Investment \"{}\" added successfully",
                investment.investment_name
            ));
            ctx.props().on_navigate.emit(Screen::Investments);
            true
        }
        Msg::SaveFailed(detail) => {
            // Form state is kept so the user can correct and retry.
            component.submitting = false;
            gloo_console::error!(format!("investment create failed: {detail}"));
            show_error(&detail);
            true
        }
    }
}

pub fn fetch(link: Scope<AddInvestmentComponent>) {
    spawn_local(async move {
        let investors = api::investors::list().await;
        let custom_fields = api::custom_fields::list(EntityKind::Investment).await;
        match (investors, custom_fields) {
            (Ok(investors), Ok(custom_fields)) => link.send_message(Msg::Loaded {
                investors,
                custom_fields,
            }),
            (Err(err), _) | (_, Err(err)) => link.send_message(Msg::LoadFailed(err.detail())),
        }
    });
}

fn apply_form_change(component: &mut AddInvestmentComponent, field: FormField, value: String) {
    let form = &mut component.form;
    match field {
        FormField::InvestorId => form.investor_id = value,
        FormField::InvestmentName => form.investment_name = value,
        FormField::InvestmentType => form.investment_type = value,
        FormField::Amount => form.amount = value,
        FormField::InterestRate => form.interest_rate = value,
        FormField::InterestDate => form.interest_date = value,
        FormField::PurchaseDate => form.purchase_date = value,
        FormField::MaturityDate => form.maturity_date = value,
        FormField::Description => form.description = value,
        FormField::Issuer => form.issuer = value,
    }
}

/// Validates the raw form and assembles the request body, reporting the
/// first problem as a toast.
fn build_payload(component: &AddInvestmentComponent) -> Option<InvestmentPayload> {
    let form = &component.form;

    if form.investor_id.is_empty() {
        show_error("Please select an investor");
        return None;
    }
    if form.investment_name.trim().is_empty() {
        show_error("Please enter an investment name");
        return None;
    }
    let Some(investment_type) = InvestmentType::parse(&form.investment_type) else {
        show_error("Please select an investment type");
        return None;
    };
    let amount = match form.amount.trim().parse::<f64>() {
        Ok(amount) if amount > 0.0 && amount.is_finite() => amount,
        _ => {
            show_error("Please enter a valid amount");
            return None;
        }
    };
    let interest_rate = match opt(&form.interest_rate) {
        Some(raw) => match raw.parse::<f64>() {
            Ok(rate) if rate >= 0.0 && rate.is_finite() => Some(rate),
            _ => {
                show_error("Interest rate must be a non-negative number");
                return None;
            }
        },
        None => None,
    };
    let interest_date = match opt(&form.interest_date) {
        Some(raw) => {
            if !is_valid_ddmm(&raw) {
                show_error("Interest date must be a 4-digit DDMM value");
                return None;
            }
            Some(raw)
        }
        None => None,
    };
    let purchase_date = match parse_date(&form.purchase_date, "Purchase date") {
        Ok(date) => date,
        Err(()) => return None,
    };
    let maturity_date = match parse_date(&form.maturity_date, "Maturity date") {
        Ok(date) => date,
        Err(()) => return None,
    };
    let custom_fields = match validate_custom_fields(&component.custom_fields, &form.custom_values)
    {
        Ok(values) => values,
        Err(message) => {
            show_error(&message);
            return None;
        }
    };

    Some(InvestmentPayload {
        investor_id: form.investor_id.clone(),
        investment_name: form.investment_name.trim().to_string(),
        investment_type,
        amount,
        interest_rate,
        interest_date,
        purchase_date,
        maturity_date,
        description: opt(&form.description),
        issuer: opt(&form.issuer),
        photo_url: None,
        custom_fields,
    })
}

fn parse_date(raw: &str, label: &str) -> Result<Option<NaiveDate>, ()> {
    match opt(raw) {
        Some(value) => match NaiveDate::from_str(&value) {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                show_error(&format!("{label} must be a date (YYYY-MM-DD)"));
                Err(())
            }
        },
        None => Ok(None),
    }
}

fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
