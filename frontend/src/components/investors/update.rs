use std::str::FromStr;

use chrono::NaiveDate;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::custom_field::EntityKind;
use common::model::investor::Investor;
use common::requests::InvestorPayload;
use common::sync::{self, DeleteFailure};

use crate::api;
use crate::fields::{is_valid_pan, validate_custom_fields};
use crate::sheet::{close_sheet, open_sheet};
use crate::toast::{show_error, show_success};

use super::messages::{FormField, Msg};
use super::state::{InvestorForm, InvestorsComponent};

pub fn update(
    component: &mut InvestorsComponent,
    ctx: &Context<InvestorsComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded {
            investors,
            investments,
            custom_fields,
        } => {
            component.investors = investors;
            component.investments = investments;
            component.custom_fields = custom_fields;
            component.loading = false;
            true
        }
        Msg::LoadFailed(detail) => {
            component.loading = false;
            gloo_console::error!(format!("investors load failed: {detail}"));
            show_error("Failed to load investors");
            true
        }
        Msg::SearchChanged(term) => {
            component.search = term;
            true
        }

        Msg::OpenCreate => {
            component.form = InvestorForm::default();
            component.baseline = component.form.fingerprint();
            component.editing = Some(None);
            open_sheet(component.editor_ref.clone());
            true
        }
        Msg::OpenEdit(investor) => {
            component.form = InvestorForm::from_investor(&investor);
            component.baseline = component.form.fingerprint();
            component.editing = Some(Some(investor));
            open_sheet(component.editor_ref.clone());
            true
        }
        Msg::CloseEditor => {
            component.editing = None;
            close_sheet(component.editor_ref.clone());
            true
        }
        Msg::FormChanged(field, value) => {
            apply_form_change(&mut component.form, field, value);
            true
        }
        Msg::CustomValueChanged(name, value) => {
            component.form.custom_values.insert(name, value);
            true
        }
        Msg::Submit => {
            submit(component, ctx);
            false
        }
        Msg::Saved { investor, updated } => {
            let name = investor.name.clone();
            if updated {
                sync::replace_updated(&mut component.investors, investor);
                show_success(&format!("{name} updated successfully"));
            } else {
                sync::push_created(&mut component.investors, investor);
                show_success(&format!("{name} added successfully"));
            }
            component.editing = None;
            close_sheet(component.editor_ref.clone());
            true
        }
        Msg::SaveFailed(detail) => {
            // Form state is kept so the user can correct and retry.
            gloo_console::error!(format!("investor save failed: {detail}"));
            show_error(&detail);
            false
        }

        Msg::RequestDelete(investor) => {
            component.pending_delete = Some(investor);
            open_sheet(component.confirm_ref.clone());
            true
        }
        Msg::CancelDelete => {
            component.pending_delete = None;
            close_sheet(component.confirm_ref.clone());
            true
        }
        Msg::ConfirmDelete => {
            let Some(investor) = component.pending_delete.take() else {
                return false;
            };
            close_sheet(component.confirm_ref.clone());

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::investors::delete(&investor.id)
                    .await
                    .map_err(|err| err.detail());
                link.send_message(Msg::DeleteSettled {
                    id: investor.id,
                    label: investor.name,
                    result,
                });
            });
            true
        }
        Msg::DeleteSettled { id, label, result } => {
            match sync::settle_investor_delete(
                &mut component.investors,
                &mut component.investments,
                &id,
                result,
            ) {
                Ok(_) => show_success(&format!("{label} deleted successfully")),
                Err(DeleteFailure::DependentRecords(_)) => show_error(&format!(
                    "Cannot delete {label}: has existing investments. Delete the investments first."
                )),
                Err(DeleteFailure::Other(detail)) => {
                    gloo_console::error!(format!("investor delete failed: {detail}"));
                    show_error(&format!("Failed to delete {label}: {detail}"));
                }
            }
            true
        }
    }
}

pub fn fetch(link: Scope<InvestorsComponent>) {
    spawn_local(async move {
        let investors = api::investors::list().await;
        let investments = api::investments::list(None, None).await;
        let custom_fields = api::custom_fields::list(EntityKind::Investor).await;
        match (investors, investments, custom_fields) {
            (Ok(investors), Ok(investments), Ok(custom_fields)) => {
                link.send_message(Msg::Loaded {
                    investors,
                    investments,
                    custom_fields,
                });
            }
            (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
                link.send_message(Msg::LoadFailed(err.detail()));
            }
        }
    });
}

fn apply_form_change(form: &mut InvestorForm, field: FormField, value: String) {
    match field {
        FormField::Name => form.name = value,
        FormField::Relationship => {
            if let Some(relationship) = common::model::investor::Relationship::parse(&value) {
                form.relationship = relationship;
            }
        }
        FormField::Email => form.email = value,
        FormField::Phone => form.phone = value,
        FormField::Address => form.address = value,
        FormField::PanNumber => form.pan_number = value,
        FormField::DateOfBirth => form.date_of_birth = value,
        FormField::Occupation => form.occupation = value,
        FormField::PhotoUrl => form.photo_url = value,
    }
}

fn submit(component: &InvestorsComponent, ctx: &Context<InvestorsComponent>) {
    let form = &component.form;

    if form.name.trim().is_empty() {
        show_error("Name is required");
        return;
    }
    let pan = form.pan_number.trim();
    if !pan.is_empty() && !is_valid_pan(pan) {
        show_error("PAN number must look like ABCDE1234F");
        return;
    }
    let date_of_birth = match opt(&form.date_of_birth) {
        Some(raw) => match NaiveDate::from_str(&raw) {
            Ok(date) => Some(date),
            Err(_) => {
                show_error("Date of birth must be a date (YYYY-MM-DD)");
                return;
            }
        },
        None => None,
    };
    let custom_fields =
        match validate_custom_fields(&component.custom_fields, &form.custom_values) {
            Ok(values) => values,
            Err(message) => {
                show_error(&message);
                return;
            }
        };

    let payload = InvestorPayload {
        name: form.name.trim().to_string(),
        relationship: form.relationship,
        email: opt(&form.email),
        phone: opt(&form.phone),
        address: opt(&form.address),
        pan_number: opt(&form.pan_number),
        date_of_birth,
        occupation: opt(&form.occupation),
        photo_url: opt(&form.photo_url),
        custom_fields,
    };

    let editing = component
        .editing
        .clone()
        .flatten()
        .map(|investor| investor.id);
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome: Result<(Investor, bool), String> = match editing {
            Some(id) => api::investors::update(&id, &payload)
                .await
                .map(|investor| (investor, true))
                .map_err(|err| err.detail()),
            None => api::investors::create(&payload)
                .await
                .map(|investor| (investor, false))
                .map_err(|err| err.detail()),
        };
        match outcome {
            Ok((investor, updated)) => link.send_message(Msg::Saved { investor, updated }),
            Err(detail) => link.send_message(Msg::SaveFailed(detail)),
        }
    });
}

fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
