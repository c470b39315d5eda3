use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::custom_field::{EntityKind, FieldKind};
use common::requests::CustomFieldPayload;
use common::sync;

use crate::api;
use crate::sheet::{close_sheet, open_sheet};
use crate::toast::{show_error, show_success};

use super::messages::Msg;
use super::state::{FieldForm, SettingsComponent};

pub fn update(
    component: &mut SettingsComponent,
    ctx: &Context<SettingsComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded {
            investor_fields,
            investment_fields,
        } => {
            component.investor_fields = investor_fields;
            component.investment_fields = investment_fields;
            component.loading = false;
            true
        }
        Msg::LoadFailed(detail) => {
            component.loading = false;
            gloo_console::error!(format!("custom fields load failed: {detail}"));
            show_error("Failed to load custom fields");
            true
        }

        Msg::OpenForm => {
            component.form = FieldForm::default();
            open_sheet(component.sheet_ref.clone());
            true
        }
        Msg::CloseForm => {
            close_sheet(component.sheet_ref.clone());
            true
        }
        Msg::EntityChanged(entity) => {
            component.form.entity_type = entity;
            true
        }
        Msg::NameChanged(name) => {
            component.form.field_name = name;
            true
        }
        Msg::KindChanged(kind) => {
            component.form.field_type = kind;
            true
        }
        Msg::RequiredToggled(required) => {
            component.form.is_required = required;
            true
        }
        Msg::OptionsChanged(raw) => {
            component.form.options_raw = raw;
            true
        }
        Msg::Submit => {
            submit(component, ctx);
            false
        }
        Msg::Created(field) => {
            let entity = field.entity_type;
            sync::push_created(component.fields_for_mut(entity), field);
            close_sheet(component.sheet_ref.clone());
            show_success("Custom field added successfully");
            true
        }
        Msg::CreateFailed(detail) => {
            gloo_console::error!(format!("custom field create failed: {detail}"));
            show_error("Failed to add custom field");
            false
        }

        Msg::Delete { id, entity } => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::custom_fields::delete(&id)
                    .await
                    .map_err(|err| err.detail());
                link.send_message(Msg::DeleteSettled { id, entity, result });
            });
            false
        }
        Msg::DeleteSettled { id, entity, result } => {
            match sync::settle_custom_field_delete(component.fields_for_mut(entity), &id, result) {
                Ok(()) => show_success("Custom field deleted successfully"),
                Err(failure) => {
                    gloo_console::error!(format!(
                        "custom field delete failed: {}",
                        failure.detail()
                    ));
                    show_error("Failed to delete custom field");
                }
            }
            true
        }
    }
}

pub fn fetch(link: Scope<SettingsComponent>) {
    spawn_local(async move {
        let investor_fields = api::custom_fields::list(EntityKind::Investor).await;
        let investment_fields = api::custom_fields::list(EntityKind::Investment).await;
        match (investor_fields, investment_fields) {
            (Ok(investor_fields), Ok(investment_fields)) => link.send_message(Msg::Loaded {
                investor_fields,
                investment_fields,
            }),
            (Err(err), _) | (_, Err(err)) => link.send_message(Msg::LoadFailed(err.detail())),
        }
    });
}

fn submit(component: &SettingsComponent, ctx: &Context<SettingsComponent>) {
    let form = &component.form;

    if form.field_name.trim().is_empty() {
        show_error("Field name is required");
        return;
    }
    let options: Vec<String> = if form.field_type == FieldKind::Dropdown {
        let options: Vec<String> = form
            .options_raw
            .split(',')
            .map(|option| option.trim().to_string())
            .filter(|option| !option.is_empty())
            .collect();
        if options.is_empty() {
            show_error("Dropdown fields need at least one option");
            return;
        }
        options
    } else {
        Vec::new()
    };

    let payload = CustomFieldPayload {
        entity_type: form.entity_type,
        field_name: form.field_name.trim().to_string(),
        field_type: form.field_type,
        is_required: form.is_required,
        options,
    };

    let link = ctx.link().clone();
    spawn_local(async move {
        match api::custom_fields::create(&payload).await {
            Ok(field) => link.send_message(Msg::Created(field)),
            Err(err) => link.send_message(Msg::CreateFailed(err.detail())),
        }
    });
}
