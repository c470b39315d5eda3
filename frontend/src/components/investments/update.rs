use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::sync::{self, DeleteFailure};

use crate::api;
use crate::sheet::{close_sheet, open_sheet};
use crate::toast::{show_error, show_success};

use super::messages::Msg;
use super::state::InvestmentsComponent;

pub fn update(
    component: &mut InvestmentsComponent,
    ctx: &Context<InvestmentsComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded {
            investments,
            investors,
        } => {
            component.investments = investments;
            component.investors = investors;
            component.loading = false;
            true
        }
        Msg::LoadFailed(detail) => {
            component.loading = false;
            gloo_console::error!(format!("investments load failed: {detail}"));
            show_error("Failed to load investments");
            true
        }

        Msg::SearchChanged(term) => {
            component.search = term;
            true
        }
        Msg::InvestorFilterChanged(investor_id) => {
            component.investor_filter = investor_id;
            true
        }
        Msg::TypeFilterChanged(kind) => {
            component.type_filter = kind;
            true
        }

        Msg::RequestDelete(investment) => {
            component.pending_delete = Some(investment);
            open_sheet(component.confirm_ref.clone());
            true
        }
        Msg::CancelDelete => {
            component.pending_delete = None;
            close_sheet(component.confirm_ref.clone());
            true
        }
        Msg::ConfirmDelete => {
            let Some(investment) = component.pending_delete.take() else {
                return false;
            };
            close_sheet(component.confirm_ref.clone());

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::investments::delete(&investment.id)
                    .await
                    .map_err(|err| err.detail());
                link.send_message(Msg::DeleteSettled {
                    id: investment.id,
                    label: investment.investment_name,
                    result,
                });
            });
            true
        }
        Msg::DeleteSettled { id, label, result } => {
            match sync::settle_investment_delete(&mut component.investments, &id, result) {
                Ok(()) => show_success(&format!("{label} deleted successfully")),
                Err(DeleteFailure::DependentRecords(detail))
                | Err(DeleteFailure::Other(detail)) => {
                    gloo_console::error!(format!("investment delete failed: {detail}"));
                    show_error(&format!("Failed to delete {label}: {detail}"));
                }
            }
            true
        }
    }
}

pub fn fetch(link: Scope<InvestmentsComponent>) {
    spawn_local(async move {
        let investments = api::investments::list(None, None).await;
        let investors = api::investors::list().await;
        match (investments, investors) {
            (Ok(investments), Ok(investors)) => link.send_message(Msg::Loaded {
                investments,
                investors,
            }),
            (Err(err), _) | (_, Err(err)) => link.send_message(Msg::LoadFailed(err.detail())),
        }
    });
}
