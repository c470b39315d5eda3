use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::investment::InvestmentType;

use crate::api;
use crate::toast::show_error;

use super::messages::Msg;
use super::state::ReportsComponent;

pub fn update(component: &mut ReportsComponent, ctx: &Context<ReportsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::InvestorsLoaded(investors) => {
            component.investors = investors;
            true
        }
        Msg::InvestmentsLoaded(investments) => {
            component.investments = investments;
            component.loading = false;
            true
        }
        Msg::LoadFailed(detail) => {
            component.loading = false;
            gloo_console::error!(format!("reports load failed: {detail}"));
            show_error("Failed to load reports");
            true
        }
        Msg::ViewModeChanged(mode) => {
            component.view_mode = mode;
            true
        }
        Msg::InvestorFilterChanged(investor_id) => {
            component.investor_filter = investor_id;
            refetch(component, ctx);
            true
        }
        Msg::TypeFilterChanged(kind) => {
            component.type_filter = kind;
            refetch(component, ctx);
            true
        }
        Msg::ClearFilters => {
            component.investor_filter.clear();
            component.type_filter = None;
            refetch(component, ctx);
            true
        }
    }
}

fn refetch(component: &mut ReportsComponent, ctx: &Context<ReportsComponent>) {
    component.loading = true;
    let investor = if component.investor_filter.is_empty() {
        None
    } else {
        Some(component.investor_filter.clone())
    };
    fetch_investments(ctx.link().clone(), investor, component.type_filter);
}

pub fn fetch_investors(link: Scope<ReportsComponent>) {
    spawn_local(async move {
        match api::investors::list().await {
            Ok(investors) => link.send_message(Msg::InvestorsLoaded(investors)),
            Err(err) => link.send_message(Msg::LoadFailed(err.detail())),
        }
    });
}

/// Lists investments with the active filters pushed down to the backend.
pub fn fetch_investments(
    link: Scope<ReportsComponent>,
    investor_id: Option<String>,
    investment_type: Option<InvestmentType>,
) {
    spawn_local(async move {
        match api::investments::list(investor_id.as_deref(), investment_type).await {
            Ok(investments) => link.send_message(Msg::InvestmentsLoaded(investments)),
            Err(err) => link.send_message(Msg::LoadFailed(err.detail())),
        }
    });
}
