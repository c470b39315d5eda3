use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::toast::show_error;

use super::messages::Msg;
use super::state::DashboardComponent;

pub fn update(
    component: &mut DashboardComponent,
    ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Refresh => {
            component.loading = true;
            fetch(ctx.link().clone());
            true
        }
        Msg::StatsLoaded(stats) => {
            component.stats = Some(stats);
            component.loading = false;
            true
        }
        Msg::CollectionsLoaded {
            investors,
            investments,
        } => {
            component.investors = investors;
            component.investments = investments;
            component.loading = false;
            true
        }
        Msg::LoadFailed(detail) => {
            component.loading = false;
            gloo_console::error!(format!("dashboard load failed: {detail}"));
            show_error("Failed to load dashboard data");
            true
        }
    }
}

/// Two independent fetches: the server headline and the collections the
/// local widgets aggregate over.
pub fn fetch(link: Scope<DashboardComponent>) {
    let stats_link = link.clone();
    spawn_local(async move {
        match api::dashboard::stats().await {
            Ok(stats) => stats_link.send_message(Msg::StatsLoaded(stats)),
            Err(err) => stats_link.send_message(Msg::LoadFailed(err.detail())),
        }
    });

    spawn_local(async move {
        let investors = api::investors::list().await;
        let investments = api::investments::list(None, None).await;
        match (investors, investments) {
            (Ok(investors), Ok(investments)) => link.send_message(Msg::CollectionsLoaded {
                investors,
                investments,
            }),
            (Err(err), _) | (_, Err(err)) => link.send_message(Msg::LoadFailed(err.detail())),
        }
    });
}
