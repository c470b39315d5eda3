//! Reports screen: portfolio summary, investor ranking, and type
//! distribution derived from the fetched collections, with server-side
//! investor/type filters and three presentation modes.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{ReportsComponent, ViewMode};

impl Component for ReportsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ReportsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::fetch_investors(ctx.link().clone());
            update::fetch_investments(ctx.link().clone(), None, None);
        }
    }
}
