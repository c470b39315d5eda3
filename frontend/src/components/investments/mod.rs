//! Investments screen: filterable list of holdings with
//! confirm-then-commit deletion.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::InvestmentsProps;
pub use state::InvestmentsComponent;

impl Component for InvestmentsComponent {
    type Message = Msg;
    type Properties = InvestmentsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        InvestmentsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            update::fetch(ctx.link().clone());
        }
    }
}
