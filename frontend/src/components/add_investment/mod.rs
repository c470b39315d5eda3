//! Add-investment screen: a creation form with validation at the submit
//! boundary. There is no edit counterpart; investments are created and
//! deleted only.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::{FormField, Msg};
pub use props::AddInvestmentProps;
pub use state::{AddInvestmentComponent, InvestmentForm};

impl Component for AddInvestmentComponent {
    type Message = Msg;
    type Properties = AddInvestmentProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AddInvestmentComponent::new()
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
