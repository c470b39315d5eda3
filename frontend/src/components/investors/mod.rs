//! Investors screen: searchable card list, add/edit dialog with dynamic
//! custom fields, and confirm-then-commit deletion.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::{FormField, Msg};
pub use state::{InvestorForm, InvestorsComponent};

impl Component for InvestorsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        InvestorsComponent::new()
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
