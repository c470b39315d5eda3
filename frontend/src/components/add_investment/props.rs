use yew::prelude::*;

use crate::app::Screen;

#[derive(Properties, PartialEq, Clone)]
pub struct AddInvestmentProps {
    /// Where to go after a successful save, on cancel, and from the
    /// no-investors empty state.
    pub on_navigate: Callback<Screen>,
}
