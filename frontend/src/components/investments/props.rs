use yew::prelude::*;

use crate::app::Screen;

#[derive(Properties, PartialEq, Clone)]
pub struct InvestmentsProps {
    /// Used by the add-investment shortcut.
    pub on_navigate: Callback<Screen>,
}
