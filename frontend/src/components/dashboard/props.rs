use yew::prelude::*;

use crate::app::Screen;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Emitted by the quick-action buttons to switch screens.
    pub on_navigate: Callback<Screen>,
}
