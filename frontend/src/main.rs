use crate::app::App;

mod api;
mod app;
mod components;
mod fatal;
mod fields;
mod format;
mod sheet;
mod toast;

fn main() {
    fatal::install_failure_screen();
    yew::Renderer::<App>::new().render();
}
