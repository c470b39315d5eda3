use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Sliding sheet used for forms and delete confirmations. Visibility is
/// toggled by adding or removing the `show` class on the sheet node.
pub struct Sheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for Sheet {
    type Message = ();
    type Properties = SheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_sheet(sheet_ref: NodeRef) {
    toggle_class(sheet_ref, "add");
}

pub fn close_sheet(sheet_ref: NodeRef) {
    toggle_class(sheet_ref, "remove");
}

// The class flip runs through a deferred callback so the transition fires
// after the node is laid out.
fn toggle_class(sheet_ref: NodeRef, action: &str) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "var el = document.querySelector('#{}'); if (el) el.classList.{}('show')",
            sheet.id(),
            action
        ));
        if let Some(window) = web_sys::window() {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50)
                .ok();
        }
    }
}
