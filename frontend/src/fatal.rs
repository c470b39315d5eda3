use std::panic;

/// Installs a panic hook that swaps the page for a generic failure panel
/// with a reload button. Rendering panics cannot be recovered in place, so
/// a full reload is the only way forward.
pub fn install_failure_screen() {
    panic::set_hook(Box::new(|info| {
        gloo_console::error!(format!("fatal rendering failure: {info}"));

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(body) = document.body() {
                body.set_inner_html(
                    "<div class=\"fatal-panel\">\
                        <h1>Something went wrong</h1>\
                        <p>The page hit an unrecoverable error.</p>\
                        <button onclick=\"window.location.reload()\">Reload</button>\
                    </div>",
                );
            }
        }
    }));
}
