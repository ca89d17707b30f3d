use dispatcher::{Error, FormDispatcher, Notifier};
use dom::WebDocument;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{console, Document, Window};

/// A notifier showing a blocking alert dialog.
struct AlertNotifier(Window);

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) -> Result<(), Error> {
        self.0
            .alert_with_message(message)
            .map_err(|error| Error::Notify(format!("{error:?}")))
    }
}

/// Binds the form actions to the given document.
pub fn initialize(window: Window, document: Document) {
    let bindings =
        FormDispatcher::new(AlertNotifier(window)).initialize(&WebDocument::new(document));

    console::debug_1(&format!("Bound {} form actions", bindings.len()).into());
}

/// Calls `initialize` exactly once after the markup of the page finished loading.
pub fn on_ready(initialize: fn(Window, Document)) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;

    if document.ready_state() == "loading" {
        let target = document.clone();
        let callback = Closure::once_into_js(move || initialize(window, target));

        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    } else {
        initialize(window, document);
    }

    Ok(())
}
