use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::js_sys;

use crate::{ClickHandler, Document, Element, Error};

/// A browser document.
#[derive(Clone)]
pub struct WebDocument(web_sys::Document);

impl WebDocument {
    /// Wraps the given browser document.
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self(document)
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }
}

/// An element of a browser document.
#[derive(Clone)]
pub struct WebElement(web_sys::Element);

impl Element for WebElement {
    fn id(&self) -> String {
        self.0.id()
    }

    fn value(&self) -> Option<String> {
        // Any element may carry a `value` property, e.g. `output`, `li` or `progress`
        let value = js_sys::Reflect::get(&self.0, &JsValue::from_str("value")).ok()?;

        if let Some(text) = value.as_string() {
            Some(text)
        } else if let Some(number) = value.as_f64() {
            js_sys::Number::from(number)
                .to_string(10)
                .ok()
                .map(String::from)
        } else {
            None
        }
    }

    fn add_click_handler(&self, mut handler: ClickHandler) -> Result<(), Error> {
        // A returned error is thrown as an uncaught exception of the event dispatch
        let callback = Closure::<dyn FnMut(web_sys::Event) -> Result<(), JsValue>>::wrap(
            Box::new(move |_event| {
                handler().map_err(|error| JsValue::from(js_sys::Error::new(&error.to_string())))
            }),
        );

        self.0
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|error| Error::Listener {
                id: self.0.id(),
                reason: format!("{error:?}"),
            })?;

        // The handler lives as long as the page
        callback.forget();

        Ok(())
    }
}
