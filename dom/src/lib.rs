//! The `dom` crate abstracts the document scope the form handlers are bound to.

mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

pub use memory::{ClickReport, ElementKind, MemoryDocument, MemoryElement};
#[cfg(target_arch = "wasm32")]
pub use web::{WebDocument, WebElement};

/// The error returned by a click handler, left uncaught by the document.
pub type HandlerError = Box<dyn std::error::Error>;

/// A click handler registered on an element.
pub type ClickHandler = Box<dyn FnMut() -> Result<(), HandlerError>>;

/// A scope of elements addressable by their identifier.
pub trait Document: Clone + 'static {
    /// The element type of this document.
    type Element: Element;

    /// Returns the first element in document order carrying the given id.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Reads the current value of the element with the given id, `None` if it has no value.
    ///
    /// # Errors
    ///
    /// Returns an error if no element carries the id.
    fn value_of(&self, id: &str) -> Result<Option<String>, Error> {
        self.element_by_id(id)
            .map(|element| element.value())
            .ok_or_else(|| Error::MissingElement(id.to_owned()))
    }
}

/// An element of a document.
pub trait Element {
    /// Returns the id of the element.
    fn id(&self) -> String;

    /// Returns the current value of the element.
    ///
    /// Elements without a value, like a `div`, return `None` instead of failing.
    fn value(&self) -> Option<String>;

    /// Registers a handler invoked on every click of the element.
    ///
    /// # Errors
    ///
    /// Returns an error if the handler could not be registered.
    fn add_click_handler(&self, handler: ClickHandler) -> Result<(), Error>;
}

/// The error type for errors regarding document access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No element with the id exists.
    #[error("no element with id `{0}` exists")]
    MissingElement(String),
    /// The element does not accept a value.
    #[error("element `{0}` is not a form control")]
    NotAFormControl(String),
    /// A click handler could not be registered.
    #[error("failed to register click handler on `{id}`: {reason}")]
    Listener {
        /// The id of the element.
        id: String,
        /// The reason given by the document.
        reason: String,
    },
}
