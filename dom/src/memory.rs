use std::{cell::RefCell, rc::Rc};

use crate::{ClickHandler, Document, Element, Error, HandlerError};

/// The kind of an element in a memory document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// A single line input.
    Input,
    /// A multi-line text area.
    TextArea,
    /// A drop-down selection.
    Select,
    /// A button.
    Button,
    /// A container without a value, e.g. a `div`. Reading its value yields nothing.
    Container,
}

impl ElementKind {
    /// Returns whether elements of this kind carry a value.
    #[must_use]
    pub fn has_value(self) -> bool {
        !matches!(self, Self::Container)
    }
}

/// The outcome of a click on an element.
#[derive(Debug, Default)]
pub struct ClickReport {
    /// The number of handlers invoked.
    pub handlers: usize,
    /// The errors returned by handlers, in invocation order.
    pub uncaught: Vec<HandlerError>,
}

struct Node {
    id: String,
    kind: ElementKind,
    value: RefCell<String>,
    handlers: RefCell<Vec<Rc<RefCell<ClickHandler>>>>,
}

/// An element of a [`MemoryDocument`].
#[derive(Clone)]
pub struct MemoryElement(Rc<Node>);

impl MemoryElement {
    /// Returns the kind of the element.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.0.kind
    }

    /// Sets the value of the element, as a user typing into it would.
    ///
    /// # Errors
    ///
    /// Returns an error if the element is not a form control.
    pub fn set_value(&self, value: impl Into<String>) -> Result<(), Error> {
        if !self.0.kind.has_value() {
            return Err(Error::NotAFormControl(self.0.id.clone()));
        }

        *self.0.value.borrow_mut() = value.into();
        Ok(())
    }

    /// Returns the number of click handlers registered on the element.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.0.handlers.borrow().len()
    }

    /// Invokes every click handler registered at the time of the click.
    fn click(&self) -> ClickReport {
        // Handlers may read the document, so none of its cells stay borrowed
        let handlers = self.0.handlers.borrow().clone();
        let mut report = ClickReport::default();

        for handler in handlers {
            report.handlers += 1;
            if let Err(error) = (*handler.borrow_mut())() {
                report.uncaught.push(error);
            }
        }

        report
    }
}

impl Element for MemoryElement {
    fn id(&self) -> String {
        self.0.id.clone()
    }

    fn value(&self) -> Option<String> {
        self.0
            .kind
            .has_value()
            .then(|| self.0.value.borrow().clone())
    }

    fn add_click_handler(&self, handler: ClickHandler) -> Result<(), Error> {
        self.0
            .handlers
            .borrow_mut()
            .push(Rc::new(RefCell::new(handler)));

        Ok(())
    }
}

/// A single-threaded in-memory document.
///
/// Clones share the same elements.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    elements: Rc<RefCell<Vec<MemoryElement>>>,
}

impl MemoryDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new element with an empty value to the end of the document.
    pub fn append(&self, id: impl Into<String>, kind: ElementKind) -> MemoryElement {
        let element = MemoryElement(Rc::new(Node {
            id: id.into(),
            kind,
            value: RefCell::default(),
            handlers: RefCell::default(),
        }));

        self.elements.borrow_mut().push(element.clone());

        element
    }

    /// Removes the first element carrying the given id. Returns whether an element was removed.
    pub fn remove(&self, id: &str) -> bool {
        let mut elements = self.elements.borrow_mut();

        match elements.iter().position(|element| element.0.id == id) {
            Some(index) => {
                elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sets the value of the form control with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if no element carries the id or the element is not a form control.
    pub fn set_value(&self, id: &str, value: impl Into<String>) -> Result<(), Error> {
        self.element_by_id(id)
            .ok_or_else(|| Error::MissingElement(id.to_owned()))?
            .set_value(value)
    }

    /// Clicks the element with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if no element carries the id.
    pub fn click(&self, id: &str) -> Result<ClickReport, Error> {
        let element = self
            .element_by_id(id)
            .ok_or_else(|| Error::MissingElement(id.to_owned()))?;

        Ok(element.click())
    }

    /// Returns the ids of all elements in document order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.elements
            .borrow()
            .iter()
            .map(|element| element.0.id.clone())
            .collect()
    }

    /// Returns the number of elements in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Returns whether the document has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements
            .borrow()
            .iter()
            .find(|element| element.0.id == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, fmt};

    use super::*;

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    impl std::error::Error for Boom {}

    fn handler(handler: impl FnMut() -> Result<(), HandlerError> + 'static) -> ClickHandler {
        Box::new(handler)
    }

    #[test]
    fn values_start_empty_and_follow_input() {
        let document = MemoryDocument::new();
        document.append("email", ElementKind::Input);

        assert_eq!(document.value_of("email").unwrap().as_deref(), Some(""));

        document.set_value("email", "a@l.com").unwrap();
        assert_eq!(
            document.value_of("email").unwrap().as_deref(),
            Some("a@l.com")
        );
    }

    #[test]
    fn missing_elements_are_errors() {
        let document = MemoryDocument::new();

        assert_eq!(
            document.value_of("phone"),
            Err(Error::MissingElement("phone".to_owned()))
        );
        assert!(document.click("nowhere").is_err());
    }

    #[test]
    fn containers_have_no_value_and_reject_input() {
        let document = MemoryDocument::new();
        document.append("panel", ElementKind::Container);

        assert_eq!(document.value_of("panel"), Ok(None));
        assert_eq!(
            document.set_value("panel", "x"),
            Err(Error::NotAFormControl("panel".to_owned()))
        );
    }

    #[test]
    fn first_element_in_document_order_wins() {
        let document = MemoryDocument::new();
        document.append("customer-id", ElementKind::Input);
        let second = document.append("customer-id", ElementKind::Input);
        second.set_value("2").unwrap();

        assert_eq!(document.value_of("customer-id").unwrap().as_deref(), Some(""));

        assert!(document.remove("customer-id"));
        assert_eq!(
            document.value_of("customer-id").unwrap().as_deref(),
            Some("2")
        );
    }

    #[test]
    fn click_runs_every_handler_and_collects_errors() {
        let document = MemoryDocument::new();
        let button = document.append("go", ElementKind::Button);
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        button
            .add_click_handler(handler(move || {
                counter.set(counter.get() + 1);
                Ok(())
            }))
            .unwrap();
        button
            .add_click_handler(handler(|| Err(HandlerError::from(Boom))))
            .unwrap();

        let report = document.click("go").unwrap();

        assert_eq!(report.handlers, 2);
        assert_eq!(calls.get(), 1);
        assert_eq!(report.uncaught.len(), 1);
        assert_eq!(report.uncaught[0].to_string(), "boom");
    }

    #[test]
    fn handlers_can_read_the_document_while_clicked() {
        let document = MemoryDocument::new();
        document.append("search", ElementKind::Input);
        let button = document.append("search-button", ElementKind::Button);
        document.set_value("search", "Ada").unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let scope = document.clone();
        let sink = seen.clone();
        button
            .add_click_handler(handler(move || {
                sink.borrow_mut().push(scope.value_of("search")?);
                Ok(())
            }))
            .unwrap();

        document.click("search-button").unwrap();

        assert_eq!(*seen.borrow(), [Some("Ada".to_owned())]);
    }

    #[test]
    fn handlers_stay_with_their_element() {
        let document = MemoryDocument::new();
        let original = document.append("create-worker", ElementKind::Button);
        original.add_click_handler(handler(|| Ok(()))).unwrap();

        document.remove("create-worker");
        let replacement = document.append("create-worker", ElementKind::Button);

        assert_eq!(replacement.handler_count(), 0);
        assert_eq!(document.click("create-worker").unwrap().handlers, 0);
        assert_eq!(document.ids(), ["create-worker"]);
    }
}
