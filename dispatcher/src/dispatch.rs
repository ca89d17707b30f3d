use std::rc::Rc;

use dom::{Document, Element, HandlerError};
use tracing::{debug, warn};

use crate::{ActionDescriptor, ActionKind, Error, Notifier, ACTIONS};

/// The actions bound by [`FormDispatcher::initialize`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    bound: Vec<ActionKind>,
}

impl Bindings {
    /// Returns the bound actions in binding order.
    #[must_use]
    pub fn bound(&self) -> &[ActionKind] {
        &self.bound
    }

    /// Returns whether the given action was bound.
    #[must_use]
    pub fn is_bound(&self, kind: ActionKind) -> bool {
        self.bound.contains(&kind)
    }

    /// Returns the number of bound actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Returns whether no action was bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

/// A dispatcher binding form actions to the elements of a document.
pub struct FormDispatcher {
    notifier: Rc<dyn Notifier>,
    actions: &'static [ActionDescriptor],
}

impl FormDispatcher {
    /// Creates a dispatcher for the CRM form actions presenting results with the given notifier.
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self::with_actions(notifier, &ACTIONS)
    }

    /// Creates a dispatcher for the given actions.
    pub fn with_actions(
        notifier: impl Notifier + 'static,
        actions: &'static [ActionDescriptor],
    ) -> Self {
        Self {
            notifier: Rc::new(notifier),
            actions,
        }
    }

    /// Registers a click handler for every action whose trigger element exists in the document.
    ///
    /// Consumes the dispatcher, so handlers are registered exactly once. Actions without a trigger
    /// element are skipped silently, elements added later are never bound. Actions whose handler
    /// the document refuses are logged and left unbound.
    pub fn initialize<D: Document>(self, document: &D) -> Bindings {
        let mut bindings = Bindings::default();

        for action in self.actions {
            let Some(trigger) = document.element_by_id(action.trigger_id) else {
                continue;
            };

            let document = document.clone();
            let notifier = Rc::clone(&self.notifier);

            let registered = trigger.add_click_handler(Box::new(move || {
                dispatch(&document, action, notifier.as_ref()).map_err(HandlerError::from)
            }));

            if let Err(error) = registered {
                warn!(action = %action.kind, %error, "failed to bind click handler");
                continue;
            }

            debug!(action = %action.kind, trigger = action.trigger_id, "bound click handler");
            bindings.bound.push(action.kind);
        }

        bindings
    }
}

/// Runs an action against the current state of the document.
///
/// Reads the fields in order, builds the record and presents the rendered message. Aborts on the
/// first field that cannot be read, in which case nothing is presented.
///
/// # Errors
///
/// Returns an error if a field could not be read, the record could not be built or rendered, or
/// the notifier failed.
pub fn dispatch<D: Document>(
    document: &D,
    action: &ActionDescriptor,
    notifier: &dyn Notifier,
) -> Result<(), Error> {
    let values = action
        .field_ids
        .iter()
        .map(|id| document.value_of(id))
        .collect::<Result<Vec<_>, _>>()?;

    let record = (action.build)(&values).ok_or(Error::Build {
        kind: action.kind,
        found: values.len(),
    })?;
    let message = action.message.render(&record, &values)?;

    debug!(action = %action.kind, endpoint = %action.endpoint, "dispatching form action");

    notifier.notify(&message)
}
