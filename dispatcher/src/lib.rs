//! The `dispatcher` crate binds the CRM form actions to a document.
//!
//! Every action is described declaratively by an [`ActionDescriptor`]: the id of the element
//! triggering it, the ordered ids of the form fields it reads, a builder turning the field values
//! into a [`Record`] and the template of the resulting notification. [`FormDispatcher`] binds all
//! descriptors through one generic routine.

mod action;
mod dispatch;
mod notifier;

pub use action::{ActionDescriptor, ActionKind, Endpoint, MessageTemplate, Method, ACTIONS};
pub use dispatch::{dispatch, Bindings, FormDispatcher};
pub use notifier::Notifier;
pub use records::Record;

/// The error type for errors occurring while dispatching a form action.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read a form field.
    #[error("failed to read form field: {0}")]
    Dom(#[from] dom::Error),
    /// The record builder rejected the field values.
    #[error("could not build a `{kind}` record from {found} values")]
    Build {
        /// The action whose record could not be built.
        kind: ActionKind,
        /// The number of values read.
        found: usize,
    },
    /// Failed to serialize the record.
    #[error("failed to serialize record")]
    Serialize(#[from] serde_json::Error),
    /// Failed to show the notification.
    #[error("failed to show notification: {0}")]
    Notify(String),
}
