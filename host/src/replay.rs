use std::{cell::Cell, rc::Rc};

use dispatcher::{Bindings, Error, FormDispatcher, Notifier};
use page::Page;
use tracing::{error, info};

/// The outcome of replaying a page.
#[derive(Debug)]
pub struct Replay {
    /// The actions bound during initialization.
    pub bound: Bindings,
    /// The number of notifications presented.
    pub notifications: usize,
    /// The number of errors left uncaught by click handlers.
    pub uncaught: usize,
}

/// A notifier counting the notifications it passed on.
struct Counted<N> {
    inner: N,
    count: Rc<Cell<usize>>,
}

impl<N: Notifier> Notifier for Counted<N> {
    fn notify(&self, message: &str) -> Result<(), Error> {
        self.inner.notify(message)?;
        self.count.set(self.count.get() + 1);

        Ok(())
    }
}

/// Replays the given page: builds its document, initializes the dispatcher once and performs the
/// steps in order.
///
/// Errors left uncaught by click handlers are logged and counted, they do not stop the replay.
///
/// # Errors
///
/// Returns an error if the page elements or a step do not fit the document.
pub fn replay(page: &Page, notifier: impl Notifier + 'static) -> Result<Replay, page::Error> {
    let document = page.build_document()?;

    let count = Rc::new(Cell::new(0));
    let notifier = Counted {
        inner: notifier,
        count: count.clone(),
    };
    let bound = FormDispatcher::new(notifier).initialize(&document);
    info!(page = %page.title, bound = bound.len(), "initialized form dispatcher");

    let mut uncaught = 0;
    for step in &page.steps {
        let Some(report) = step.apply(&document)? else {
            continue;
        };

        for handler_error in report.uncaught {
            error!("uncaught error in click handler: {handler_error}");
            uncaught += 1;
        }
    }

    Ok(Replay {
        bound,
        notifications: count.get(),
        uncaught,
    })
}
