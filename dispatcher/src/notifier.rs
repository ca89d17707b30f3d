use crate::Error;

/// A capability for presenting a notification to the user.
///
/// Implementations may block until the user dismissed the notification.
pub trait Notifier {
    /// Presents the given message.
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be presented.
    fn notify(&self, message: &str) -> Result<(), Error>;
}

impl<F: Fn(&str)> Notifier for F {
    fn notify(&self, message: &str) -> Result<(), Error> {
        self(message);
        Ok(())
    }
}
