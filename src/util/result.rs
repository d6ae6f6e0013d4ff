use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// Converts the [`Result`] into an [`Option`], logging the error with the provided `context`
    /// instead of discarding it silently.
    ///
    /// This is how the infallible variants of growing operations surface failures: the container
    /// is left as it was and the error goes to whichever logger the host program installed.
    fn report(self, context: &str) -> Option<T>;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn report(self, context: &str) -> Option<T> {
        match self {
            Ok(val) => Some(val),
            Err(error) => {
                log::error!("{context}: {error}");
                None
            },
        }
    }
}
