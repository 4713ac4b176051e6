use std::fmt::Display;

pub trait LogError {
    /// Emits an `error` event carrying the error message, then hands the
    /// result back unchanged.
    fn log_error(self) -> Self;
}

impl<T, E: Display> LogError for Result<T, E> {
    fn log_error(self) -> Self {
        if let Err(err) = &self {
            tracing::error!("{}", err);
        }

        self
    }
}
