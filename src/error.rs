use alloc::{boxed::Box, string::String};

/// An error that can occur in this crate.
///
/// Errors only arise at the edges: validating a catalog at construction
/// time and parsing ISO-8601 strings. Query-time lookups never fail with
/// an `Error`: an unknown zone or an instant predating a zone's history
/// yields `None` (or the invalid sentinel [`Rule`](crate::Rule)), per
/// the library's no-fault query model.
///
/// This crate follows the "one error type" design: there is no kind
/// hierarchy to match on, just a message. Callers that need to react to
/// a failure do so by not making the same construction mistake twice.
#[derive(Clone)]
pub struct Error {
    message: Box<str>,
}

impl Error {
    pub(crate) fn adhoc(message: String) -> Error {
        Error { message: message.into_boxed_str() }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Error").field("message", &self.message).finish()
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Creates a new ad hoc `Error` from format arguments.
macro_rules! err {
    ($($tt:tt)*) => {
        crate::error::Error::adhoc(alloc::format!($($tt)*))
    }
}

pub(crate) use err;
