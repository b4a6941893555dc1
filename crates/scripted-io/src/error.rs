use std::io;

use thiserror::Error;

/// Sentinel payload for scripted endpoint failures.
///
/// Scripts accept any [`std::io::Error`] verbatim; nothing in the doubles
/// depends on this type. It exists so tests can configure a failure and later
/// prove the error they observed is the one they injected, either by message
/// or by downcasting the source of the returned [`std::io::Error`].
///
/// # Examples
///
/// ```
/// use scripted_io::{ScriptedError, ScriptedWriter};
/// use std::io::Write;
///
/// let mut writer = ScriptedWriter::new();
/// writer.write_errors = [Some(ScriptedError::io("disk on fire"))].into();
///
/// let err = writer.write(b"payload").unwrap_err();
/// let payload = err
///     .get_ref()
///     .and_then(|source| source.downcast_ref::<ScriptedError>())
///     .expect("the scripted payload survives the round trip");
/// assert_eq!(payload.message(), "disk on fire");
/// ```
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct ScriptedError {
    message: String,
}

impl ScriptedError {
    /// Creates a sentinel with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the configured message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Builds a [`std::io::Error`] wrapping a sentinel, ready to drop into a
    /// script slot.
    #[must_use]
    pub fn io(message: impl Into<String>) -> io::Error {
        io::Error::other(Self::new(message))
    }
}
