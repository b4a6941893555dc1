use std::io::{self, Write};

use crate::close::Close;
use crate::script::Script;

/// Writable, closable sink double that records everything it is handed.
///
/// Every write appends the complete input to [`recorded`](Self::recorded),
/// no matter which count or error the call is scripted to report. Tests can
/// therefore simulate partial or failing writes while still asserting on the
/// exact bytes the code under test produced, in call order.
///
/// Configuration is plain field assignment on a fresh instance, before the
/// first call. A single caller must own the instance exclusively — there is
/// no internal synchronization.
///
/// # Examples
///
/// ```
/// use scripted_io::ScriptedWriter;
/// use std::io::Write;
///
/// let mut writer = ScriptedWriter::new();
/// writer.write_counts = [Some(0), None, Some(22)].into();
///
/// assert_eq!(writer.write(b"hey").unwrap(), 0);
/// assert_eq!(writer.write(b"u").unwrap(), 1);
/// assert_eq!(writer.write(b"up").unwrap(), 22);
/// assert_eq!(writer.write(b"rn?").unwrap(), 3);
/// assert_eq!(writer.recorded, b"heyuuprn?");
/// ```
#[derive(Debug, Default)]
pub struct ScriptedWriter {
    /// Every byte passed to a write call, in call order.
    pub recorded: Vec<u8>,

    /// Reported-count overrides, one slot per write call.
    ///
    /// The override only changes the count reported back; the full input is
    /// recorded either way.
    pub write_counts: Script<usize>,

    /// Error overrides, one slot per write call.
    pub write_errors: Script<io::Error>,

    /// Number of completed write calls.
    pub write_calls: usize,

    /// Error overrides, one slot per close call.
    pub close_errors: Script<io::Error>,

    /// Number of completed close calls.
    pub close_calls: usize,
}

impl ScriptedWriter {
    /// Creates an unconfigured writer that reports full counts and no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Performs one scripted write, returning the raw `(count, error)` pair.
    ///
    /// The reported count is the scripted value for this call, or the input
    /// length when none is configured. The entire input is appended to
    /// [`recorded`](Self::recorded) unconditionally, and the call counter
    /// grows by one. [`Write::write`] collapses the same pair into an
    /// [`io::Result`].
    pub fn scripted_write(&mut self, buf: &[u8]) -> (usize, Option<io::Error>) {
        let call = self.write_calls;
        let error = self.write_errors.take(call);
        let count = self.write_counts.get(call).copied().unwrap_or(buf.len());

        self.write_calls += 1;
        self.recorded.extend_from_slice(buf);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            call,
            received = buf.len(),
            reported = count,
            scripted_error = error.is_some(),
            "scripted write"
        );

        (count, error)
    }

    /// Performs one scripted close, returning the scripted error, if any.
    ///
    /// Closing only consults [`close_errors`](Self::close_errors) and bumps
    /// [`close_calls`](Self::close_calls); it may be called any number of
    /// times, with or without prior writes.
    pub fn scripted_close(&mut self) -> Option<io::Error> {
        let call = self.close_calls;
        let error = self.close_errors.take(call);
        self.close_calls += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(call, scripted_error = error.is_some(), "scripted close");

        error
    }
}

impl Write for ScriptedWriter {
    /// Writes via the scripted contract, with the scripted error taking
    /// precedence over the count when both are configured for one call.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.scripted_write(buf) {
            (_, Some(error)) => Err(error),
            (count, None) => Ok(count),
        }
    }

    /// Flushing is not part of the scripted contract; it always succeeds and
    /// consumes no call index.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Close for ScriptedWriter {
    fn close(&mut self) -> io::Result<()> {
        self.scripted_close().map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests;
