use std::io::{self, Read};

use crate::close::Close;
use crate::script::Script;

/// Data an unconfigured reader cycles through.
const DEFAULT_DATA: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Readable, closable source double that cycles through finite backing data.
///
/// Every read fills the caller's buffer from [`data`](Self::data), wrapping
/// back to the start whenever the end is reached, and reports either the
/// scripted count for that call or the buffer length. A reader left
/// unconfigured serves repeating segments of the lowercase ASCII alphabet.
///
/// Configuration is plain field assignment on a fresh instance, before the
/// first call; the scripts and counters are expected to be left alone once
/// reading starts. A single caller must own the instance exclusively — there
/// is no internal synchronization.
///
/// # Examples
///
/// ```
/// use scripted_io::ScriptedReader;
/// use std::io::Read;
///
/// let mut reader = ScriptedReader::with_data(*b"pastrami");
/// reader.read_counts = [Some(2)].into();
///
/// let mut buf = [0u8; 10];
/// assert_eq!(reader.read(&mut buf).unwrap(), 2);
/// assert_eq!(&buf[..2], b"pa");
///
/// // Unscripted calls report the buffer length and keep cycling.
/// assert_eq!(reader.read(&mut buf).unwrap(), 10);
/// assert_eq!(&buf, b"stramipast");
/// ```
#[derive(Debug, Default)]
pub struct ScriptedReader {
    /// Backing data reads are served from, cyclically.
    ///
    /// Left empty, it is set to the lowercase ASCII alphabet when the first
    /// read needs it.
    pub data: Vec<u8>,

    /// Reported-count overrides, one slot per read call.
    ///
    /// An overridden call still copies at most the buffer length; the
    /// configured value is reported back regardless.
    pub read_counts: Script<usize>,

    /// Error overrides, one slot per read call.
    pub read_errors: Script<io::Error>,

    /// Number of completed read calls.
    pub read_calls: usize,

    /// Error overrides, one slot per close call.
    pub close_errors: Script<io::Error>,

    /// Number of completed close calls.
    pub close_calls: usize,

    cursor: usize,
}

impl ScriptedReader {
    /// Creates an unconfigured reader serving the default alphabet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader that cycles through the given backing data.
    #[must_use]
    pub fn with_data(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    /// Current position within the backing data.
    ///
    /// Starts at zero and advances by the number of bytes each read actually
    /// copies, modulo the backing data length.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Performs one scripted read, returning the raw `(count, error)` pair.
    ///
    /// The pair is what the behavioral contract produces for this call:
    /// the reported count (scripted, or the buffer length) together with the
    /// scripted error, if any. [`Read::read`] collapses the same pair into an
    /// [`io::Result`], so use this method when a test needs to observe a
    /// count and an error on one call.
    ///
    /// `min(count, buf.len())` bytes are copied into `buf` either way, the
    /// cursor advances by the same amount, and the call counter grows by one.
    pub fn scripted_read(&mut self, buf: &mut [u8]) -> (usize, Option<io::Error>) {
        if self.data.is_empty() {
            self.data = DEFAULT_DATA.to_vec();
        }

        let call = self.read_calls;
        let error = self.read_errors.take(call);
        let count = self.read_counts.get(call).copied().unwrap_or(buf.len());

        self.read_calls += 1;
        self.fill_cyclic(buf, count);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            call,
            requested = buf.len(),
            reported = count,
            scripted_error = error.is_some(),
            "scripted read"
        );

        (count, error)
    }

    /// Performs one scripted close, returning the scripted error, if any.
    ///
    /// Closing only consults [`close_errors`](Self::close_errors) and bumps
    /// [`close_calls`](Self::close_calls); it may be called any number of
    /// times, with or without prior reads.
    pub fn scripted_close(&mut self) -> Option<io::Error> {
        let call = self.close_calls;
        let error = self.close_errors.take(call);
        self.close_calls += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(call, scripted_error = error.is_some(), "scripted close");

        error
    }

    /// Copies `min(quota, buf.len())` bytes into `buf`, wrapping through the
    /// backing data as often as needed.
    fn fill_cyclic(&mut self, buf: &mut [u8], quota: usize) {
        let quota = quota.min(buf.len());
        let mut copied = 0;

        while copied < quota {
            let run = (quota - copied).min(self.data.len() - self.cursor);
            buf[copied..copied + run]
                .copy_from_slice(&self.data[self.cursor..self.cursor + run]);
            copied += run;
            self.cursor = (self.cursor + run) % self.data.len();
        }
    }
}

impl Read for ScriptedReader {
    /// Reads via the scripted contract, with the scripted error taking
    /// precedence over the count when both are configured for one call.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.scripted_read(buf) {
            (_, Some(error)) => Err(error),
            (count, None) => Ok(count),
        }
    }
}

impl Close for ScriptedReader {
    fn close(&mut self) -> io::Result<()> {
        self.scripted_close().map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests;
