use std::io::{self, Read, Write};

/// The closable half of an endpoint's capability set.
///
/// `std::io` splits reading and writing into traits but has no notion of
/// closing; this supplies it so code under test can release endpoints it is
/// handed. Closing is not a terminal state: implementations may be closed any
/// number of times, before or after other operations.
pub trait Close {
    /// Closes the endpoint, surfacing whatever failure it reports.
    fn close(&mut self) -> io::Result<()>;
}

impl<T: Close + ?Sized> Close for &mut T {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl<T: Close + ?Sized> Close for Box<T> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// Capability set of a readable, closable source endpoint.
///
/// Blanket-implemented for every `Read + Close` type, so a consumer written
/// against `R: ReadClose` accepts a real endpoint and a
/// [`ScriptedReader`](crate::ScriptedReader) interchangeably.
pub trait ReadClose: Read + Close {}

impl<T: Read + Close + ?Sized> ReadClose for T {}

/// Capability set of a writable, closable sink endpoint.
///
/// Blanket-implemented for every `Write + Close` type, the mirror image of
/// [`ReadClose`].
pub trait WriteClose: Write + Close {}

impl<T: Write + Close + ?Sized> WriteClose for T {}
