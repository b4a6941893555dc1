#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

//! # Overview
//!
//! `scripted-io` provides deterministic, in-memory stand-ins for byte-stream
//! endpoints: [`ScriptedReader`], a readable-closable source that cycles
//! through a finite backing buffer, and [`ScriptedWriter`], a writable-closable
//! sink that records every byte it is handed. Both are driven by call-indexed
//! [`Script`]s: a test pre-configures, per call number, which reported count
//! and which error an operation produces, then asserts on the recorded call
//! counters and transferred bytes. No real I/O takes place anywhere.
//!
//! # Design
//!
//! The crate is split along the behavioral contract:
//!
//! - [`Script`] implements the call-indexed override lookup shared by every
//!   configurable counter and error sequence. Slot `i` is consulted by the
//!   `i`-th call to the owning operation; an absent or empty slot falls back
//!   to the operation default.
//! - [`ScriptedReader`] feeds a caller-supplied buffer from its backing data,
//!   wrapping to the start whenever the end is reached. Unconfigured readers
//!   default to the lowercase ASCII alphabet on first use.
//! - [`ScriptedWriter`] appends the full input of every write to its
//!   [`recorded`](ScriptedWriter::recorded) log, independent of the count it
//!   reports back.
//! - [`Close`] supplies the missing half of the two capability sets; the
//!   combined [`ReadClose`] and [`WriteClose`] traits let consumer code stay
//!   generic over "readable + closable" and "writable + closable" endpoints
//!   and swap a double in for the real thing.
//!
//! Every operation runs to completion synchronously. Instances are plain
//! mutable values with no interior locking; sharing one across threads is not
//! supported.
//!
//! # Invariants
//!
//! - Call counters increase by exactly one per corresponding call and are the
//!   pre-increment lookup key into their scripts.
//! - The reader's cursor always stays within the backing data once that data
//!   is non-empty; defaulting guarantees it is never empty during a copy.
//! - The writer's log is append-only and accumulates the complete input of
//!   every write call, in call order.
//! - A scripted count is reported verbatim even when it exceeds the bytes
//!   physically copied; only `min(count, buffer_len)` bytes move. Callers
//!   that must defend against inconsistent endpoints rely on this.
//!
//! # Errors
//!
//! Scripted errors are opaque [`std::io::Error`] values returned verbatim;
//! the doubles never construct, wrap, or inspect them. [`ScriptedError`] is a
//! convenience payload tests can script and later identify by downcast. Call
//! indices beyond a script silently fall back to "no error".
//!
//! # Examples
//!
//! Cycle through the default alphabet:
//!
//! ```
//! use scripted_io::ScriptedReader;
//! use std::io::Read;
//!
//! let mut reader = ScriptedReader::new();
//! let mut buf = [0u8; 10];
//!
//! assert_eq!(reader.read(&mut buf).unwrap(), 10);
//! assert_eq!(&buf, b"abcdefghij");
//! assert_eq!(reader.read(&mut buf).unwrap(), 10);
//! assert_eq!(&buf, b"klmnopqrst");
//! assert_eq!(reader.read_calls, 2);
//! ```
//!
//! Script a partial write and a failure while capturing everything:
//!
//! ```
//! use scripted_io::{ScriptedError, ScriptedWriter};
//! use std::io::Write;
//!
//! let mut writer = ScriptedWriter::new();
//! writer.write_counts = [Some(2)].into();
//! writer.write_errors = [None, Some(ScriptedError::io("sup, bro"))].into();
//!
//! assert_eq!(writer.write(b"hey").unwrap(), 2);
//! assert!(writer.write(b"there").is_err());
//! assert_eq!(writer.recorded, b"heythere");
//! ```
//!
//! # See also
//!
//! - [`std::io::Read`] and [`std::io::Write`], the trait halves of the two
//!   capability sets.
//! - [`Script`] for the exact override lookup rules.

mod close;
mod error;
mod reader;
mod script;
mod writer;

pub use crate::close::{Close, ReadClose, WriteClose};
pub use crate::error::ScriptedError;
pub use crate::reader::ScriptedReader;
pub use crate::script::Script;
pub use crate::writer::ScriptedWriter;
