//! Source-double behavior through the public `Read` surface.

use scripted_io::{ScriptedError, ScriptedReader};
use std::io::Read;

#[test]
fn three_unconfigured_reads_walk_the_alphabet() {
    let mut reader = ScriptedReader::new();
    let mut buf = [0u8; 20];

    assert_eq!(reader.read(&mut buf).unwrap(), 20);
    assert_eq!(&buf, b"abcdefghijklmnopqrst");

    assert_eq!(reader.read(&mut buf).unwrap(), 20);
    assert_eq!(&buf, b"uvwxyzabcdefghijklmn");

    assert_eq!(reader.read(&mut buf).unwrap(), 20);
    assert_eq!(&buf, b"opqrstuvwxyzabcdefgh");

    assert_eq!(reader.read_calls, 3);
}

#[test]
fn short_reads_interleave_with_full_buffer_defaults() {
    let mut reader = ScriptedReader::with_data(*b"pastrami");
    reader.read_counts = [Some(2), None, Some(5)].into();
    let mut buf = [0u8; 10];

    assert_eq!(reader.read(&mut buf).unwrap(), 2);
    assert_eq!(&buf[..2], b"pa");

    assert_eq!(reader.read(&mut buf).unwrap(), 10);
    assert_eq!(&buf, b"stramipast");

    assert_eq!(reader.read(&mut buf).unwrap(), 5);
    assert_eq!(&buf, b"ramipipast");
}

#[test]
fn scripted_errors_surface_between_successful_reads() {
    let mut reader = ScriptedReader::new();
    reader.read_errors = [None, Some(ScriptedError::io("thot"))].into();
    let mut buf = [0u8; 8];

    assert_eq!(reader.read(&mut buf).unwrap(), 8);
    assert_eq!(&buf, b"abcdefgh");

    let err = reader.read(&mut buf).unwrap_err();
    assert_eq!(err.to_string(), "thot");
    assert_eq!(&buf, b"ijklmnop");

    assert_eq!(reader.read(&mut buf).unwrap(), 8);
    assert_eq!(&buf, b"qrstuvwx");
    assert_eq!(reader.read_calls, 3);
}

#[test]
fn a_zero_count_override_scripts_end_of_stream() {
    let mut reader = ScriptedReader::new();
    reader.read_counts = [None, Some(0)].into();
    let mut buf = [0u8; 6];

    assert_eq!(reader.read(&mut buf).unwrap(), 6);
    assert_eq!(reader.read(&mut buf).unwrap(), 0);
    assert_eq!(&buf, b"abcdef");

    // The stream is not sticky; the next call serves data again.
    assert_eq!(reader.read(&mut buf).unwrap(), 6);
    assert_eq!(&buf, b"ghijkl");
}
