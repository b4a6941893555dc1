use super::ScriptedReader;
use crate::{Close, ScriptedError};

#[test]
fn unconfigured_close_succeeds_every_time() {
    let mut reader = ScriptedReader::new();

    assert!(reader.scripted_close().is_none());
    assert_eq!(reader.close_calls, 1);
    assert!(reader.scripted_close().is_none());
    assert_eq!(reader.close_calls, 2);
}

#[test]
fn close_errors_apply_per_call_index() {
    let mut reader = ScriptedReader::new();
    reader.close_errors = [None, Some(ScriptedError::io("yo"))].into();

    assert!(reader.scripted_close().is_none());
    assert_eq!(reader.close_calls, 1);

    let error = reader.scripted_close().expect("second close fails");
    assert_eq!(error.to_string(), "yo");
    assert_eq!(reader.close_calls, 2);

    assert!(reader.scripted_close().is_none());
    assert_eq!(reader.close_calls, 3);
}

#[test]
fn close_leaves_read_state_alone() {
    let mut reader = ScriptedReader::new();
    let mut buf = [0u8; 4];
    reader.scripted_read(&mut buf);

    reader.scripted_close();

    assert_eq!(reader.read_calls, 1);
    assert_eq!(reader.position(), 4);
    assert_eq!(reader.close_calls, 1);
}

#[test]
fn close_trait_surfaces_the_scripted_error() {
    let mut reader = ScriptedReader::new();
    reader.close_errors = [Some(ScriptedError::io("yo"))].into();

    let err = reader.close().unwrap_err();
    assert_eq!(err.to_string(), "yo");
    assert!(reader.close().is_ok());
}
