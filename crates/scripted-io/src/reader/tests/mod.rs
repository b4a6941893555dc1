pub(super) use super::{DEFAULT_DATA, ScriptedReader};

mod closing;
