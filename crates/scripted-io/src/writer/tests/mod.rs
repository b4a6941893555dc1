pub(super) use super::ScriptedWriter;
