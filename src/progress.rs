// src/progress.rs
/// Progress reporting for a run (one item per dashboard table).
/// The CLI implements this to print status lines; tests pass `NullProgress`
/// or a recorder.
pub trait Progress {
    /// Called at the start with the number of tables to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one table has been built and persisted.
    fn item_done(&mut self, _table: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
