// src/progress.rs
/// Progress reporting for long-running work (scrobble fetching).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One row's count arrived. `label` is the row's link.
    fn item_done(&mut self, _id: usize, _label: &str) {}

    /// One row's fetch failed; the batch goes on.
    fn item_failed(&mut self, _id: usize, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
