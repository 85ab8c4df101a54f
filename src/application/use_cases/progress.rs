use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

/// Batch composition progress after a record is composed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}

/// Receiver of advisory progress updates. Dropped or ignored updates never
/// affect the composed output.
pub trait ProgressSink {
    fn report(&self, progress: Progress);
}

impl<F> ProgressSink for F
where
    F: Fn(Progress),
{
    fn report(&self, progress: Progress) {
        self(progress)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _progress: Progress) {}
}

impl ProgressSink for UnboundedSender<Progress> {
    fn report(&self, progress: Progress) {
        // A closed receiver just means nobody is watching
        let _ = self.send(progress);
    }
}
