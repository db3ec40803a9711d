/// Events emitted by a search run, in the order they happen.
#[derive(Debug, Clone)]
pub enum Progress {
    SearchStart { total_trials: u64 },
    TrialDone,
    NewBest { trial: usize, score: f64 },
    SearchFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Delivers [`Progress`] events to an optional callback; a reporter without
/// a callback silently drops every event.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
