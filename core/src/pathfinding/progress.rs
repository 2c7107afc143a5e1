use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

/// One progress notification: a percentage and a status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressUpdate {
    pub percent: u8,
    pub message: String,
}

/// Receives advisory progress from a search.
pub trait ProgressSink: Send {
    fn report(&mut self, percent: u8, message: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(u8, &str) + Send,
{
    fn report(&mut self, percent: u8, message: &str) {
        self(percent, message)
    }
}

impl ProgressSink for UnboundedSender<ProgressUpdate> {
    fn report(&mut self, percent: u8, message: &str) {
        // A dropped receiver just means nobody is watching
        let _ = self.send(ProgressUpdate {
            percent,
            message: message.to_string(),
        });
    }
}

/// Discards every update.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _percent: u8, _message: &str) {}
}

/// Keeps the reported sequence non-decreasing and below 100 until
/// [`finish`](ProgressTracker::finish) sends the single final 100.
pub struct ProgressTracker<'a> {
    sink: &'a mut dyn ProgressSink,
    current: u8,
    finished: bool,
}

impl<'a> ProgressTracker<'a> {
    pub fn new(sink: &'a mut dyn ProgressSink) -> Self {
        Self {
            sink,
            current: 0,
            finished: false,
        }
    }

    pub fn report(&mut self, percent: u8, message: &str) {
        if self.finished {
            return;
        }
        self.current = percent.min(99).max(self.current);
        self.sink.report(self.current, message);
    }

    pub fn finish(&mut self, message: &str) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.current = 100;
        self.sink.report(100, message);
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
