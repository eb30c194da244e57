use std::cell::RefCell;

use crate::carer::CarerRecord;

/// Receives one diagnostic per scored carer.
///
/// The engine never writes to the console itself; callers pick where the
/// line goes by passing a reporter.
pub trait ScoreReporter {
    fn report(&self, carer: &CarerRecord, score: f64);
}

/// Emits each score as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ScoreReporter for LogReporter {
    fn report(&self, carer: &CarerRecord, score: f64) {
        tracing::info!(
            id = %carer.id,
            first_name = %carer.first_name,
            score,
            "scored carer"
        );
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ScoreReporter for NullReporter {
    fn report(&self, _carer: &CarerRecord, _score: f64) {}
}

/// Collects diagnostics as `"{id}, {first_name}, {score}"` lines. Whole
/// scores keep their `.0`.
#[derive(Debug, Default)]
pub struct BufferedReporter {
    lines: RefCell<Vec<String>>,
}

impl BufferedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every collected line, leaving the buffer empty.
    pub fn drain(&self) -> Vec<String> {
        self.lines.take()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl ScoreReporter for BufferedReporter {
    fn report(&self, carer: &CarerRecord, score: f64) {
        self.lines
            .borrow_mut()
            .push(format!("{}, {}, {:?}", carer.id, carer.first_name, score));
    }
}
