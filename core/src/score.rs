//! # Score Aggregation
//!
//! Counts graded answers and emits a snapshot every `report_every`
//! questions. A window that never fills is silently discarded when the
//! session ends; no partial report is ever emitted.

/// How a graded question went, as far as scoring is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Snapshot of one completed score window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    pub correct: u32,
    pub incorrect: u32,
}

impl ScoreReport {
    pub fn total(&self) -> u32 {
        self.correct + self.incorrect
    }
}

/// Rolling correct/incorrect tally since the last report.
#[derive(Debug)]
pub struct ScoreAggregator {
    correct: u32,
    incorrect: u32,
    report_every: u32,
}

impl ScoreAggregator {
    /// `report_every` is the window size; the default is 10. Callers are
    /// expected to validate it at the edge, a zero window never reports.
    pub fn new(report_every: u32) -> Self {
        Self {
            correct: 0,
            incorrect: 0,
            report_every,
        }
    }

    pub fn total(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// Tallies one outcome.
    ///
    /// Returns a [`ScoreReport`] when the tally reaches exactly the window
    /// size, resetting both counters for the next window. Otherwise
    /// returns `None`.
    pub fn record(&mut self, outcome: Outcome) -> Option<ScoreReport> {
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Incorrect => self.incorrect += 1,
        }

        if self.total() != self.report_every {
            return None;
        }

        let report = ScoreReport {
            correct: self.correct,
            incorrect: self.incorrect,
        };
        self.correct = 0;
        self.incorrect = 0;
        Some(report)
    }
}

impl Default for ScoreAggregator {
    fn default() -> Self {
        Self::new(10)
    }
}
