//! # Quiz Session
//!
//! Drives one question at a time:
//! 1. `next` draws a random prefix from the store.
//! 2. The presentation layer collects the three answers.
//! 3. `grade` derives the ground truth and compares field by field.
//!
//! The session owns the question state; the presentation layer renders it
//! and never holds quiz state of its own.

use rand::Rng;
use thiserror::Error;

use drillr_common::network::subnet::{self, InvalidPrefix, Subnet};

use crate::store::PrefixStore;

#[derive(Debug, Error)]
pub enum QuizError {
    /// The store has no records to draw from. Unreachable under normal
    /// seeding; reported distinctly so it is never mistaken for bad user
    /// input.
    #[error("the prefix store has no records to draw a question from")]
    EmptyRepository,
    /// `grade` was called before any question was drawn.
    #[error("no question has been drawn yet")]
    NoQuestion,
    /// The *stored* prefix text is malformed. A data-integrity problem,
    /// not a wrong answer.
    #[error("stored prefix is malformed: {0}")]
    CorruptRecord(#[from] InvalidPrefix),
}

/// Field-by-field verdict for one submitted answer set.
///
/// `expected` carries the derived ground truth so the presentation layer
/// can show the correct values next to the misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeResult {
    pub expected: Subnet,
    pub network_ok: bool,
    pub broadcast_ok: bool,
    pub netmask_ok: bool,
}

impl GradeResult {
    pub fn all_correct(&self) -> bool {
        self.network_ok && self.broadcast_ok && self.netmask_ok
    }
}

/// One-question-at-a-time state machine.
///
/// Either a prefix has been drawn and awaits grading (*asked*) or the last
/// draw has been graded (*graded*). Grading twice without a new draw is
/// permitted and recomputes the same result; the session does not lock
/// submissions, callers tally each draw once.
#[derive(Debug, Default)]
pub struct QuizSession {
    current: Option<String>,
    graded: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the next question, clearing any previous grade.
    pub fn next(&mut self, store: &PrefixStore, rng: &mut impl Rng) -> Result<&str, QuizError> {
        let prefix: String = store
            .random_pick(rng)
            .ok_or(QuizError::EmptyRepository)?
            .to_string();

        self.graded = false;
        Ok(self.current.insert(prefix).as_str())
    }

    /// The prefix currently being asked, if any.
    pub fn current_prefix(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_graded(&self) -> bool {
        self.graded
    }

    /// Grades the submitted triple against the current prefix.
    ///
    /// Comparison is exact equality against the canonical dotted-quad
    /// rendering; alternate formattings of the right value do not count.
    pub fn grade(
        &mut self,
        submitted_network: &str,
        submitted_broadcast: &str,
        submitted_mask: &str,
    ) -> Result<GradeResult, QuizError> {
        let prefix = self.current.as_deref().ok_or(QuizError::NoQuestion)?;
        let expected: Subnet = subnet::parse_and_derive(prefix)?;

        let result = GradeResult {
            expected,
            network_ok: submitted_network.trim() == expected.network_address.to_string(),
            broadcast_ok: submitted_broadcast.trim() == expected.broadcast_address.to_string(),
            netmask_ok: submitted_mask.trim() == expected.netmask.to_string(),
        };

        self.graded = true;
        Ok(result)
    }
}
