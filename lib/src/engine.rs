use crate::constraints::{filter_candidates, ConstraintState};
use crate::data::WordBank;
use crate::results::{AdvisorError, GuessFeedback};
use crate::scorers;
use std::sync::Arc;

/// Tuning knobs for an advisor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Length of the words being guessed.
    pub word_length: usize,
    /// How many ranked candidates a display should show before eliding the
    /// rest.
    pub display_limit: usize,
    /// Largest candidate count for which the O(n²) average-remaining-size
    /// heuristic runs; above it only the entropy ranking is used.
    pub exhaustive_threshold: usize,
}

impl Default for AdvisorConfig {
    fn default() -> AdvisorConfig {
        AdvisorConfig {
            word_length: 5,
            display_limit: 10,
            exhaustive_threshold: 100,
        }
    }
}

/// Where a session stands after the latest round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorStatus {
    /// More than one candidate remains.
    InProgress,
    /// Exactly one candidate remains; it must be the solution.
    Solved(Arc<str>),
    /// No candidate is consistent with the accumulated feedback: the
    /// feedback is contradictory, or the solution was never in the list.
    Exhausted,
}

/// Tracks accumulated feedback and the surviving candidates across rounds.
///
/// Created at session start from a [`WordBank`] and discarded afterwards;
/// nothing persists across sessions.
///
/// ```
/// use wordle_advisor::*;
///
/// let bank = WordBank::from_iterator(["apple", "angle", "ankle"]);
/// let mut advisor = Advisor::new(&bank, AdvisorConfig::default());
///
/// let feedback = GuessFeedback::from_code("apple", "1xx11").unwrap();
/// advisor.record_feedback(&feedback).unwrap();
///
/// assert_eq!(advisor.candidates().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Advisor {
    config: AdvisorConfig,
    state: ConstraintState,
    candidates: Vec<Arc<str>>,
}

impl Advisor {
    /// Starts a session from the bank's words of the configured length, in
    /// load order.
    pub fn new(bank: &WordBank, config: AdvisorConfig) -> Advisor {
        Advisor {
            candidates: bank.words_of_length(config.word_length),
            state: ConstraintState::new(),
            config,
        }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// The candidates still consistent with every round so far, in load
    /// order.
    pub fn candidates(&self) -> &[Arc<str>] {
        &self.candidates
    }

    /// Ingests one round of feedback and narrows the candidate set.
    ///
    /// Validation happens before any state changes, so a rejected round
    /// leaves the session untouched.
    pub fn record_feedback(&mut self, feedback: &GuessFeedback) -> Result<(), AdvisorError> {
        feedback.validate(self.config.word_length)?;
        self.state.update(feedback);
        self.candidates = filter_candidates(&self.candidates, &self.state);
        Ok(())
    }

    /// Ingests the one-shot batch encoding (confirmed and partial position
    /// codes plus a flat excluded-letter string) in place of per-round
    /// feedback.
    pub fn apply_codes(
        &mut self,
        confirmed: &str,
        partial: &str,
        excluded: &str,
    ) -> Result<(), AdvisorError> {
        let ingested =
            ConstraintState::from_codes(self.config.word_length, confirmed, partial, excluded)?;
        self.state.merge(&ingested);
        self.candidates = filter_candidates(&self.candidates, &self.state);
        Ok(())
    }

    /// Ranks the surviving candidates by expected informativeness.
    ///
    /// At or below the configured threshold the full
    /// size-then-entropy-then-uniqueness ranking runs; above it the pair
    /// simulation is skipped in favor of the entropy ranking.
    pub fn recommendations(&self) -> Vec<Arc<str>> {
        if self.candidates.len() <= self.config.exhaustive_threshold {
            scorers::rank_by_remaining_then_entropy_then_uniqueness(&self.candidates)
        } else {
            scorers::rank_by_entropy_then_uniqueness(&self.candidates)
        }
    }

    /// Reports the terminal state, if one has been reached.
    ///
    /// An empty candidate set is a valid terminal state, not an error;
    /// callers should report it distinctly from a solved session.
    pub fn status(&self) -> AdvisorStatus {
        match self.candidates.len() {
            0 => AdvisorStatus::Exhausted,
            1 => AdvisorStatus::Solved(Arc::clone(&self.candidates[0])),
            _ => AdvisorStatus::InProgress,
        }
    }
}
