use crate::results::{AdvisorError, GuessFeedback, LetterMark};
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Placeholder used in batch position codes for "nothing known here".
pub const UNKNOWN_POSITION: char = '-';

/// What feedback has established about a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalFact {
    pub letter: char,
    /// `true` when the letter is confirmed at this position; `false` when it
    /// occurs in the solution but not here.
    pub placed: bool,
}

/// Accumulated knowledge about the solution.
///
/// Holds at most one fact per position (a later feedback round overwrites the
/// fact at that position) and the set of letters confirmed absent. Feedback
/// rounds are validated before ingestion; across rounds the state applies
/// whatever it was told literally, without re-checking consistency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintState {
    facts: HashMap<usize, PositionalFact>,
    excluded: HashSet<char>,
}

impl ConstraintState {
    /// Creates an empty state: every word is consistent with it.
    pub fn new() -> ConstraintState {
        ConstraintState::default()
    }

    /// Returns the state arising from a single feedback round.
    pub fn from_feedback(feedback: &GuessFeedback) -> ConstraintState {
        let mut state = ConstraintState::new();
        state.update(feedback);
        state
    }

    /// Ingests one feedback round.
    ///
    /// Confirmed and partial marks set the fact at their position,
    /// overwriting whatever was there; absent marks union the letter into
    /// the excluded set. Expects the round to have been validated already
    /// (see [`GuessFeedback::validate`]); ingestion itself cannot fail.
    pub fn update(&mut self, feedback: &GuessFeedback) {
        for (position, (letter, mark)) in feedback
            .guess
            .chars()
            .zip(feedback.marks.iter())
            .enumerate()
        {
            match mark {
                LetterMark::Confirmed => {
                    self.facts
                        .insert(position, PositionalFact { letter, placed: true });
                }
                LetterMark::Partial => {
                    self.facts
                        .insert(position, PositionalFact { letter, placed: false });
                }
                LetterMark::Absent => {
                    self.excluded.insert(letter);
                }
            }
        }
    }

    /// Absorbs every fact and exclusion from `other`, with `other` winning
    /// at any shared position.
    pub fn merge(&mut self, other: &ConstraintState) {
        for (position, fact) in &other.facts {
            self.facts.insert(*position, *fact);
        }
        self.excluded.extend(other.excluded.iter().copied());
    }

    /// Builds a state directly from the one-shot batch encoding: two
    /// position-aligned codes (confirmed and partial letters, with
    /// [`UNKNOWN_POSITION`] for positions nothing is known about) and a flat
    /// string of excluded letters.
    ///
    /// Position codes must be empty or exactly `word_length` symbols; a
    /// partial entry overrides a confirmed entry at the same position.
    pub fn from_codes(
        word_length: usize,
        confirmed: &str,
        partial: &str,
        excluded: &str,
    ) -> Result<ConstraintState, AdvisorError> {
        let mut state = ConstraintState::new();
        for (code, placed) in [(confirmed, true), (partial, false)] {
            if code.is_empty() {
                continue;
            }
            if code.chars().count() != word_length {
                return Err(AdvisorError::InvalidFeedback);
            }
            for (position, letter) in code.chars().enumerate() {
                if letter == UNKNOWN_POSITION {
                    continue;
                }
                if !letter.is_alphabetic() {
                    return Err(AdvisorError::InvalidFeedback);
                }
                state.facts.insert(position, PositionalFact { letter, placed });
            }
        }
        for letter in excluded.chars() {
            if !letter.is_alphabetic() {
                return Err(AdvisorError::InvalidFeedback);
            }
            state.excluded.insert(letter);
        }
        Ok(state)
    }

    /// Synthesizes the state one round of feedback would produce if
    /// `solution` were the secret and `guess` were played against it.
    ///
    /// Positions where the two words agree yield confirmed facts; positions
    /// of the guess whose letter occurs among the solution's unmatched
    /// letters yield partial facts, taking precedence at a shared position;
    /// every other letter of the guess is excluded.
    pub fn from_comparison(guess: &str, solution: &str) -> ConstraintState {
        let mut state = ConstraintState::new();
        let guess_letters: Vec<char> = guess.chars().collect();
        let solution_letters: Vec<char> = solution.chars().collect();
        for (position, letter) in guess_letters.iter().enumerate() {
            if solution_letters.get(position) == Some(letter) {
                state
                    .facts
                    .insert(position, PositionalFact { letter: *letter, placed: true });
            }
        }
        let unmatched: Vec<char> = solution_letters
            .iter()
            .enumerate()
            .filter(|(position, _)| !state.facts.contains_key(position))
            .map(|(_, letter)| *letter)
            .collect();
        for (position, letter) in guess_letters.iter().enumerate() {
            if unmatched.contains(letter) {
                state
                    .facts
                    .insert(position, PositionalFact { letter: *letter, placed: false });
            }
        }
        for (position, letter) in guess_letters.iter().enumerate() {
            if !state.facts.contains_key(&position) {
                state.excluded.insert(*letter);
            }
        }
        state
    }

    /// Returns the fact recorded for the given position, if any.
    pub fn fact_at(&self, position: usize) -> Option<PositionalFact> {
        self.facts.get(&position).copied()
    }

    /// Returns `true` iff the letter is known to be absent.
    pub fn is_excluded(&self, letter: char) -> bool {
        self.excluded.contains(&letter)
    }

    /// Returns `true` iff the given word is consistent with every
    /// accumulated fact: confirmed letters match their position, partial
    /// letters occur in the word but not at their position, and no excluded
    /// letter occurs at all.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        self.facts
            .iter()
            .filter(|(_, fact)| fact.placed)
            .all(|(position, fact)| word.chars().nth(*position) == Some(fact.letter))
            && self
                .facts
                .iter()
                .filter(|(_, fact)| !fact.placed)
                .all(|(position, fact)| {
                    word.chars().nth(*position) != Some(fact.letter) && word.contains(fact.letter)
                })
            && !word.chars().any(|letter| self.excluded.contains(&letter))
    }
}

/// Gets the candidates consistent with the state, preserving input order.
pub fn filter_candidates(words: &[Arc<str>], state: &ConstraintState) -> Vec<Arc<str>> {
    words
        .iter()
        .filter(|word| state.is_satisfied_by(word))
        .cloned()
        .collect()
}
