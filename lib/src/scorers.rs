//! Ranks a candidate list by expected informativeness of each word as the
//! next guess.
//!
//! Two heuristics are computed: a letter-frequency entropy score (cheap) and
//! the average number of candidates that would remain after guessing a word
//! (an O(n²) pair simulation). The composite rankings combine them with a
//! tie-break on distinct-letter count, since repeated letters provide less
//! disambiguating signal per guess.

use crate::constraints::ConstraintState;
use rayon::prelude::*;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Computes the letter-frequency entropy score of every candidate.
///
/// Letter counts are total occurrences across the whole candidate list; a
/// word's score is the sum, over each of its letter occurrences, of
/// −(count × ln count). Less negative means more informative. This is the
/// legacy frequency heuristic: the counts are deliberately not normalized
/// into a probability distribution, and its accuracy degrades as the
/// candidate set shrinks.
pub fn entropy_scores(words: &[Arc<str>]) -> HashMap<Arc<str>, f64> {
    let mut counts: HashMap<char, u32> = HashMap::new();
    for word in words {
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    words
        .iter()
        .map(|word| {
            let score = word
                .chars()
                .map(|letter| {
                    let count = f64::from(counts[&letter]);
                    -(count * count.ln())
                })
                .sum();
            (Arc::clone(word), score)
        })
        .collect()
}

/// Computes, for every candidate, the number of candidates expected to
/// remain after guessing it, averaged over each candidate being the secret.
///
/// Each (guess, secret) pair synthesizes the one-round constraint state that
/// feedback would produce and counts the survivors of filtering the full
/// list with it. Lower is better: guessing that word is expected to
/// eliminate more candidates. This is O(n²) in the candidate count and is
/// the dominant cost of the engine; the per-guess simulations are
/// independent, so they run as a parallel map.
pub fn average_remaining_scores(words: &[Arc<str>]) -> HashMap<Arc<str>, f64> {
    let total = words.len();
    words
        .par_iter()
        .map(|guess| {
            let remaining: usize = words
                .iter()
                .map(|solution| {
                    let state = ConstraintState::from_comparison(guess, solution);
                    words.iter().filter(|word| state.is_satisfied_by(word)).count()
                })
                .sum();
            (Arc::clone(guess), remaining as f64 / total as f64)
        })
        .collect()
}

/// Returns the number of distinct letters in the word.
pub fn num_distinct_letters(word: &str) -> usize {
    word.chars().collect::<HashSet<char>>().len()
}

/// Keeps only candidates without repeated letters.
///
/// A display preference, not a correctness filter: callers typically show
/// this subset when it is non-empty and fall back to the full list.
pub fn with_distinct_letters(words: &[Arc<str>]) -> Vec<Arc<str>> {
    words
        .iter()
        .filter(|word| num_distinct_letters(word) == word.chars().count())
        .cloned()
        .collect()
}

/// Ranks candidates by entropy (descending), breaking ties by
/// distinct-letter count (descending).
///
/// Cheap: no pair simulation. Used when the candidate set is too large for
/// [`average_remaining_scores`].
pub fn rank_by_entropy_then_uniqueness(words: &[Arc<str>]) -> Vec<Arc<str>> {
    let entropy = entropy_scores(words);
    let mut ranked = words.to_vec();
    ranked.sort_by(|first, second| {
        entropy[second]
            .total_cmp(&entropy[first])
            .then_with(|| num_distinct_letters(second).cmp(&num_distinct_letters(first)))
    });
    ranked
}

/// Ranks candidates by average remaining size (ascending), then entropy
/// (descending), then distinct-letter count (descending).
pub fn rank_by_remaining_then_entropy_then_uniqueness(words: &[Arc<str>]) -> Vec<Arc<str>> {
    let sizes = average_remaining_scores(words);
    let entropy = entropy_scores(words);
    let mut ranked = words.to_vec();
    ranked.sort_by(|first, second| {
        sizes[first]
            .total_cmp(&sizes[second])
            .then_with(|| entropy[second].total_cmp(&entropy[first]))
            .then_with(|| num_distinct_letters(second).cmp(&num_distinct_letters(first)))
    });
    ranked
}
