use std::sync::Arc;
use wordle_advisor::*;

fn arcs(words: &[&str]) -> Vec<Arc<str>> {
    words.iter().map(|word| Arc::from(*word)).collect()
}

#[test]
fn filter_retains_confirmed_matches() -> Result<(), AdvisorError> {
    let words = arcs(&["worda", "wordb", "other", "smore"]);
    let state = ConstraintState::from_codes(5, "-o---", "", "")?;

    assert_eq!(filter_candidates(&words, &state), arcs(&["worda", "wordb"]));
    Ok(())
}

#[test]
fn filter_requires_partial_letters_elsewhere() -> Result<(), AdvisorError> {
    let words = arcs(&["worda", "wordb", "other", "smore"]);
    let state = ConstraintState::from_codes(5, "", "o----", "")?;

    // The word must contain 'o', but not at the first position.
    assert_eq!(
        filter_candidates(&words, &state),
        arcs(&["worda", "wordb", "smore"])
    );
    Ok(())
}

#[test]
fn filter_drops_words_with_excluded_letters() -> Result<(), AdvisorError> {
    let words = arcs(&["worda", "wordb", "other", "smore"]);
    let state = ConstraintState::from_codes(5, "", "", "w")?;

    assert_eq!(filter_candidates(&words, &state), arcs(&["other", "smore"]));
    Ok(())
}

#[test]
fn filter_with_empty_state_keeps_everything_in_order() {
    let words = arcs(&["worda", "wordb", "other", "smore"]);

    assert_eq!(filter_candidates(&words, &ConstraintState::new()), words);
}

#[test]
fn filter_excluded_letter_leaves_other_words_untouched() -> Result<(), AdvisorError> {
    let words = arcs(&["zesty", "worda", "fuzzy", "other"]);
    let state = ConstraintState::from_codes(5, "", "", "z")?;

    assert_eq!(filter_candidates(&words, &state), arcs(&["worda", "other"]));
    Ok(())
}

#[test]
fn filter_is_idempotent() -> Result<(), AdvisorError> {
    let words = arcs(&["worda", "wordb", "other", "smore"]);
    let state = ConstraintState::from_codes(5, "", "o----", "b")?;

    let once = filter_candidates(&words, &state);
    let twice = filter_candidates(&once, &state);

    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn filter_is_monotone_under_additional_feedback() -> Result<(), AdvisorError> {
    let words = arcs(&["worda", "wordb", "other", "smore"]);
    let mut state = ConstraintState::from_feedback(&GuessFeedback::from_code("champ", "xxxxx")?);

    let after_one_round = filter_candidates(&words, &state);
    assert_eq!(after_one_round, arcs(&["wordb"]));

    state.update(&GuessFeedback::from_code("sword", "x----")?);
    let after_two_rounds = filter_candidates(&after_one_round, &state);
    assert!(after_two_rounds.len() <= after_one_round.len());
    assert_eq!(after_two_rounds, arcs(&["wordb"]));
    Ok(())
}

#[test]
fn filter_contradictory_state_yields_empty_set() -> Result<(), AdvisorError> {
    // 'a' is confirmed at the first position and simultaneously excluded;
    // the contradiction surfaces as an empty result, not a crash.
    let words = arcs(&["angle", "ankle", "apple"]);
    let state = ConstraintState::from_codes(5, "a----", "", "a")?;

    assert!(filter_candidates(&words, &state).is_empty());
    Ok(())
}

#[test]
fn filter_survivors_satisfy_every_fact() -> Result<(), AdvisorError> {
    let words = arcs(&[
        "angle", "ankle", "apple", "amble", "eagle", "anode", "askew",
    ]);
    let state = ConstraintState::from_codes(5, "a---e", "-l---", "p")?;

    let surviving = filter_candidates(&words, &state);

    assert!(!surviving.is_empty());
    for word in &surviving {
        assert_eq!(word.chars().next(), Some('a'));
        assert_eq!(word.chars().nth(4), Some('e'));
        assert_ne!(word.chars().nth(1), Some('l'));
        assert!(word.contains('l'));
        assert!(!word.contains('p'));
    }
    Ok(())
}

#[test]
fn comparison_state_filters_like_one_round_of_feedback() {
    // Guessing "apple" against the secret "angle" confirms a, l and e in
    // place and rules out p; "apple" itself is filtered out while both
    // remaining p-free words survive.
    let words = arcs(&["apple", "angle", "ankle"]);
    let state = ConstraintState::from_comparison("apple", "angle");

    assert_eq!(filter_candidates(&words, &state), arcs(&["angle", "ankle"]));
}

#[test]
fn comparison_state_against_itself_retains_only_exact_matches() {
    let words = arcs(&["apple", "angle", "ankle"]);
    let state = ConstraintState::from_comparison("apple", "apple");

    assert_eq!(filter_candidates(&words, &state), arcs(&["apple"]));
}
