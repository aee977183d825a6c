use std::io::Cursor;
use std::sync::Arc;
use wordle_advisor::*;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec,
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<_>>>()
        );
    };
}

#[test]
fn word_bank_from_reader_lowercases_and_skips_blanks() -> std::io::Result<()> {
    let mut cursor = Cursor::new(String::from("\n\nWorda\n wordb\n"));

    let bank = WordBank::from_reader(&mut cursor)?;

    assert_eq!(bank.len(), 2);
    assert_arc_eq!(bank.all_words(), ["worda", "wordb"]);
    Ok(())
}

#[test]
fn word_bank_preserves_load_order() {
    let bank = WordBank::from_iterator(["smore", "other", "worda"]);

    assert_arc_eq!(bank.all_words(), ["smore", "other", "worda"]);
}

#[test]
fn word_bank_from_iterator_skips_empty_entries() {
    let bank = WordBank::from_iterator(["", "worda", "  "]);

    assert_eq!(bank.len(), 1);
    assert_arc_eq!(bank.all_words(), ["worda"]);
}

#[test]
fn word_bank_words_of_length_selects_matching_subset() {
    let bank = WordBank::from_iterator(["cat", "worda", "dog", "wordb"]);

    assert_arc_eq!(bank.words_of_length(5), ["worda", "wordb"]);
    assert_arc_eq!(bank.words_of_length(3), ["cat", "dog"]);
    assert!(bank.words_of_length(4).is_empty());
}
