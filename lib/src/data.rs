use std::io::BufRead;
use std::io::Result;
use std::sync::Arc;

/// Contains the possible words for an advisor session.
///
/// Words are kept in load order; filtering elsewhere in the crate preserves
/// that order.
#[derive(Clone, Debug)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and
    /// converted to lower case; blank lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> Result<Self> {
        Ok(WordBank {
            all_words: word_reader
                .lines()
                .map(|maybe_word| {
                    maybe_word.map(|word| Arc::from(word.trim().to_lowercase().as_str()))
                })
                .filter(|maybe_word| {
                    maybe_word
                        .as_ref()
                        .map_or(true, |word: &Arc<str>| !word.is_empty())
                })
                .collect::<Result<Vec<Arc<str>>>>()?,
        })
    }

    /// Constructs a new `WordBank` from the given words.
    ///
    /// Each word is trimmed and converted to lower case; empty entries are
    /// skipped.
    pub fn from_iterator<S, I>(words: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        WordBank {
            all_words: words
                .into_iter()
                .filter_map(|word| {
                    let word = word.as_ref().trim().to_lowercase();
                    if word.is_empty() {
                        return None;
                    }
                    Some(Arc::from(word.as_str()))
                })
                .collect(),
        }
    }

    /// Retrieves the full list of words, in load order.
    pub fn all_words(&self) -> Vec<Arc<str>> {
        self.all_words.iter().map(Arc::clone).collect()
    }

    /// Retrieves the words of exactly the given length, in load order.
    pub fn words_of_length(&self, word_length: usize) -> Vec<Arc<str>> {
        self.all_words
            .iter()
            .filter(|word| word.chars().count() == word_length)
            .cloned()
            .collect()
    }

    /// Returns the number of words in the bank.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` iff the bank holds no words.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }
}
