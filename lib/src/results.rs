use std::fmt;

/// One symbol of a feedback code, aligned with a letter of the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterMark {
    /// The letter is in the solution at this exact position.
    Confirmed,
    /// The letter is in the solution, but somewhere else.
    Partial,
    /// The letter is not in the solution.
    Absent,
}

/// Indicates that the advisor was given input it must reject.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AdvisorError {
    /// The guess has the wrong length or contains non-letter characters.
    InvalidGuess,
    /// The feedback does not align with the guess, uses an unrecognized
    /// symbol, or classifies a letter in more than one way.
    InvalidFeedback,
}

impl fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisorError::InvalidGuess => write!(
                f,
                "invalid guess: must consist of letters and match the configured word length"
            ),
            AdvisorError::InvalidFeedback => write!(
                f,
                "invalid feedback: must match the guess length, use only '1', '-', '0' or 'x', \
                 and classify each letter exactly one way"
            ),
        }
    }
}

impl std::error::Error for AdvisorError {}

/// One round of feedback for a guessed word.
#[derive(Debug, PartialEq)]
pub struct GuessFeedback<'a> {
    pub guess: &'a str,
    /// One mark per letter, in the same letter order as the guess.
    pub marks: Vec<LetterMark>,
}

impl<'a> GuessFeedback<'a> {
    /// Parses the string encoding of a feedback round: `1` = confirmed,
    /// `-` = partial, `0` or `x` = absent.
    pub fn from_code(guess: &'a str, code: &str) -> Result<GuessFeedback<'a>, AdvisorError> {
        let marks = code
            .chars()
            .map(|symbol| match symbol {
                '1' => Ok(LetterMark::Confirmed),
                '-' => Ok(LetterMark::Partial),
                '0' | 'x' => Ok(LetterMark::Absent),
                _ => Err(AdvisorError::InvalidFeedback),
            })
            .collect::<Result<Vec<LetterMark>, AdvisorError>>()?;
        Ok(GuessFeedback { guess, marks })
    }

    /// Checks this round against the given word length.
    ///
    /// The guess must pass [`validate_guess`], the marks must align with the
    /// guess, and the letter sets marked confirmed, partial and absent must
    /// be pairwise disjoint: a letter cannot both occur somewhere in the
    /// solution and be absent from it within the same guess.
    pub fn validate(&self, word_length: usize) -> Result<(), AdvisorError> {
        validate_guess(self.guess, word_length)?;
        if self.marks.len() != self.guess.chars().count() {
            return Err(AdvisorError::InvalidFeedback);
        }
        let confirmed = self.letters_marked(LetterMark::Confirmed);
        let partial = self.letters_marked(LetterMark::Partial);
        let absent = self.letters_marked(LetterMark::Absent);
        if confirmed.iter().any(|letter| absent.contains(letter))
            || partial.iter().any(|letter| confirmed.contains(letter))
            || partial.iter().any(|letter| absent.contains(letter))
        {
            return Err(AdvisorError::InvalidFeedback);
        }
        Ok(())
    }

    fn letters_marked(&self, mark: LetterMark) -> Vec<char> {
        self.guess
            .chars()
            .zip(self.marks.iter())
            .filter(|(_, other_mark)| **other_mark == mark)
            .map(|(letter, _)| letter)
            .collect()
    }
}

/// Returns an error unless the guess is `word_length` letters long and
/// entirely alphabetic.
pub fn validate_guess(guess: &str, word_length: usize) -> Result<(), AdvisorError> {
    if guess.chars().count() != word_length || !guess.chars().all(char::is_alphabetic) {
        return Err(AdvisorError::InvalidGuess);
    }
    Ok(())
}
