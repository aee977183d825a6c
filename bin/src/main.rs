use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::io::Write;
use std::sync::Arc;
use wordle_advisor::scorers;
use wordle_advisor::*;

/// Suggests the most informative next guess for a Wordle-style puzzle, given
/// the feedback gathered so far.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word
    /// on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// Length of the words being guessed.
    #[clap(long, default_value_t = 5)]
    word_length: usize,

    /// Maximum number of candidates to display at once.
    #[clap(long, default_value_t = 10)]
    display_limit: usize,

    /// Largest candidate count for which the expensive remaining-size
    /// ranking runs.
    #[clap(long, default_value_t = 100)]
    exhaustive_threshold: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the candidates for one accumulated position, without a prompt
    /// loop.
    Batch {
        /// Confirmed letters by position, with '-' for unknown positions.
        confirmed: String,
        /// Misplaced letters by position, with '-' for unknown positions.
        partial: String,
        /// Every letter known to be absent, as one flat string.
        excluded: String,
    },
    /// Run an interactive session, entering a guess and its feedback each
    /// round.
    Interactive,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let mut words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let bank = WordBank::from_reader(&mut words_reader)?;
    let config = AdvisorConfig {
        word_length: args.word_length,
        display_limit: args.display_limit,
        exhaustive_threshold: args.exhaustive_threshold,
    };
    let mut advisor = Advisor::new(&bank, config);

    match args.command {
        Command::Batch {
            confirmed,
            partial,
            excluded,
        } => run_batch(&mut advisor, &confirmed, &partial, &excluded),
        Command::Interactive => run_interactive(&mut advisor),
    }
}

fn run_batch(
    advisor: &mut Advisor,
    confirmed: &str,
    partial: &str,
    excluded: &str,
) -> io::Result<()> {
    if let Err(error) = advisor.apply_codes(
        &confirmed.to_lowercase(),
        &partial.to_lowercase(),
        &excluded.to_lowercase(),
    ) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
    let ranked = advisor.recommendations();
    println!("Current best options ({} remaining):", ranked.len());
    display_candidates(&ranked, advisor.config().display_limit);
    Ok(())
}

fn run_interactive(advisor: &mut Advisor) -> io::Result<()> {
    println!(
        "Enter your guess each round, then its feedback: '1' = right letter in the\n\
         right place, '-' = right letter in the wrong place, '0' or 'x' = letter not\n\
         in the word. E.g. if ALERT came back green at A and T, enter 1xxx1."
    );

    loop {
        match advisor.status() {
            AdvisorStatus::Solved(word) => {
                println!("\nOnly one word left. The solution must be: {}", word);
                return Ok(());
            }
            AdvisorStatus::Exhausted => {
                println!("\nNo candidates remain. Check the feedback you entered.");
                return Ok(());
            }
            AdvisorStatus::InProgress => {}
        }

        let ranked = advisor.recommendations();
        let preferred = scorers::with_distinct_letters(&ranked);
        let shown = if preferred.is_empty() { &ranked } else { &preferred };
        println!("\nCurrent best options ({} remaining):", ranked.len());
        display_candidates(shown, advisor.config().display_limit);

        let guess = prompt_guess(advisor.config().word_length)?;
        prompt_and_record_feedback(advisor, &guess)?;
    }
}

fn display_candidates(words: &[Arc<str>], display_limit: usize) {
    for word in words.iter().take(display_limit) {
        println!("  {}", word);
    }
    if words.len() > display_limit {
        println!("  ...");
    }
}

fn prompt_guess(word_length: usize) -> io::Result<String> {
    loop {
        let guess = prompt_line("Enter your guess: ")?.to_lowercase();
        match validate_guess(&guess, word_length) {
            Ok(()) => return Ok(guess),
            Err(error) => println!("{}", error),
        }
    }
}

fn prompt_and_record_feedback(advisor: &mut Advisor, guess: &str) -> io::Result<()> {
    loop {
        let code = prompt_line(&format!("Enter the feedback for {}: ", guess))?.to_lowercase();
        let recorded = GuessFeedback::from_code(guess, &code)
            .and_then(|feedback| advisor.record_feedback(&feedback));
        match recorded {
            Ok(()) => return Ok(()),
            Err(error) => println!("{}", error),
        }
    }
}

fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the session finished",
        ));
    }
    Ok(buffer.trim().to_string())
}
