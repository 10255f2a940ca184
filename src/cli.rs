use crate::game::{Game, GuessOutcome};
use crate::gallows::{MAX_WRONG_GUESSES, StageGrid, StageMark};
use crate::wordbank::WordSource;
use clap::Parser;
use std::io::BufRead;

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (6-8 letter words)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Console input/output functions

pub enum PlayerInput {
    Guess(char),
    AddWord(String),
    NewGame,
    Exit,
    Invalid,
}

/// Classify one trimmed input line. Commands win over guesses; anything that
/// is not a command or a single letter is `Invalid`.
pub fn classify_input(line: &str) -> PlayerInput {
    let input = line.trim().to_uppercase();

    match input.as_str() {
        "EXIT" => PlayerInput::Exit,
        "NEW" => PlayerInput::NewGame,
        _ => {
            if let Some(candidate) = input.strip_prefix("ADD ") {
                return PlayerInput::AddWord(candidate.trim().to_string());
            }
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) if letter.is_ascii_alphabetic() => PlayerInput::Guess(letter),
                _ => PlayerInput::Invalid,
            }
        }
    }
}

/// Read and classify the next line. End of input counts as `Exit` so a piped
/// session terminates cleanly.
pub fn read_input<R: BufRead>(reader: &mut R) -> PlayerInput {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => PlayerInput::Exit,
        Ok(_) => classify_input(&line),
    }
}

pub fn display_welcome(word_count: usize) {
    println!("Welcome to Hangman. Guess wisely.");
    println!("Loaded {word_count} words.");
}

pub fn display_prompt(game_over: bool) {
    if game_over {
        println!("\nType 'new' for another round, or 'exit' to quit:");
    } else {
        println!("\nEnter a letter ('new' restarts, 'add <word>' extends the bank, 'exit' quits):");
    }
}

pub fn display_grid(grid: &StageGrid) {
    for row in grid {
        let line: String = row.iter().map(|cell| cell.map_or(' ', StageMark::glyph)).collect();
        println!("  {line}");
    }
}

pub fn display_board<S: WordSource>(game: &Game<S>) {
    display_grid(&game.gallows_grid());
    println!("Word: {}", game.visible_word());
    let guessed: Vec<String> = game.guessed_letters().iter().map(|c| c.to_string()).collect();
    println!("Guessed: {}", guessed.join(" "));
    println!(
        "Wrong guesses: {}/{}",
        game.wrong_guess_count(),
        MAX_WRONG_GUESSES
    );
}

pub fn display_outcome(letter: char, outcome: GuessOutcome) {
    match outcome {
        GuessOutcome::Correct => println!("'{letter}' is in the word!"),
        GuessOutcome::Incorrect => println!("'{letter}' is not in the word."),
        GuessOutcome::AlreadyGuessed => println!("You already tried '{letter}'."),
        GuessOutcome::NotALetter => println!("Please enter a single letter."),
        GuessOutcome::GameOver => println!("The game is already over."),
    }
}

pub fn display_game_over(won: bool, secret_word: &str) {
    if won {
        println!("Hurray, you guessed the word: {secret_word}");
    } else {
        println!("Game over! The word was: {secret_word}");
    }
}

pub fn display_add_word_result(candidate: &str, added: bool) {
    if added {
        println!("Added '{}' to the word bank.", candidate.to_uppercase());
    } else {
        println!("'{candidate}' was not added (needs 6-8 letters, no repeats).");
    }
}

pub fn display_new_game_message() {
    println!("New game started!");
}

pub fn display_invalid_input() {
    println!("Invalid input. Please enter a single letter.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}
