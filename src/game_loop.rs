//! Interactive console loop.
//!
//! Generic over the input reader and the word source so tests can drive a
//! whole session from a `Cursor` with a pinned secret word. The loop owns no
//! game rules: it forwards input to the engine and re-queries state to render
//! feedback after every guess.

use crate::cli::{
    display_add_word_result, display_board, display_exit_message, display_game_over,
    display_invalid_input, display_new_game_message, display_outcome, display_prompt,
    display_welcome, read_input, PlayerInput,
};
use crate::game::{Game, GuessOutcome};
use crate::wordbank::WordSource;
use std::io::BufRead;

pub fn game_loop<S: WordSource, R: BufRead>(source: S, mut reader: R) {
    let word_count = source.len();
    let mut game = Game::new(source);

    display_welcome(word_count);
    display_board(&game);

    loop {
        display_prompt(game.is_game_over());
        match read_input(&mut reader) {
            PlayerInput::Exit => {
                display_exit_message();
                break;
            }
            PlayerInput::NewGame => {
                game.reset();
                display_new_game_message();
                display_board(&game);
            }
            PlayerInput::AddWord(candidate) => {
                let before = game.source().len();
                game.source_mut().add_word(&candidate);
                display_add_word_result(&candidate, game.source().len() > before);
            }
            PlayerInput::Guess(letter) => {
                let outcome = game.submit_guess(letter);
                display_outcome(letter, outcome);
                if matches!(outcome, GuessOutcome::Correct | GuessOutcome::Incorrect) {
                    display_board(&game);
                    if game.is_game_over() {
                        display_game_over(game.is_won(), game.secret_word());
                    }
                }
            }
            PlayerInput::Invalid => display_invalid_input(),
        }
    }
}
