// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod gallows;
pub mod game;
pub mod game_loop;
pub mod logging;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use gallows::{MAX_WRONG_GUESSES, StageGrid, StageMark};
pub use game::{Game, GameStatus, GuessOutcome};
pub use game_loop::game_loop;
pub use wordbank::{
    FALLBACK_WORD, WordBank, WordSource, load_wordbank_from_file, load_wordbank_from_str,
};
