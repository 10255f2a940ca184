use hangman::cli::parse_cli;
use hangman::game_loop::game_loop;
use hangman::wordbank::{WordBank, WordSource, load_wordbank_from_file, user_wordbank_path};
use std::io;

fn main() {
    env_logger::init();

    let cli = parse_cli();
    let mut bank = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => WordBank::new(words),
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return;
            }
        },
        None => WordBank::embedded(),
    };

    // Merge the optional per-user word file into the pool
    if let Some(path) = user_wordbank_path()
        && let Ok(words) = load_wordbank_from_file(&path)
    {
        for word in &words {
            bank.add_word(word);
        }
    }

    let stdin = io::stdin();
    game_loop(bank, stdin.lock());
}
