use crate::{debug_log, warn_log};
use rand::prelude::IndexedRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Word handed out when the pool has nothing to offer.
pub const FALLBACK_WORD: &str = "DEFAULT";

const MIN_WORD_LEN: usize = 6;
const MAX_WORD_LEN: usize = 8;

/// Where the game draws its secret words from.
///
/// The engine only depends on these three capabilities; tests substitute a
/// deterministic implementation.
pub trait WordSource {
    /// One word drawn at random from the pool, uppercase. Never empty: an
    /// exhausted pool yields [`FALLBACK_WORD`].
    fn get_word(&mut self) -> String;

    /// Register a candidate word. Accepted only if it normalizes to 6-8
    /// ASCII letters and is not already present; anything else is silently
    /// ignored.
    fn add_word(&mut self, candidate: &str);

    /// Number of distinct words currently in the pool.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_valid_word(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && word.chars().all(|c| c.is_ascii_uppercase())
}

/// Vocabulary pool backing the game.
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a pool from candidate words, dropping invalid ones and duplicates.
    pub fn new(candidates: Vec<String>) -> Self {
        let mut bank = Self { words: Vec::new() };
        for candidate in &candidates {
            bank.add_word(candidate);
        }
        bank
    }

    /// The word list compiled into the binary.
    pub fn embedded() -> Self {
        Self::new(load_wordbank_from_str(EMBEDDED_WORDBANK))
    }
}

impl WordSource for WordBank {
    fn get_word(&mut self) -> String {
        match self.words.choose(&mut rand::rng()) {
            Some(word) => word.clone(),
            None => {
                warn_log!("word bank is empty, falling back to '{FALLBACK_WORD}'");
                FALLBACK_WORD.to_string()
            }
        }
    }

    fn add_word(&mut self, candidate: &str) {
        let word = candidate.trim().to_uppercase();
        if is_valid_word(&word) && !self.words.contains(&word) {
            debug_log!("adding '{word}' to the word bank");
            self.words.push(word);
        }
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| is_valid_word(word))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_uppercase();
        if is_valid_word(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Optional per-user word file, merged into the pool at startup if present.
pub fn user_wordbank_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".hangman_words"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_word_accepts_six_to_eight_letters() {
        let mut bank = WordBank::new(Vec::new());
        bank.add_word("PENCIL");
        bank.add_word("JOURNAL");
        bank.add_word("FRAGMENT");
        assert_eq!(bank.len(), 3);
    }

    #[test]
    fn test_add_word_normalizes_case_and_whitespace() {
        let mut bank = WordBank::new(Vec::new());
        bank.add_word("  pencil  ");
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.get_word(), "PENCIL");
    }

    #[test]
    fn test_add_word_rejects_wrong_length() {
        let mut bank = WordBank::new(Vec::new());
        bank.add_word("CAT"); // too short
        bank.add_word("PASTA"); // still too short
        bank.add_word("ICECREAMS"); // too long
        assert_eq!(bank.len(), 0);
    }

    #[test]
    fn test_add_word_rejects_non_letters() {
        let mut bank = WordBank::new(Vec::new());
        bank.add_word("PENC1L");
        bank.add_word("PEN CIL");
        bank.add_word("PEN-CIL");
        assert_eq!(bank.len(), 0);
    }

    #[test]
    fn test_add_word_ignores_duplicates() {
        let mut bank = WordBank::new(Vec::new());
        bank.add_word("PENCIL");
        bank.add_word("pencil");
        bank.add_word("PENCIL");
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_empty_pool_returns_fallback() {
        let mut bank = WordBank::new(Vec::new());
        assert!(bank.is_empty());
        assert_eq!(bank.get_word(), FALLBACK_WORD);
    }

    #[test]
    fn test_get_word_draws_from_pool() {
        let mut bank = WordBank::new(vec!["PENCIL".to_string(), "JOURNAL".to_string()]);
        for _ in 0..20 {
            let word = bank.get_word();
            assert!(word == "PENCIL" || word == "JOURNAL");
        }
    }

    #[test]
    fn test_new_deduplicates_seed_list() {
        let bank = WordBank::new(vec![
            "CAPTURE".to_string(),
            "CAPTURE".to_string(),
            "BALANCE".to_string(),
        ]);
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_load_wordbank_from_str() {
        let data = "pencil\nshort\n\n  journal \ntoolongword\nfragment";
        let words = load_wordbank_from_str(data);
        assert_eq!(words, vec!["PENCIL", "JOURNAL", "FRAGMENT"]);
    }

    #[test]
    fn test_embedded_wordbank_is_usable() {
        let bank = WordBank::embedded();
        assert!(bank.len() > 100);
    }
}
