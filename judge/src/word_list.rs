use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};
use wordgrid::{Word, WordList};

/// Reads a word list with one word per line.
pub fn load_word_list(path: &Path) -> anyhow::Result<WordList> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read word list '{}'", path.display()))?;
    let words = parse_word_list(&contents);
    if words.is_empty() {
        anyhow::bail!("Word list '{}' contains no usable words", path.display());
    }
    info!(path = %path.display(), num_words = words.len(), "Loaded word list");
    Ok(words)
}

/// Skips blank lines and lines that are not made up of letters only.
pub fn parse_word_list(contents: &str) -> WordList {
    let mut words = WordList::new();
    for line in contents.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match line.parse::<Word>() {
            Ok(word) => {
                words.insert(word);
            }
            Err(err) => debug!(line, %err, "Skipping word list entry"),
        }
    }
    words
}
