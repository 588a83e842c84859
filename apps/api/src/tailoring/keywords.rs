//! Keyword extraction: frequency-ranked terms from a raw job description.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Maximum number of keywords kept from a job description.
pub const MAX_KEYWORDS: usize = 15;

/// Words of three characters or fewer never count as keywords.
const MIN_KEYWORD_LEN: usize = 4;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "is",
    "are", "was", "were", "be", "been", "being",
];

/// A single keyword from the JD with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub frequency: u32,
}

/// Extracts the most frequent keywords from a job description.
///
/// Text is lowercased and every character outside `[a-z0-9_]` and whitespace
/// becomes a separator. Ties in frequency keep first-occurrence order.
pub fn extract_keywords(job_description: &str) -> Vec<KeywordEntry> {
    let normalized: String = job_description
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut inventory: Vec<KeywordEntry> = Vec::new();

    for word in normalized
        .split_whitespace()
        .filter(|w| w.len() >= MIN_KEYWORD_LEN && !STOP_WORDS.contains(w))
    {
        match positions.get(word) {
            Some(&idx) => inventory[idx].frequency += 1,
            None => {
                positions.insert(word, inventory.len());
                inventory.push(KeywordEntry {
                    keyword: word.to_string(),
                    frequency: 1,
                });
            }
        }
    }

    // sort_by is stable: equal counts stay in first-seen order
    inventory.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    inventory.truncate(MAX_KEYWORDS);
    inventory
}

/// True when the lowercased `text` contains any keyword as a substring.
pub fn mentions_any(text: &str, keywords: &[KeywordEntry]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k.keyword.as_str()))
}
