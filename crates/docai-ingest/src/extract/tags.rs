//! Most frequent content words as tags.

use std::collections::HashMap;

use super::lowercase_words;

const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Only words longer than this become tags.
const MIN_TAG_CHARS: usize = 4;

/// Top `max_tags` words by frequency; ties keep first-seen order.
pub fn extract_tags(content: &str, max_tags: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in lowercase_words(content) {
        if word.chars().count() <= MIN_TAG_CHARS || STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        match index.get(&word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(max_tags).map(|(word, _)| word).collect()
}
