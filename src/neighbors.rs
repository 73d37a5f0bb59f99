use std::collections::BTreeSet;

use crate::words::{Dictionary, normalize_phrase};

const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// All valid phrases at edit distance 1 from `phrase`: single-character
/// deletions, substitutions, and insertions, keeping only candidates whose
/// every word is in the dictionary.
///
/// Mutations operate on the lowercased phrase and results are normalized to
/// Title Case, so casing never produces duplicate neighbors. The normalized
/// start phrase itself is excluded. Returned in sorted order for deterministic
/// graph construction.
pub fn neighbors(phrase: &str, dict: &Dictionary) -> Vec<String> {
    let lower: Vec<char> = phrase.to_lowercase().chars().collect();
    let mut found: BTreeSet<String> = BTreeSet::new();

    let mut consider = |candidate: String| {
        if dict.is_valid_phrase(&candidate) {
            found.insert(normalize_phrase(&candidate));
        }
    };

    // Deletions. Removing a space merges the adjacent words into one candidate word.
    for i in 0..lower.len() {
        let candidate: String = lower[..i].iter().chain(&lower[i + 1..]).collect();
        consider(candidate);
    }

    // Substitutions, skipping spaces so word boundaries stay put.
    for i in 0..lower.len() {
        if lower[i] == ' ' {
            continue;
        }
        for &ch in ALPHABET {
            if ch == lower[i] {
                continue;
            }
            let mut candidate = lower.clone();
            candidate[i] = ch;
            consider(candidate.into_iter().collect());
        }
    }

    // Insertions, at every position including both ends.
    for i in 0..=lower.len() {
        for &ch in ALPHABET {
            let candidate: String = lower[..i]
                .iter()
                .copied()
                .chain(std::iter::once(ch))
                .chain(lower[i..].iter().copied())
                .collect();
            consider(candidate);
        }
    }

    found.remove(&normalize_phrase(phrase));
    found.into_iter().collect()
}
