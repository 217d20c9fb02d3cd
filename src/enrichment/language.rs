//! Script detection and language classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Arabic letter share at or above which a chunk stops being English.
const ARABIC_THRESHOLD: f64 = 0.20;

/// Latin letter share at or above which an Arabic chunk counts as mixed.
const LATIN_THRESHOLD: f64 = 0.05;

/// Detected dominant language of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Arabic,
    Mixed,
}

impl Language {
    /// Get a string representation of the language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Arabic => "arabic",
            Language::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a character falls in the Arabic Unicode block.
fn is_arabic_char(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Check whether the text contains any Arabic-block character.
pub fn has_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_char)
}

/// Check whether the text contains any ASCII letter.
pub fn has_latin_script(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// Classify the dominant language by letter proportions.
///
/// Only letters enter the denominator; digits, punctuation and whitespace
/// are ignored. Text without a single letter defaults to English — the
/// classification is total and never fails.
pub fn classify_language(text: &str) -> Language {
    let mut letters = 0usize;
    let mut arabic = 0usize;
    let mut latin = 0usize;

    for c in text.chars() {
        if c.is_alphabetic() {
            letters += 1;
            if is_arabic_char(c) {
                arabic += 1;
            } else if c.is_ascii_alphabetic() {
                latin += 1;
            }
        }
    }

    if letters == 0 {
        return Language::English;
    }

    let arabic_share = arabic as f64 / letters as f64;
    let latin_share = latin as f64 / letters as f64;

    if arabic_share >= ARABIC_THRESHOLD {
        if latin_share >= LATIN_THRESHOLD {
            Language::Mixed
        } else {
            Language::Arabic
        }
    } else {
        Language::English
    }
}
