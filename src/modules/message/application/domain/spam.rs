//! Content heuristic applied to contact messages before they are stored.

use regex::Regex;
use std::sync::LazyLock;

/// Share of characters that may be neither alphanumeric nor whitespace.
const MAX_SYMBOL_RATIO: f64 = 0.30;

/// Same character this many times in a row reads as keyboard mashing.
const REPEATED_RUN: usize = 5;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(https?://|\bwww\.)").expect("valid regex"));

static MARKETING_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(buy now|click here|order now|act now|free money|limited time offer|earn money fast|work from home)\b",
    )
    .expect("valid regex")
});

static LONG_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S{30,}").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpamSignal {
    Link,
    MarketingPhrase,
    RepeatedCharacter,
    LongToken,
    TooManySymbols,
}

impl SpamSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpamSignal::Link => "link",
            SpamSignal::MarketingPhrase => "marketing_phrase",
            SpamSignal::RepeatedCharacter => "repeated_character",
            SpamSignal::LongToken => "long_token",
            SpamSignal::TooManySymbols => "too_many_symbols",
        }
    }
}

/// First spam signal found in `text`, if any.
pub fn detect_spam(text: &str) -> Option<SpamSignal> {
    if LINK.is_match(text) {
        return Some(SpamSignal::Link);
    }
    if MARKETING_PHRASE.is_match(text) {
        return Some(SpamSignal::MarketingPhrase);
    }
    if has_repeated_run(text, REPEATED_RUN) {
        return Some(SpamSignal::RepeatedCharacter);
    }
    if LONG_TOKEN.is_match(text) {
        return Some(SpamSignal::LongToken);
    }
    if symbol_ratio(text) > MAX_SYMBOL_RATIO {
        return Some(SpamSignal::TooManySymbols);
    }
    None
}

fn has_repeated_run(text: &str, run: usize) -> bool {
    let mut previous = None;
    let mut length = 0;

    for c in text.chars() {
        if Some(c) == previous {
            length += 1;
        } else {
            previous = Some(c);
            length = 1;
        }
        if length >= run {
            return true;
        }
    }
    false
}

fn symbol_ratio(text: &str) -> f64 {
    let (total, symbols) = text.chars().fold((0usize, 0usize), |(total, symbols), c| {
        let symbol = !c.is_alphanumeric() && !c.is_whitespace();
        (total + 1, symbols + usize::from(symbol))
    });

    if total == 0 {
        0.0
    } else {
        symbols as f64 / total as f64
    }
}
