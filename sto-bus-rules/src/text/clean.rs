//! Generic label cleanup shared by the agency rules.
//!
//! These are the building blocks the per-agency pipelines are made of.
//! Every function here is total: text that nothing matches is returned
//! unchanged.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex")
}

static VIA_SUFFIX: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\svia\s.*$"));
static TO_PREFIX: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)^.*\s(?:to|à|vers)\s"));
static SLASH_RUN: LazyLock<Regex> = LazyLock::new(|| regex(r"\s*/(?:\s*/)*\s*"));
static SPACES: LazyLock<Regex> = LazyLock::new(|| regex(r"\s+"));
static EMPTY_PARENTHESES: LazyLock<Regex> = LazyLock::new(|| regex(r"\(\s*\)"));
static OPEN_PARENTHESIS: LazyLock<Regex> = LazyLock::new(|| regex(r"\s*\(\s*"));
static CLOSE_PARENTHESIS: LazyLock<Regex> = LazyLock::new(|| regex(r"\s*\)\s*"));
static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| regex(r"\s+([,;])"));
static FR_PARTICLE: LazyLock<Regex> = LazyLock::new(|| regex(r"\s(?:De|Du|Des)\b|\s[DL]'"));

/// `Saint` / `Sainte` as whole words.
pub static SAINT: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\bsaint(e?)\b"));
pub const SAINT_REPLACEMENT: &str = "St${1}";

/// The `et` / `and` connectors.
pub static CLEAN_ET: LazyLock<Regex> = LazyLock::new(|| regex(r"(?i)\b(?:et|and)\b"));
pub const CLEAN_ET_REPLACEMENT: &str = "&";

static ORDINALS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("first", "1st"),
        ("second", "2nd"),
        ("third", "3rd"),
        ("fourth", "4th"),
        ("fifth", "5th"),
        ("sixth", "6th"),
        ("seventh", "7th"),
        ("eighth", "8th"),
        ("ninth", "9th"),
        ("tenth", "10th"),
        ("premi[èe]re", "1re"),
        ("premier", "1er"),
        ("deuxi[èe]me", "2e"),
        ("troisi[èe]me", "3e"),
        ("quatri[èe]me", "4e"),
        ("cinqui[èe]me", "5e"),
        ("sixi[èe]me", "6e"),
        ("septi[èe]me", "7e"),
        ("huiti[èe]me", "8e"),
        ("neuvi[èe]me", "9e"),
        ("dixi[èe]me", "10e"),
    ]
    .into_iter()
    .map(|(word, short)| (regex(&format!(r"(?i)\b{word}\b")), short))
    .collect()
});

// Canada Post French street type abbreviations.
static STREET_TYPES_FR_CA: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("autoroute", "Aut"),
        ("avenue", "Av"),
        ("boulevard", "Boul"),
        ("chemin", "Ch"),
        ("croissant", "Crois"),
        ("impasse", "Imp"),
        ("mont[ée]e", "Mtée"),
        ("place", "Pl"),
        ("promenade", "Prom"),
        ("route", "Rte"),
        ("terrasse", "Terr"),
    ]
    .into_iter()
    .map(|(word, short)| (regex(&format!(r"(?i)\b{word}\b")), short))
    .collect()
});

/// Compose accented characters so `é` and `e\u{301}` match the same rules.
pub fn compose(text: &str) -> String {
    text.nfc().collect()
}

/// Keep only the destination of a headsign.
///
/// Drops a ` via ...` suffix, then everything up to the last ` to `, ` à `
/// or ` vers `.
///
/// ```
/// use sto_bus_rules::text::keep_to_and_remove_via;
///
/// assert_eq!(keep_to_and_remove_via("Aylmer to Ottawa via Taché"), "Ottawa");
/// assert_eq!(keep_to_and_remove_via("Freeman"), "Freeman");
/// ```
pub fn keep_to_and_remove_via(text: &str) -> String {
    let without_via = VIA_SUFFIX.replace(text, "");
    TO_PREFIX.replace(&without_via, "").into_owned()
}

/// Put exactly one space on each side of slashes between two words.
///
/// Consecutive slashes are kept and spaced out the same way. Slashes at
/// either end of the text are left alone.
pub fn clean_slashes(text: &str) -> String {
    SLASH_RUN
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            let range = caps.get(0).map_or(0..0, |m| m.range());
            if range.start == 0 || range.end == text.len() {
                return run.to_string();
            }
            let slashes = run.matches('/').count();
            format!(" {} ", vec!["/"; slashes].join(" "))
        })
        .into_owned()
}

/// Strip separator punctuation and whitespace from both ends.
pub fn clean_bounds(text: &str) -> String {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '/' | ',' | ';' | ':'))
        .to_string()
}

/// Spell ordinal words as numbers (`First` → `1st`, `Deuxième` → `2e`).
pub fn clean_numbers(text: &str) -> String {
    ORDINALS
        .iter()
        .fold(text.to_string(), |acc, (pattern, short)| {
            pattern.replace_all(&acc, *short).into_owned()
        })
}

/// Abbreviate French street types (`Boulevard` → `Boul`, `Chemin` → `Ch`).
pub fn clean_street_types_fr_ca(text: &str) -> String {
    STREET_TYPES_FR_CA
        .iter()
        .fold(text.to_string(), |acc, (pattern, short)| {
            pattern.replace_all(&acc, *short).into_owned()
        })
}

/// Final label cleanup.
///
/// Collapses whitespace, drops empty parentheses, puts a single space
/// outside parentheses and none inside, drops spaces before `,` and `;`,
/// trims, and upper-cases the first character.
pub fn clean_label(text: &str) -> String {
    let label = EMPTY_PARENTHESES.replace_all(text, "");
    let label = OPEN_PARENTHESIS.replace_all(&label, " (");
    let label = CLOSE_PARENTHESIS.replace_all(&label, ") ");
    let label = SPACES.replace_all(&label, " ");
    let label = SPACE_BEFORE_PUNCTUATION.replace_all(&label, "${1}");
    upper_case_first(label.trim())
}

/// [`clean_label`] followed by French particle casing.
///
/// `De`, `Du`, `Des`, `D'` and `L'` are lowercased anywhere but at the start.
pub fn clean_label_fr(text: &str) -> String {
    let label = clean_label(text);
    FR_PARTICLE
        .replace_all(&label, |caps: &Captures| caps[0].to_lowercase())
        .into_owned()
}

fn upper_case_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
