//! Word capitalization.

/// Characters after which a letter starts a new capitalized part.
const PART_DELIMITERS: [char; 5] = ['-', '/', '(', '.', '\''];

/// Re-capitalize words written entirely in upper case.
///
/// A word is a run of non-space characters. Words with at least two letters,
/// all of them upper case, are lowercased and re-capitalized at the start and
/// after each of `-`, `/`, `(`, `.` and `'`. Mixed-case words and words in
/// `ignored` (compared without surrounding punctuation) are kept as they are.
///
/// ```
/// use sto_bus_rules::text::title_case_words;
///
/// let ignored = vec!["STO".to_string()];
/// assert_eq!(
///     title_case_words("STATION CITÉ/G-ROY STO", &ignored),
///     "Station Cité/G-Roy STO"
/// );
/// assert_eq!(title_case_words("Rue McCONNELL", &ignored), "Rue McCONNELL");
/// ```
pub fn title_case_words(text: &str, ignored: &[String]) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if is_upper_case_word(word) && !is_ignored(word, ignored) {
            out.push_str(&capitalize_parts(word));
        } else {
            out.push_str(word);
        }
    }
    out
}

fn is_upper_case_word(word: &str) -> bool {
    let mut letters = 0;
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        if !c.is_uppercase() {
            return false;
        }
        letters += 1;
    }
    letters >= 2
}

fn is_ignored(word: &str, ignored: &[String]) -> bool {
    let bare = word.trim_matches(|c: char| !c.is_alphanumeric());
    ignored.iter().any(|w| w == bare)
}

fn capitalize_parts(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut part_start = true;
    for c in word.chars() {
        if part_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        part_start = PART_DELIMITERS.contains(&c);
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Title-casing its own output changes nothing
        #[test]
        fn idempotent(s in "[A-Za-zÉÈéè' ./-]{0,40}") {
            let once = title_case_words(&s, &[]);
            let twice = title_case_words(&once, &[]);
            prop_assert_eq!(once, twice);
        }

        /// Only letter case changes, never length in chars
        #[test]
        fn same_char_count(s in "[A-Z ./-]{0,40}") {
            let out = title_case_words(&s, &[]);
            prop_assert_eq!(out.chars().count(), s.chars().count());
        }
    }
}
