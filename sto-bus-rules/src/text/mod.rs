//! Text normalization building blocks.
//!
//! Rule sets ([`RuleSet`]) are ordered lists of named rewrite steps. The
//! helpers in this module are the generic steps every agency pipeline uses:
//! capitalization, slash and label cleanup, street types, and so on.

mod case;
mod clean;
mod rule;

pub use case::title_case_words;
pub use clean::{
    CLEAN_ET, CLEAN_ET_REPLACEMENT, SAINT, SAINT_REPLACEMENT, clean_bounds, clean_label,
    clean_label_fr, clean_numbers, clean_slashes, clean_street_types_fr_ca, compose,
    keep_to_and_remove_via,
};
pub use rule::{Rule, RuleSet, Transform};
