//! Ordered text rewrite rules.
//!
//! A [`RuleSet`] is an ordered list of named [`Rule`]s. Each rule's output
//! feeds the next one, so later rules may rely on normalization done by
//! earlier ones. The order is part of the behaviour and is exposed through
//! [`RuleSet::names`] so it can be audited and tested.

use std::borrow::Cow;
use std::fmt;

use regex::Regex;
use tracing::trace;

/// How a rule rewrites its input.
pub enum Transform {
    /// Find-and-replace every match of `pattern` with `replacement`.
    ///
    /// The replacement uses `regex` template syntax (`${1}`, `$name`).
    Replace {
        pattern: &'static Regex,
        replacement: &'static str,
    },

    /// Arbitrary text transformation (title-casing, label cleanup, ...).
    Map(Box<dyn Fn(&str) -> String + Send + Sync>),
}

/// A single named rewrite step.
pub struct Rule {
    name: &'static str,
    transform: Transform,
}

impl Rule {
    /// A find-and-replace rule.
    pub fn replace(name: &'static str, pattern: &'static Regex, replacement: &'static str) -> Self {
        Self {
            name,
            transform: Transform::Replace {
                pattern,
                replacement,
            },
        }
    }

    /// A rule backed by a plain function or closure.
    pub fn map<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name,
            transform: Transform::Map(Box::new(f)),
        }
    }

    /// Returns the rule's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this rule to `text`.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.transform {
            Transform::Replace {
                pattern,
                replacement,
            } => pattern.replace_all(text, *replacement),
            Transform::Map(f) => {
                let out = f(text);
                if out == text {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(out)
                }
            }
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.transform {
            Transform::Replace {
                pattern,
                replacement,
            } => f
                .debug_struct("Rule")
                .field("name", &self.name)
                .field("pattern", &pattern.as_str())
                .field("replacement", replacement)
                .finish(),
            Transform::Map(_) => f
                .debug_struct("Rule")
                .field("name", &self.name)
                .finish_non_exhaustive(),
        }
    }
}

/// An ordered list of rules applied one after another.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; it runs after every rule already in the set.
    pub fn then(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Run every rule in order and return the final text.
    ///
    /// Never fails: text no rule matches comes back unchanged.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            let rewritten = match rule.apply(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            trace!(rule = rule.name, from = %current, to = %rewritten, "rule rewrote text");
            current = rewritten;
        }
        current
    }

    /// Rule names in application order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(Rule::name)
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
