//! Priority-ordered keyword rules.
//!
//! Classifiers are expressed as `&[KeywordRule]` tables evaluated
//! first-match-wins. Inputs routinely satisfy several rules at once, so the
//! position of a rule in its table is part of its meaning.

/// A labelled predicate over lower-cased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Value produced when the rule matches.
    pub label: &'static str,
    /// At least one of these must occur (ignored when empty).
    pub any_of: &'static [&'static str],
    /// Every one of these must occur.
    pub all_of: &'static [&'static str],
    /// None of these may occur.
    pub none_of: &'static [&'static str],
}

impl KeywordRule {
    /// Rule matching when any term occurs.
    pub const fn any(label: &'static str, terms: &'static [&'static str]) -> Self {
        Self {
            label,
            any_of: terms,
            all_of: &[],
            none_of: &[],
        }
    }

    /// Rule matching when all terms occur.
    pub const fn all(label: &'static str, terms: &'static [&'static str]) -> Self {
        Self {
            label,
            any_of: &[],
            all_of: terms,
            none_of: &[],
        }
    }

    /// Add exclusion terms to a rule.
    pub const fn excluding(self, terms: &'static [&'static str]) -> Self {
        Self {
            none_of: terms,
            ..self
        }
    }

    /// Test the rule against text that is already lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        let any = self.any_of.is_empty() || self.any_of.iter().any(|t| lowered.contains(t));
        let all = self.all_of.iter().all(|t| lowered.contains(t));
        let none = !self.none_of.iter().any(|t| lowered.contains(t));
        any && all && none
    }
}

/// Label of the first matching rule, if any.
pub fn first_match(rules: &[KeywordRule], lowered: &str) -> Option<&'static str> {
    rules.iter().find(|r| r.matches(lowered)).map(|r| r.label)
}

/// Labels of every matching rule, in table order.
pub fn all_matches<'a>(
    rules: &'a [KeywordRule],
    lowered: &'a str,
) -> impl Iterator<Item = &'static str> + 'a {
    rules.iter().filter(move |r| r.matches(lowered)).map(|r| r.label)
}
