use std::collections::HashSet;

use log::warn;

/// Separators used when none are given on the command line: space, punctuation,
/// brackets and tab.
pub const DEFAULT_SEPARATORS: &str = " ,.?!-:;[]{}/'\"()<>@#$%^&*_\t";

/// The characters that delimit words. Built once per run and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    pub fn new(separators: &str) -> Self {
        let chars: HashSet<char> = separators.chars().collect();

        // Text is lowercased before tokenizing, so an uppercase separator never matches.
        for c in &chars {
            if !c.to_lowercase().eq(std::iter::once(*c)) {
                warn!("separator {c:?} changes under lowercasing and will never match");
            }
        }

        SeparatorSet { chars }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        SeparatorSet::new(DEFAULT_SEPARATORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let seps = SeparatorSet::new("  ..,");
        assert_eq!(seps.len(), 3);
        assert!(seps.contains(' '));
        assert!(seps.contains(','));
        assert!(!seps.contains('a'));
    }

    #[test]
    fn default_covers_tab_and_quotes() {
        let seps = SeparatorSet::default();
        for c in ['\t', '"', '\'', ' ', '<', '>', '_'] {
            assert!(seps.contains(c), "missing {c:?}");
        }
        assert!(!seps.contains('\n'));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let seps = SeparatorSet::new("");
        assert!(seps.is_empty());
        assert!(!seps.contains(' '));
    }
}
