use std::cmp::Ordering;

use log::debug;

use crate::word_count::WordCount;

/// Case-insensitive ordering of words, falling back to exact comparison so
/// that distinct words never compare equal.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

// Most frequent first; equal counts in alphabetical order.
fn by_count_desc(a: &(String, usize), b: &(String, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| cmp_ignore_case(&a.0, &b.0))
}

/// Picks the `n` most frequent words and returns them in alphabetical order.
///
/// Ties on count are settled alphabetically, so when several words share the
/// lowest selected count the ones earliest in the alphabet make the cut. The
/// result has `min(n, word_count.len())` entries; `n == 0` selects nothing.
pub fn select_top_n(word_count: WordCount, n: usize) -> Vec<(String, usize)> {
    if n == 0 {
        return Vec::new();
    }

    let mut selected: Vec<(String, usize)> = word_count.into_iter().collect();

    // Partial sort: only the first n need to be the most frequent.
    if n < selected.len() {
        selected.select_nth_unstable_by(n, by_count_desc);
        selected.truncate(n);
    }

    selected.sort_by(|a, b| cmp_ignore_case(&a.0, &b.0));
    debug!("selected {} of the requested {n} words", selected.len());
    selected
}
