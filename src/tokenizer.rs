use crate::separators::SeparatorSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// A maximal run of either separator or non-separator characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// Returns the longest run starting at byte offset `position` whose characters
/// all share the separator membership of the character at `position`.
///
/// `position` must be a char boundary inside `text`. The run never extends
/// past the end of `text`.
pub fn next_word_or_separator<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> &'a str {
    let rest = &text[position..];
    let Some(first) = rest.chars().next() else {
        return rest;
    };
    let is_sep = separators.contains(first);
    let end = rest
        .char_indices()
        .find(|&(_, c)| separators.contains(c) != is_sep)
        .map_or(rest.len(), |(i, _)| i);
    &rest[..end]
}

/// Iterator over the tokens of a single line. Concatenating every token
/// reproduces the line.
pub struct Tokens<'a, 's> {
    line: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a, 's> Tokens<'a, 's> {
    pub fn new(line: &'a str, separators: &'s SeparatorSet) -> Self {
        Tokens {
            line,
            position: 0,
            separators,
        }
    }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.position >= self.line.len() {
            return None;
        }
        let text = next_word_or_separator(self.line, self.position, self.separators);
        self.position += text.len();

        // Runs are homogeneous, the first char decides the kind.
        let kind = match text.chars().next() {
            Some(c) if self.separators.contains(c) => TokenKind::Separator,
            _ => TokenKind::Word,
        };
        Some(Token { text, kind })
    }
}
