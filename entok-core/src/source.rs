//! Character-indexed view over source text
//!
//! Offsets produced by the tokenizers count characters, not bytes. Regex
//! matches report byte positions, so this view keeps the byte position of
//! every character boundary and translates between the two in O(log n).

/// Source text indexed by character position
#[derive(Debug, Clone)]
pub struct SourceText<'a> {
    text: &'a str,
    /// Byte offset of every character boundary; `bounds.len() == char_count + 1`
    bounds: Vec<usize>,
    chars: Vec<char>,
}

impl<'a> SourceText<'a> {
    /// Index the given text
    pub fn new(text: &'a str) -> Self {
        let (mut bounds, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        bounds.push(text.len());
        Self {
            text,
            bounds,
            chars,
        }
    }

    /// The underlying string
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Number of characters
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len() - 1
    }

    /// Whether the text has no characters
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte offset of character position `index` (may equal `len()`)
    #[inline]
    pub fn byte_offset(&self, index: usize) -> usize {
        self.bounds[index]
    }

    /// Character position of a byte offset that lies on a character boundary
    ///
    /// Offsets inside a multi-byte character resolve to the character that
    /// contains them.
    pub fn char_index(&self, byte: usize) -> usize {
        match self.bounds.binary_search(&byte) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        }
    }

    /// Characters `begin..end` as a string slice
    #[inline]
    pub fn slice(&self, begin: usize, end: usize) -> &'a str {
        &self.text[self.bounds[begin]..self.bounds[end]]
    }

    /// Characters `begin..end` as a char slice
    #[inline]
    pub fn chars(&self, begin: usize, end: usize) -> &[char] {
        &self.chars[begin..end]
    }

    /// Character at position `index`
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Position of the first non-whitespace character
    pub fn first_non_space(&self) -> Option<usize> {
        self.text
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map(|(b, _)| self.char_index(b))
    }

    /// Position just past the last non-whitespace character
    pub fn last_non_space_end(&self) -> Option<usize> {
        self.text
            .char_indices()
            .rev()
            .find(|(_, c)| !c.is_whitespace())
            .map(|(b, _)| self.char_index(b) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_indexing() {
        let src = SourceText::new("Hello, world!");
        assert_eq!(src.len(), 13);
        assert_eq!(src.slice(7, 12), "world");
        assert_eq!(src.char_at(5), Some(','));
        assert_eq!(src.char_at(13), None);
    }

    #[test]
    fn test_multibyte_indexing() {
        // U+2019 is 3 bytes, U+1F600 is 4 bytes
        let src = SourceText::new("don\u{2019}t \u{1F600} ok");
        assert_eq!(src.len(), 10);
        assert_eq!(src.slice(0, 5), "don\u{2019}t");
        assert_eq!(src.char_at(6), Some('\u{1F600}'));
        assert_eq!(src.slice(8, 10), "ok");
        assert_eq!(src.char_index(src.byte_offset(8)), 8);
        assert_eq!(src.chars(3, 5), &['\u{2019}', 't']);
    }

    #[test]
    fn test_trim_positions() {
        let src = SourceText::new("  ab c\t\n");
        assert_eq!(src.first_non_space(), Some(2));
        assert_eq!(src.last_non_space_end(), Some(6));

        let blank = SourceText::new(" \t ");
        assert_eq!(blank.first_non_space(), None);
        assert_eq!(blank.last_non_space_end(), None);
    }

    #[test]
    fn test_empty_text() {
        let src = SourceText::new("");
        assert!(src.is_empty());
        assert_eq!(src.slice(0, 0), "");
    }
}
