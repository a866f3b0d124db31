//! Character classification used by the symbol segmenter and merge rules
//!
//! All predicates are O(1) `match` tables over `char`.

/// Straight, curly, and prime single quotes
#[inline]
pub fn is_single_quote(c: char) -> bool {
    matches!(
        c,
        '\'' | '`' | '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' | '\u{FF07}'
    )
}

/// Straight, curly, and angle double quotes
#[inline]
pub fn is_double_quote(c: char) -> bool {
    matches!(
        c,
        '"' | '\u{201C}'
            | '\u{201D}'
            | '\u{201E}'
            | '\u{201F}'
            | '\u{2033}'
            | '\u{00AB}'
            | '\u{00BB}'
            | '\u{FF02}'
    )
}

/// Hyphen, dashes, and minus signs
#[inline]
pub fn is_hyphen(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{2010}'..='\u{2015}' | '\u{2043}' | '\u{2212}' | '\u{FE63}' | '\u{FF0D}'
    )
}

/// Opening and closing brackets
#[inline]
pub fn is_bracket(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '<'
            | '>'
            | '\u{2329}'
            | '\u{232A}'
            | '\u{27E8}'..='\u{27EF}'
            | '\u{3008}'..='\u{3011}'
            | '\u{3014}'..='\u{301B}'
            | '\u{FF08}'
            | '\u{FF09}'
            | '\u{FF3B}'
            | '\u{FF3D}'
            | '\u{FF5B}'
            | '\u{FF5D}'
    )
}

/// Arrow symbols
#[inline]
pub fn is_arrow(c: char) -> bool {
    matches!(
        c,
        '\u{2190}'..='\u{21FF}' | '\u{27F0}'..='\u{27FF}' | '\u{2900}'..='\u{297F}'
    )
}

/// Sentence-final marks
#[inline]
pub fn is_final_mark(c: char) -> bool {
    matches!(
        c,
        '.' | '?' | '!' | '\u{203C}' | '\u{203D}' | '\u{2047}'..='\u{2049}'
    )
}

/// Currency symbols
#[inline]
pub fn is_currency(c: char) -> bool {
    matches!(
        c,
        '$' | '\u{00A2}'..='\u{00A5}'
            | '\u{20A0}'..='\u{20C0}'
            | '\u{FF04}'
            | '\u{FFE0}'
            | '\u{FFE1}'
            | '\u{FFE5}'
            | '\u{FFE6}'
    )
}

/// Punctuation characters (Unicode category P for the ranges English text uses)
///
/// ASCII symbols such as `$`, `+`, `<`, `=`, `>`, `^`, `` ` ``, `|`, `~` are
/// category S and do not count.
#[inline]
pub fn is_punct(c: char) -> bool {
    matches!(
        c,
        '!' | '"'
            | '#'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | ';'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '_'
            | '{'
            | '}'
            | '\u{00A1}'
            | '\u{00A7}'
            | '\u{00AB}'
            | '\u{00B6}'
            | '\u{00B7}'
            | '\u{00BB}'
            | '\u{00BF}'
            | '\u{2010}'..='\u{2027}'
            | '\u{2030}'..='\u{205E}'
            | '\u{3001}'..='\u{3003}'
            | '\u{3008}'..='\u{3011}'
    )
}

/// ASCII decimal digit
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Whether `chars[i]` exists and is a digit
#[inline]
pub fn digit_at(chars: &[char], i: Option<usize>) -> bool {
    matches!(i.and_then(|i| chars.get(i)), Some(&c) if is_digit(c))
}

/// Whether `chars[i..j]` is a non-empty, in-bounds run of digits
pub fn digits_in(chars: &[char], i: usize, j: usize) -> bool {
    i < j && j <= chars.len() && chars[i..j].iter().all(|&c| is_digit(c))
}

/// Non-empty and every character is alphanumeric
pub fn is_alnum_str(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphanumeric)
}

/// Non-empty and every character is a digit
pub fn is_digit_str(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_digit)
}

/// At least one cased character and no lowercase characters
pub fn is_upper_str(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

/// The whole string is exactly one character satisfying `pred`
pub fn is_single<F: Fn(char) -> bool>(s: &str, pred: F) -> bool {
    let mut it = s.chars();
    matches!((it.next(), it.next()), (Some(c), None) if pred(c))
}
