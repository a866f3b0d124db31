//! Symbol-driven span splitting
//!
//! Scans a span left to right for the first character run that should stand
//! alone as a token: a separator, an edge symbol, or a currency-like symbol.
//! Numeric formats (`.5`, `-1`, `1,000`, `1:2`, `'97`) are skipped.

use crate::chars::{
    digit_at, digits_in, is_arrow, is_bracket, is_currency, is_digit, is_double_quote,
    is_final_mark, is_hyphen, is_punct, is_single_quote,
};

/// Symbol categories, checked in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    /// `, ; : ~ & | /`, brackets, arrows, double quotes, hyphens; always split
    Separator,
    /// Single quotes and sentence-final marks; split only at an edge
    EdgeSymbol,
    /// `#` and currency signs; split when they lead a number or end the span
    CurrencyLike,
}

impl SymbolClass {
    pub const ORDER: [SymbolClass; 3] = [
        SymbolClass::Separator,
        SymbolClass::EdgeSymbol,
        SymbolClass::CurrencyLike,
    ];

    /// Short name for logging
    pub fn name(self) -> &'static str {
        match self {
            SymbolClass::Separator => "separator",
            SymbolClass::EdgeSymbol => "edge_symbol",
            SymbolClass::CurrencyLike => "currency_like",
        }
    }

    /// Whether `c` belongs to this class
    pub fn contains(self, c: char) -> bool {
        match self {
            SymbolClass::Separator => {
                matches!(c, ',' | ';' | ':' | '~' | '&' | '|' | '/')
                    || is_bracket(c)
                    || is_arrow(c)
                    || is_double_quote(c)
                    || is_hyphen(c)
            }
            SymbolClass::EdgeSymbol => is_single_quote(c) || is_final_mark(c),
            SymbolClass::CurrencyLike => c == '#' || is_currency(c),
        }
    }

    /// Whether the run `chars[i..j]` of this class splits out
    fn accepts(self, chars: &[char], i: usize, j: usize) -> bool {
        let n = chars.len();
        match self {
            SymbolClass::Separator => true,
            SymbolClass::EdgeSymbol => {
                i + 1 < j || i == 0 || j == n || is_punct(chars[i - 1]) || is_punct(chars[j])
            }
            SymbolClass::CurrencyLike => i + 1 < j || j == n || is_digit(chars[j]),
        }
    }
}

/// A symbol run as `[start, end)` character offsets within the span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolMatch {
    pub class: SymbolClass,
    pub start: usize,
    pub end: usize,
}

/// Finds the first splittable symbol run in a span
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolSegmenter;

impl SymbolSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// First splittable symbol run in `token`
    pub fn find(&self, token: &str) -> Option<SymbolMatch> {
        let chars: Vec<char> = token.chars().collect();
        self.find_in(&chars)
    }

    /// First splittable symbol run in a character slice
    pub fn find_in(&self, chars: &[char]) -> Option<SymbolMatch> {
        for (i, &c) in chars.iter().enumerate() {
            if is_numeric_format(chars, i, c) {
                continue;
            }

            for class in SymbolClass::ORDER {
                if !class.contains(c) {
                    continue;
                }

                let j = run_end(chars, i, c);
                if class.accepts(chars, i, j) {
                    return Some(SymbolMatch {
                        class,
                        start: i,
                        end: j,
                    });
                }
            }
        }

        None
    }
}

/// Whether `chars[i]` is part of a number and must not split
fn is_numeric_format(chars: &[char], i: usize, c: char) -> bool {
    match c {
        // .5  +1
        '.' | '+' => digit_at(chars, Some(i + 1)),
        // -1
        '-' => i == 0 && digit_at(chars, Some(i + 1)),
        // 1,000,000
        ',' => {
            digit_at(chars, i.checked_sub(1))
                && digits_in(chars, i + 1, i + 4)
                && !digit_at(chars, Some(i + 4))
        }
        // 1:2
        ':' => digit_at(chars, i.checked_sub(1)) && digit_at(chars, Some(i + 1)),
        // '97
        c if is_single_quote(c) => digits_in(chars, i + 1, i + 3) && !digit_at(chars, Some(i + 3)),
        _ => false,
    }
}

/// End of the run starting at `i`: any mix of final marks, otherwise repeats of `c`
fn run_end(chars: &[char], i: usize, c: char) -> usize {
    let final_mark = is_final_mark(c);
    chars[i + 1..]
        .iter()
        .position(|&d| if final_mark { !is_final_mark(d) } else { d != c })
        .map_or(chars.len(), |p| i + 1 + p)
}
