//! Token emission with retroactive merges and candidate splits
//!
//! Every accepted span passes through [`PostProcessor::add_token`]. Merge
//! rules look backward at tokens already emitted; split rules look only at
//! the candidate. At most one merge or one split fires per candidate.

use crate::{
    chars::{digits_in, is_alnum_str, is_digit, is_digit_str, is_hyphen, is_single, is_single_quote, is_upper_str},
    error::Result,
    resources::{SplitOffsets, WordTables},
    token::Token,
};
use regex::Regex;
use smallvec::smallvec;

/// Rules that fuse the candidate into previously emitted tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeRule {
    /// `'` + `cause` -> `'cause`
    ApostropheFront,
    /// `U.S` + `.` -> `U.S.`, `Dr` + `.` -> `Dr.`
    AbbreviationPeriod,
    /// `AT` + `&` + `T` -> `AT&T`
    Acronym,
    /// `e` + `-` + `mail` -> `e-mail`, `555` + `-` + `1234` -> `555-1234`
    HyphenatedCompound,
}

impl MergeRule {
    pub fn name(self) -> &'static str {
        match self {
            MergeRule::ApostropheFront => "apostrophe_front",
            MergeRule::AbbreviationPeriod => "abbreviation_period",
            MergeRule::Acronym => "acronym",
            MergeRule::HyphenatedCompound => "hyphenated_compound",
        }
    }

    /// How many already-emitted tokens the merge absorbs
    pub fn absorbed(self) -> usize {
        match self {
            MergeRule::ApostropheFront | MergeRule::AbbreviationPeriod => 1,
            MergeRule::Acronym | MergeRule::HyphenatedCompound => 2,
        }
    }
}

/// Rules that explode the candidate into several tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitRule {
    /// `10kg` -> `10`, `kg`
    UnitSuffix,
    /// `cannot` -> `can`, `not`
    ConcatenatedWord,
    /// `hello.World` -> `hello`, `.`, `World`
    InteriorFinalMark,
}

impl SplitRule {
    pub fn name(self) -> &'static str {
        match self {
            SplitRule::UnitSuffix => "unit_suffix",
            SplitRule::ConcatenatedWord => "concatenated_word",
            SplitRule::InteriorFinalMark => "interior_final_mark",
        }
    }
}

// a.b.c 1-2-3
const DOTTED_ABBREVIATION: &str = r"^[A-Za-z0-9](?:[.\-][A-Za-z0-9])*$";

// 10kg 1cm 5p.m
const UNIT: &str =
    r"(?i)([0-9])([acdfkmnpyz]?[mg]|[ap]\.m|ch|cwt|d|drc|ft|fur|gr|h|in|lb|lea|mi|ms|oz|pg|qtr|yd)$";

// hello.World
const FINAL_MARK_IN_BETWEEN: &str = r"^([A-Za-z]{3,})([.?!]+)([A-Za-z]{3,})$";

/// Merge/split stage between span resolution and the output sequence
#[derive(Debug, Clone)]
pub struct PostProcessor {
    tables: WordTables,
    dotted_abbreviation: Regex,
    unit: Regex,
    final_mark_in_between: Regex,
}

impl PostProcessor {
    pub fn new(tables: WordTables) -> Result<Self> {
        Ok(Self {
            tables,
            dotted_abbreviation: Regex::new(DOTTED_ABBREVIATION)?,
            unit: Regex::new(UNIT)?,
            final_mark_in_between: Regex::new(FINAL_MARK_IN_BETWEEN)?,
        })
    }

    pub fn tables(&self) -> &WordTables {
        &self.tables
    }

    /// Append the candidate `token` spanning `[begin, end)` to `out`
    ///
    /// The candidate is merged into the previous token(s), split into
    /// several tokens, or appended as is, in that order of preference.
    pub fn add_token(&self, out: &mut Vec<Token>, token: &str, begin: usize, end: usize) {
        if let Some(rule) = self.merge_rule(out, token, begin) {
            log::trace!("merge {} at [{begin},{end}): {token:?}", rule.name());
            merge(out, rule, token, end);
            return;
        }

        undo_no_dot(out, token);

        if let Some((rule, cuts)) = self.split_points(token) {
            log::trace!("split {} at [{begin},{end}): {token:?} -> {cuts:?}", rule.name());
            push_pieces(out, token, begin, &cuts);
            return;
        }

        out.push(Token::new(token, begin, end));
    }

    /// Merge rule that fires for the candidate, if any
    ///
    /// Only tokens that touch the candidate (no whitespace in between) are
    /// merged, so merged text always equals its source span.
    pub fn merge_rule(&self, out: &[Token], token: &str, begin: usize) -> Option<MergeRule> {
        let curr = token.to_lowercase();

        if let Some(prev) = out.last().filter(|p| p.end == begin) {
            let prev = prev.text.to_lowercase();

            if self.is_apostrophe_front(&prev, &curr) {
                return Some(MergeRule::ApostropheFront);
            }
            if self.is_abbreviation_period(&prev, &curr) {
                return Some(MergeRule::AbbreviationPeriod);
            }
        }

        if let [.., prev, conn] = out {
            if prev.end != conn.begin || conn.end != begin {
                return None;
            }

            if is_acronym(&prev.text, &conn.text, token) {
                return Some(MergeRule::Acronym);
            }
            if self.is_hyphenated(&prev.text.to_lowercase(), &conn.text, &curr) {
                return Some(MergeRule::HyphenatedCompound);
            }
        }

        None
    }

    fn is_apostrophe_front(&self, prev: &str, curr: &str) -> bool {
        is_single(prev, is_single_quote) && self.tables.is_apostrophe_front(curr)
    }

    fn is_abbreviation_period(&self, prev: &str, curr: &str) -> bool {
        curr == "."
            && (self.dotted_abbreviation.is_match(prev) || self.tables.is_abbreviation_period(prev))
    }

    fn is_hyphenated(&self, prev: &str, conn: &str, next: &str) -> bool {
        if !is_single(conn, is_hyphen) {
            return false;
        }

        let p: Vec<char> = prev.chars().collect();
        let n = p.len();

        // 000-0000, 000-000-0000
        if n >= 3 && digits_in(&p, n - 3, n) && (n == 3 || is_hyphen(p[n - 4])) && is_digit_str(next) {
            return true;
        }

        // p-u-s-h
        if p.last().is_some_and(|c| c.is_alphanumeric())
            && (n == 1 || is_hyphen(p[n - 2]))
            && is_single(next, char::is_alphanumeric)
        {
            return true;
        }

        (self.tables.is_hyphen_prefix(prev) && is_alnum_str(next))
            || (self.tables.is_hyphen_suffix(next) && is_alnum_str(prev))
    }

    /// Split rule that fires for the candidate and its cumulative piece ends
    ///
    /// Offsets are character counts relative to the candidate; the last one
    /// always equals its length.
    pub fn split_points(&self, token: &str) -> Option<(SplitRule, SplitOffsets)> {
        let len = token.chars().count();

        if let Some(unit) = self.unit.captures(token).and_then(|c| c.get(2)) {
            let cut = char_offset(token, unit.start());
            return Some((SplitRule::UnitSuffix, smallvec![cut, len]));
        }

        if let Some(offsets) = self.tables.concat_split(&token.to_lowercase()) {
            // lower-casing can change the length of some non-ASCII words
            if offsets.last() == Some(&len) {
                return Some((SplitRule::ConcatenatedWord, offsets.clone()));
            }
        }

        if let Some(caps) = self.final_mark_in_between.captures(token) {
            let cuts = (1..=3)
                .filter_map(|g| caps.get(g))
                .map(|m| char_offset(token, m.end()))
                .collect::<SplitOffsets>();
            return Some((SplitRule::InteriorFinalMark, cuts));
        }

        None
    }
}

/// Fuse the candidate into the last `rule.absorbed()` tokens
fn merge(out: &mut Vec<Token>, rule: MergeRule, token: &str, end: usize) {
    let conn = if rule.absorbed() == 2 { out.pop() } else { None };

    if let Some(last) = out.last_mut() {
        if let Some(conn) = conn {
            last.text.push_str(&conn.text);
        }
        last.text.push_str(token);
        last.end = end;
    }
}

/// Legacy correction: `no` `.` followed by a numeral becomes `no.`
///
/// Fires only when the previous two tokens are exactly `no` and `.` with no
/// space between them. It rewrites already-emitted output and does not count
/// as a merge: the candidate is still appended afterwards.
fn undo_no_dot(out: &mut Vec<Token>, token: &str) {
    let fires = match out.as_slice() {
        [.., no, dot] => {
            no.text.to_lowercase() == "no"
                && dot.text == "."
                && no.end == dot.begin
                && token.chars().next().is_some_and(is_digit)
        }
        _ => false,
    };

    if fires {
        if let Some(dot) = out.pop() {
            if let Some(no) = out.last_mut() {
                log::trace!("legacy no-dot-digit correction at [{},{})", no.begin, dot.end);
                no.text.push_str(&dot.text);
                no.end = dot.end;
            }
        }
    }
}

/// Append the pieces of `token` ending at each cut
fn push_pieces(out: &mut Vec<Token>, token: &str, begin: usize, cuts: &[usize]) {
    let mut start = 0;
    for &cut in cuts {
        let text = &token[byte_offset(token, start)..byte_offset(token, cut)];
        out.push(Token::new(text, begin + start, begin + cut));
        start = cut;
    }
}

fn char_offset(token: &str, byte: usize) -> usize {
    token[..byte].chars().count()
}

fn byte_offset(token: &str, chars: usize) -> usize {
    token.char_indices().nth(chars).map_or(token.len(), |(b, _)| b)
}

/// `&`, `|`, or `/` between two short or two upper-case tokens
fn is_acronym(prev: &str, conn: &str, next: &str) -> bool {
    is_single(conn, |c| matches!(c, '&' | '|' | '/'))
        && ((prev.chars().count() <= 2 && next.chars().count() <= 2)
            || (is_upper_str(prev) && is_upper_str(next)))
}
