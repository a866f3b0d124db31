//! Pattern recognizers for spans that must not be decomposed
//!
//! Patterns are tried in a fixed priority order. The first pattern with any
//! match in the span wins, wherever that match lies.

use crate::error::Result;
use core::fmt;
use regex::Regex;

/// Kinds of non-decomposable spans, listed in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// `&amp;`, `&#123;`, `&#x1F;`
    HtmlEntity,
    /// `jinho@elit.cloud`, `user:secret@127.0.0.1`
    Email,
    /// Network protocol prefix (`https://...`); runs to the end of the span
    Hyperlink,
    /// `:-)`, `;D`, `:smile:`, `<3`
    Emoticon,
    /// `[1]`, `(1a)`, `{A}`, `((---))`
    ListMarker,
    /// `n't`, `'ll`, `'s` after a letter
    Contraction,
}

impl PatternKind {
    /// Fixed priority order
    pub const PRIORITY: [PatternKind; 6] = [
        PatternKind::HtmlEntity,
        PatternKind::Email,
        PatternKind::Hyperlink,
        PatternKind::Emoticon,
        PatternKind::ListMarker,
        PatternKind::Contraction,
    ];

    /// Short name for logging
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::HtmlEntity => "html_entity",
            PatternKind::Email => "email",
            PatternKind::Hyperlink => "hyperlink",
            PatternKind::Emoticon => "emoticon",
            PatternKind::ListMarker => "list_marker",
            PatternKind::Contraction => "contraction",
        }
    }

    /// Capture group holding the token; the rest of the match is trailing context
    fn group(self) -> usize {
        match self {
            PatternKind::Emoticon | PatternKind::Contraction => 1,
            _ => 0,
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A pattern match as `[start, end)` character offsets within the span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    pub kind: PatternKind,
    pub start: usize,
    pub end: usize,
}

const HTML_ENTITY: &str = r"&(?:[A-Za-z]+|#[0-9]+|#[Xx][0-9A-Fa-f]+);";

const EMAIL: &str =
    r"[\w.\-]+(?::\S+)?@(?:(?:[A-Za-z0-9\-]+\.)+[A-Za-z]{2,12}|[0-9]{1,3}(?:\.[0-9]{1,3}){3})";

const NETWORK_PROTOCOL: &str =
    r"(?:http|https|ftp|sftp|ssh|ssl|telnet|smtp|pop3|imap|imap4|sip)://";

// :abc:  <3 </3 <\3  (: ): \: *: $: (-: (^: (= (;  :) :( =) B) 8) :-) :^) :3 :D :p :| :(( :---)
const EMOTICON: &str =
    r"(:\w+:|<[\\/]?3|[()\\|*$][-^]?[:=;]|[:=;B8][-^]*[3DOPp@$*()\\/|]+)(?:\W|$)";

const LIST_MARKER: &str =
    r"[\[({<]+(?:[0-9]+[A-Za-z]?|[A-Za-z][0-9]*|\W+)(?:\.(?:[0-9]+|[A-Za-z]))*[\])}>]+";

const CONTRACTION: &str = r"(?i)[a-z](n['\x{2019}]t|['\x{2019}](?:ll|nt|re|ve|[dmstz]))(?:\W|$)";

/// Ordered set of compiled recognizers
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    html_entity: Regex,
    email: Regex,
    network_protocol: Regex,
    emoticon: Regex,
    list_marker: Regex,
    contraction: Regex,
}

impl PatternLibrary {
    /// Compile all patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            html_entity: Regex::new(HTML_ENTITY)?,
            email: Regex::new(EMAIL)?,
            network_protocol: Regex::new(NETWORK_PROTOCOL)?,
            emoticon: Regex::new(EMOTICON)?,
            list_marker: Regex::new(LIST_MARKER)?,
            contraction: Regex::new(CONTRACTION)?,
        })
    }

    fn regex(&self, kind: PatternKind) -> &Regex {
        match kind {
            PatternKind::HtmlEntity => &self.html_entity,
            PatternKind::Email => &self.email,
            PatternKind::Hyperlink => &self.network_protocol,
            PatternKind::Emoticon => &self.emoticon,
            PatternKind::ListMarker => &self.list_marker,
            PatternKind::Contraction => &self.contraction,
        }
    }

    /// First match of the highest-priority pattern that matches anywhere in `token`
    pub fn find(&self, token: &str) -> Option<PatternMatch> {
        PatternKind::PRIORITY
            .iter()
            .find_map(|&kind| self.find_kind(kind, token))
    }

    /// Leftmost match of a single pattern
    pub fn find_kind(&self, kind: PatternKind, token: &str) -> Option<PatternMatch> {
        let regex = self.regex(kind);

        let (start, end) = match kind {
            // everything from the scheme onwards is one unit
            PatternKind::Hyperlink => (regex.find(token)?.start(), token.len()),
            _ if kind.group() == 0 => {
                let m = regex.find(token)?;
                (m.start(), m.end())
            }
            _ => {
                let m = regex.captures(token)?.get(kind.group())?;
                (m.start(), m.end())
            }
        };

        if start == end {
            return None;
        }

        let start_char = token[..start].chars().count();
        Some(PatternMatch {
            kind,
            start: start_char,
            end: start_char + token[start..end].chars().count(),
        })
    }
}
