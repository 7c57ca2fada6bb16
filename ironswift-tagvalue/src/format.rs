/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Matching of tag values against compiled format notation.
//!
//! The matcher walks the token tree depth-first. Character runs are greedy
//! and optional groups are tried before being skipped; on a later failure the
//! matcher backtracks into shorter runs and skipped groups, so `[/34x$]4*35x`
//! accepts both `/ACC\nNAME` and `NAME`. Slots restricted to a code list
//! only accept runs that are one of the codes.

use ironswift_dictionary::notation::{Charset, Length, Pattern, Token};
use ironswift_dictionary::schema::SlotCodes;
use smallvec::SmallVec;

/// Captured components, indexed by slot. `None` marks a skipped optional slot.
pub type Components<'v> = Vec<Option<&'v str>>;

/// Matches `value` against `pattern`.
///
/// # Returns
/// The captured components if the whole value matches, `None` otherwise.
#[must_use]
pub fn match_components<'v>(pattern: &Pattern, value: &'v str) -> Option<Components<'v>> {
    match_restricted(pattern, &[], value)
}

/// Matches `value` against `pattern`, with some slots restricted to code
/// lists.
#[must_use]
pub fn match_restricted<'v>(
    pattern: &Pattern,
    codes: &[SlotCodes],
    value: &'v str,
) -> Option<Components<'v>> {
    let mut matcher = Matcher {
        value,
        codes,
        captures: vec![None; pattern.slots()],
    };
    if matcher.matches(pattern.tokens(), &Cont::Done, 0) {
        Some(
            matcher
                .captures
                .into_iter()
                .map(|c| c.map(|(start, end)| &value[start..end]))
                .collect(),
        )
    } else {
        None
    }
}

/// Tokens still to be matched once the current sequence is exhausted.
enum Cont<'t, 'c> {
    Done,
    Then(&'t [Token], &'c Cont<'t, 'c>),
}

struct Matcher<'v, 'k> {
    value: &'v str,
    codes: &'k [SlotCodes],
    captures: Vec<Option<(usize, usize)>>,
}

impl Matcher<'_, '_> {
    /// Returns true if `tokens` followed by `cont` match the value from `pos`
    /// to its end. A false return leaves the touched captures cleared.
    fn matches(&mut self, tokens: &[Token], cont: &Cont<'_, '_>, pos: usize) -> bool {
        let Some((first, rest)) = tokens.split_first() else {
            return match cont {
                Cont::Done => pos == self.value.len(),
                Cont::Then(tokens, outer) => self.matches(tokens, outer, pos),
            };
        };

        match first {
            Token::Literal(c) => {
                self.value[pos..].starts_with(*c) && self.matches(rest, cont, pos + c.len_utf8())
            }
            Token::LineBreak => match line_break(&self.value[pos..]) {
                Some(len) => self.matches(rest, cont, pos + len),
                None => false,
            },
            Token::Chars {
                charset,
                length,
                slot,
            } => {
                let ends = run_ends(self.value, pos, *charset, length.max());
                self.try_ends(&ends, *length, *slot, pos, rest, cont)
            }
            Token::Lines {
                charset,
                lines,
                width,
                slot,
            } => {
                let ends = line_ends(self.value, pos, *charset, *lines, *width);
                self.try_ends(&ends, Length::Max(1), *slot, pos, rest, cont)
            }
            Token::Optional(inner) => {
                let then = Cont::Then(rest, cont);
                self.matches(inner, &then, pos) || self.matches(rest, cont, pos)
            }
        }
    }

    /// Tries the candidate end positions of one slot, longest first.
    ///
    /// `ends[i]` is the end after `i + 1` units; counts below `length.min()`
    /// are not tried and a fixed length is tried once.
    fn try_ends(
        &mut self,
        ends: &[usize],
        length: Length,
        slot: usize,
        pos: usize,
        rest: &[Token],
        cont: &Cont<'_, '_>,
    ) -> bool {
        let min = length.min();
        if ends.len() < min {
            return false;
        }
        for count in (min..=ends.len()).rev() {
            let end = ends[count - 1];
            if self.allowed(slot, &self.value[pos..end]) {
                self.captures[slot] = Some((pos, end));
                if self.matches(rest, cont, end) {
                    return true;
                }
            }
            if matches!(length, Length::Fixed(_)) {
                break;
            }
        }
        self.captures[slot] = None;
        false
    }

    fn allowed(&self, slot: usize, run: &str) -> bool {
        self.codes
            .iter()
            .filter(|c| c.slot == slot)
            .all(|c| c.accepts(run))
    }
}

/// Length of a line break (`\r\n` or `\n`) at the start of `s`.
fn line_break(s: &str) -> Option<usize> {
    if s.starts_with("\r\n") {
        Some(2)
    } else if s.starts_with('\n') {
        Some(1)
    } else {
        None
    }
}

/// End positions after each accepted character, at most `max` of them.
fn run_ends(value: &str, pos: usize, charset: Charset, max: usize) -> SmallVec<[usize; 35]> {
    value[pos..]
        .char_indices()
        .take_while(|&(_, c)| charset.accepts(c))
        .take(max)
        .map(|(i, c)| pos + i + c.len_utf8())
        .collect()
}

/// End positions after each complete line of a multi-line component.
///
/// Every line holds between one and `width` characters; lines are separated
/// by line breaks, which belong to the component.
fn line_ends(value: &str, pos: usize, charset: Charset, lines: u16, width: u16) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut start = pos;
    for _ in 0..lines {
        let Some(&end) = run_ends(value, start, charset, usize::from(width)).last() else {
            break;
        };
        ends.push(end);
        match line_break(&value[end..]) {
            Some(len) => start = end + len,
            None => break,
        }
    }
    ends
}
