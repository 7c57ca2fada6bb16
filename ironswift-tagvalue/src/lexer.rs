/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Zero-copy tag lexers for SWIFT MT blocks.
//!
//! Two tag syntaxes exist:
//! - text form, used by the block 4 of user messages: `:20:REF` lines closed
//!   by a `-` terminator line
//! - brace form, used by blocks 3 and 5 and by the block 4 of system
//!   messages: `{108:REF}{119:STP}`
//!
//! Neither lexer fails. Malformed entries are reported at `debug` level and
//! the rest of the block is still lexed.

use ironswift_core::field::TagRef;
use memchr::{memchr, memchr2};
use smallvec::SmallVec;
use tracing::debug;

/// Line that closes a text-form block 4.
pub const TEXT_BLOCK_TERMINATOR: &str = "-";

/// Longest tag code accepted in a text-form opener (`32A`).
const MAX_TEXT_TAG_LEN: usize = 3;

/// Tags lexed from one block.
pub type Tags<'a> = SmallVec<[TagRef<'a>; 16]>;

/// Lexes a text-form body (`:TAG:value` lines).
///
/// A tag value runs up to the line break preceding the next tag opener or
/// the terminator line and may span several lines. Lines that only look like
/// an opener (`:20` without its closing colon) are kept as continuation text.
#[must_use]
pub fn text_tags(body: &str) -> Tags<'_> {
    let bytes = body.as_bytes();
    let mut tags = Tags::new();
    // (name, value start, value end)
    let mut current: Option<(&str, usize, usize)> = None;
    let mut pos = 0;

    loop {
        let line_end = memchr(b'\n', &bytes[pos..]).map_or(body.len(), |i| pos + i);
        let mut content_end = line_end;
        if content_end > pos && bytes[content_end - 1] == b'\r' {
            content_end -= 1;
        }
        let line = &body[pos..content_end];

        if line == TEXT_BLOCK_TERMINATOR {
            break;
        }

        if let Some((name, value_offset)) = text_opener(line) {
            if let Some((name, start, end)) = current.take() {
                tags.push(TagRef::new(name, &body[start..end]));
            }
            current = Some((name, pos + value_offset, content_end));
        } else if let Some((name, _, end)) = current.as_mut() {
            if line.starts_with(':') {
                debug!(tag = *name, line, "malformed tag opener kept as continuation");
            }
            if !line.trim().is_empty() {
                *end = content_end;
            }
        } else if !line.trim().is_empty() {
            debug!(line, "text before the first tag ignored");
        }

        if line_end >= body.len() {
            break;
        }
        pos = line_end + 1;
    }

    if let Some((name, start, end)) = current {
        tags.push(TagRef::new(name, &body[start..end]));
    }
    tags
}

/// Recognizes `:TAG:` at the start of a line.
///
/// Returns the tag name and the byte offset of its value within the line.
fn text_opener(line: &str) -> Option<(&str, usize)> {
    let rest = line.strip_prefix(':')?;
    let close = memchr(b':', rest.as_bytes())?;
    let name = &rest[..close];
    let valid = !name.is_empty()
        && name.len() <= MAX_TEXT_TAG_LEN
        && name.as_bytes()[0].is_ascii_digit()
        && name.bytes().all(|b| b.is_ascii_alphanumeric());
    valid.then_some((name, close + 2))
}

/// Lexes a brace-form body (`{name:value}` entries).
///
/// Values may contain balanced nested braces. An entry without a closing
/// brace ends the lexing; an entry without a name is skipped.
#[must_use]
pub fn brace_tags(body: &str) -> Tags<'_> {
    let bytes = body.as_bytes();
    let mut tags = Tags::new();
    let mut pos = 0;

    while pos < body.len() {
        let Some(open) = memchr(b'{', &bytes[pos..]).map(|i| pos + i) else {
            if !body[pos..].trim().is_empty() {
                debug!(text = &body[pos..], "trailing text outside tags ignored");
            }
            break;
        };
        if !body[pos..open].trim().is_empty() {
            debug!(text = &body[pos..open], "text between tags ignored");
        }
        let Some(close) = matching_brace(bytes, open) else {
            debug!(offset = open, "unterminated tag skipped");
            break;
        };

        let entry = &body[open + 1..close];
        let (name, value) = entry.split_once(':').unwrap_or((entry, ""));
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
            debug!(entry, "tag without a valid name skipped");
        } else {
            tags.push(TagRef::new(name, value));
        }
        pos = close + 1;
    }
    tags
}

/// Finds the brace closing the one opened at `open`, honouring nesting.
#[must_use]
pub fn matching_brace(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = open;
    while let Some(i) = memchr2(b'{', b'}', &bytes[pos..]) {
        let at = pos + i;
        if bytes[at] == b'{' {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                return Some(at);
            }
        }
        pos = at + 1;
    }
    None
}
