//! Source scanning for embedded JavaScript.
//!
//! Expressions and template literals are not tokenized; the parser scans
//! the raw bytes to find where they end. All delimiters are ASCII, so
//! multi-byte characters pass through untouched.
//!
//! Expressions may hold markup (`{show && <p>Don't</p>}`). Quotes in markup
//! text are plain characters, so nested elements are skipped as markup and
//! only their `{...}` children are scanned as code again.

use crate::parser::is_void_element;

/// Whether the byte after `<` (or `</`) starts a tag name. `>` covers
/// fragments.
pub(crate) fn starts_tag_name(b: Option<&u8>) -> bool {
    b.is_some_and(|&b| b.is_ascii_alphabetic() || b == b'>' || !b.is_ascii())
}

/// Finds the offset of the `close` byte that ends the code starting at
/// `start`, skipping nested brackets, strings, template literals, comments
/// and regex literals.
///
/// Returns `None` if the input ends first.
pub(crate) fn find_closing(bytes: &[u8], start: usize, close: u8) -> Option<usize> {
    let mut depth = 0usize;
    // Start as if after an operator, so a leading `/` is a regex.
    let mut prev = b'=';
    let mut i = start;

    while let Some(&b) = bytes.get(i) {
        match b {
            b'"' | b'\'' => {
                i = skip_string(bytes, i)?;
                prev = b;
                continue;
            }
            b'`' => {
                i = skip_template_literal(bytes, i)?;
                prev = b;
                continue;
            }
            b'<' if starts_tag_name(bytes.get(i + 1))
                && (could_start_regex(prev) || follows_return(bytes, i)) =>
            {
                i = skip_markup(bytes, i)?;
                prev = b')';
                continue;
            }
            b'/' => match bytes.get(i + 1) {
                Some(b'/') => {
                    i = skip_line_comment(bytes, i);
                    continue;
                }
                Some(b'*') => {
                    i = skip_block_comment(bytes, i)?;
                    continue;
                }
                _ if could_start_regex(prev) => {
                    i = skip_regex(bytes, i);
                    prev = b'/';
                    continue;
                }
                _ => {}
            },
            b'{' | b'(' | b'[' => depth += 1,
            b'}' | b')' | b']' => {
                if depth == 0 {
                    if b == close {
                        return Some(i);
                    }
                } else {
                    depth -= 1;
                }
            }
            _ => {}
        }
        if !b.is_ascii_whitespace() {
            prev = b;
        }
        i += 1;
    }

    None
}

/// Skips markup whose first tag opens at `start`.
///
/// Returns the offset just past the element that balances the first tag, or
/// the offset of a `}` met in text, which ends the enclosing expression of
/// unbalanced markup such as `{ok && <p>}`. Returns `None` if the input ends
/// first.
fn skip_markup(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;

    while let Some(&b) = bytes.get(i) {
        match b {
            b'{' => i = find_closing(bytes, i + 1, b'}')? + 1,
            b'}' => return Some(i),
            b'<' if bytes[i..].starts_with(b"<!--") => {
                let len = bytes[i..].windows(3).position(|w| w == b"-->")?;
                i += len + 3;
            }
            b'<' if bytes.get(i + 1) == Some(&b'/') && starts_tag_name(bytes.get(i + 2)) => {
                i = skip_tag(bytes, i + 2)?.end;
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            b'<' if starts_tag_name(bytes.get(i + 1)) => {
                let tag = skip_tag(bytes, i + 1)?;
                let name = std::str::from_utf8(&bytes[i + 1..tag.name_end]).unwrap_or("");
                i = tag.end;
                if !tag.self_closing && !is_void_element(name) {
                    depth += 1;
                } else if depth == 0 {
                    return Some(i);
                }
            }
            _ => i += 1,
        }
    }

    None
}

/// The extent of one tag, as found by [`skip_tag`].
struct TagEnd {
    /// One past the last byte of the tag name.
    name_end: usize,
    /// One past the closing `>`.
    end: usize,
    self_closing: bool,
}

/// Skips the rest of a tag whose name begins at `start`: the name, then
/// attributes with quoted, backtick and `{...}` values.
fn skip_tag(bytes: &[u8], start: usize) -> Option<TagEnd> {
    let name_end = bytes[start..]
        .iter()
        .position(|&b| b.is_ascii_whitespace() || matches!(b, b'>' | b'/' | b'{'))
        .map_or(bytes.len(), |pos| start + pos);

    let mut i = name_end;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'"' | b'\'' => {
                let len = bytes.get(i + 1..)?.iter().position(|&c| c == b)?;
                i += len + 2;
            }
            b'`' => i = skip_template_literal(bytes, i)?,
            b'{' => i = find_closing(bytes, i + 1, b'}')? + 1,
            b'/' if bytes.get(i + 1) == Some(&b'>') => {
                return Some(TagEnd {
                    name_end,
                    end: i + 2,
                    self_closing: true,
                });
            }
            b'>' => {
                return Some(TagEnd {
                    name_end,
                    end: i + 1,
                    self_closing: false,
                });
            }
            _ => i += 1,
        }
    }

    None
}

/// Whether the code before `at` ends with the `return` keyword.
fn follows_return(bytes: &[u8], at: usize) -> bool {
    let before = bytes[..at].trim_ascii_end();
    before.ends_with(b"return")
        && !before[..before.len() - b"return".len()]
            .last()
            .is_some_and(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
}

/// Skips a template literal whose opening backtick is at `start`.
///
/// Returns the offset just past the closing backtick, or `None` if the input
/// ends first.
pub(crate) fn skip_template_literal(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'\\' => i += 2,
            b'`' => return Some(i + 1),
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                i = find_closing(bytes, i + 2, b'}')? + 1;
            }
            _ => i += 1,
        }
    }
    None
}

/// Skips a quoted string whose opening quote is at `start`.
///
/// A line break ends an unterminated string, which keeps a stray apostrophe
/// in text from swallowing the rest of the document.
fn skip_string(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    let mut i = start + 1;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'\\' => i += 2,
            b'\n' => return Some(i),
            _ if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |pos| start + pos)
}

fn skip_block_comment(bytes: &[u8], start: usize) -> Option<usize> {
    bytes
        .get(start + 2..)?
        .windows(2)
        .position(|w| w == b"*/")
        .map(|pos| start + 2 + pos + 2)
}

/// Skips a regex literal whose opening `/` is at `start`, flags included.
fn skip_regex(bytes: &[u8], start: usize) -> usize {
    let mut in_class = false;
    let mut i = start + 1;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'\\' => i += 2,
            b'[' => {
                in_class = true;
                i += 1;
            }
            b']' => {
                in_class = false;
                i += 1;
            }
            b'/' if !in_class => {
                i += 1;
                while bytes.get(i).is_some_and(u8::is_ascii_alphabetic) {
                    i += 1;
                }
                return i;
            }
            // Unterminated; treat the slash as division.
            b'\n' => return start + 1,
            _ => i += 1,
        }
    }
    start + 1
}

/// Determines if a `/` following `prev` could start a regex literal
/// rather than a division.
fn could_start_regex(prev: u8) -> bool {
    matches!(
        prev,
        b'=' | b'!'
            | b'+'
            | b'-'
            | b'*'
            | b'%'
            | b'>'
            | b'&'
            | b'|'
            | b'^'
            | b'~'
            | b'?'
            | b':'
            | b'('
            | b'['
            | b'{'
            | b','
            | b';'
    )
}
