//! Frontmatter emission.

use crate::emitter::Emitter;
use astro_parser::Frontmatter;

/// Emits the script between the fences verbatim.
///
/// Returns true if the markup wrapper needs a `"";` statement in front of
/// it. The wrapper starts with `<`, which would otherwise continue an
/// unterminated last statement as a comparison or a type argument list.
pub(crate) fn emit_frontmatter(out: &mut Emitter<'_>, frontmatter: &Frontmatter) -> bool {
    out.source(frontmatter.content_span);
    needs_disambiguator(&frontmatter.content)
}

/// Returns true if the script has code and its last significant character
/// is not a `;`.
pub(crate) fn needs_disambiguator(script: &str) -> bool {
    last_significant_char(script).is_some_and(|c| c != ';')
}

/// Finds the last character that is not whitespace or part of a comment.
/// A string or template literal counts as its closing delimiter.
fn last_significant_char(script: &str) -> Option<char> {
    let mut chars = script.chars().peekable();
    let mut last = None;

    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'/') => {
                while chars.next_if(|&n| n != '\n').is_some() {}
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for n in chars.by_ref() {
                    if prev == '*' && n == '/' {
                        break;
                    }
                    prev = n;
                }
            }
            '"' | '\'' | '`' => {
                let mut escaped = false;
                for n in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if n == '\\' {
                        escaped = true;
                    } else if n == c {
                        break;
                    } else if n == '\n' && c != '`' {
                        break;
                    }
                }
                last = Some(c);
            }
            c if c.is_whitespace() => {}
            c => last = Some(c),
        }
    }

    last
}
