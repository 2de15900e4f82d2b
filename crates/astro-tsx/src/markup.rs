//! Markup emission.
//!
//! Walks the template tree in document order. Source text between nodes is
//! copied as is, so recovery leftovers the parser did not attach to any node
//! still reach the output.

use crate::attributes::emit_attributes;
use crate::emitter::Emitter;
use astro_parser::{Comment, Element, TemplateNode};
use source_map::{ByteOffset, Span};

/// Emits `nodes` and every source byte between `start` and `end` that lies
/// outside of them.
pub(crate) fn emit_nodes(
    out: &mut Emitter<'_>,
    nodes: &[TemplateNode],
    start: ByteOffset,
    end: ByteOffset,
) {
    let mut cursor = start;
    for node in nodes {
        let span = node.span();
        if span.start > cursor {
            out.source(Span::new(cursor, span.start));
        }
        emit_node(out, node);
        cursor = cursor.max(span.end);
    }
    if end > cursor {
        out.source(Span::new(cursor, end));
    }
}

fn emit_node(out: &mut Emitter<'_>, node: &TemplateNode) {
    match node {
        TemplateNode::Element(element) => emit_element(out, element),
        TemplateNode::Text(text) => out.source(text.span),
        TemplateNode::Expression(expression) => out.source(expression.span),
        TemplateNode::Comment(comment) => emit_comment(out, comment),
        // No TSX counterpart.
        TemplateNode::Doctype(_) => {}
    }
}

fn emit_element(out: &mut Emitter<'_>, element: &Element) {
    if !element.start_tag_closed {
        out.source(element.span);
        return;
    }

    out.source(Span::new(element.span.start, element.name_span.end));
    emit_attributes(out, element);

    let tail = element.start_tag_tail();
    if element.is_void() && !element.self_closing {
        // `<br>` is not valid JSX.
        out.source(Span::new(tail.start, tail.end - source_map::offset(1)));
        out.generated("/>");
    } else {
        out.source(tail);
    }

    // A void element's redundant end tag is dropped.
    if element.self_closing || element.is_void() {
        return;
    }

    let content_end = element.end_tag.map_or(element.span.end, |tag| tag.start);
    match element.raw_content {
        Some(raw) => {
            emit_raw_text(out, raw);
            if content_end > raw.end {
                out.source(Span::new(raw.end, content_end));
            }
        }
        None => emit_nodes(out, &element.children, tail.end, content_end),
    }

    if let Some(end_tag) = element.end_tag {
        out.source(end_tag);
    }
}

/// Emits `script` and `style` content as a template literal so TSX treats it
/// as an opaque string.
fn emit_raw_text(out: &mut Emitter<'_>, raw: Span) {
    if raw.is_empty() {
        return;
    }
    let text = out.text(raw);
    let escaped = escape_template_literal(text);

    out.generated("{`");
    if escaped == text {
        out.source(raw);
    } else {
        out.transformed(raw, &escaped);
    }
    out.generated("`}");
}

fn emit_comment(out: &mut Emitter<'_>, comment: &Comment) {
    out.generated("{/*");
    if comment.data.contains("*/") {
        out.transformed(comment.data_span, &comment.data.replace("*/", "* /"));
    } else {
        out.source(comment.data_span);
    }
    out.generated("*/}");
}

/// Escapes backticks, `${` sequences and backslashes for embedding inside a
/// JavaScript template literal.
pub(crate) fn escape_template_literal(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '`' => result.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => result.push_str("\\$"),
            '\\' => result.push_str("\\\\"),
            _ => result.push(c),
        }
    }

    result
}
